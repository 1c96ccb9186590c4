/// Minimum horizontal travel, in CSS pixels, before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    pub fn offset(self) -> isize {
        match self {
            Self::Next => 1,
            Self::Previous => -1,
        }
    }
}

/// Finger moving left (start right of end) pages forward.
pub fn swipe_step(start_x: f64, end_x: f64) -> Option<Step> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD {
        None
    } else if diff > 0.0 {
        Some(Step::Next)
    } else {
        Some(Step::Previous)
    }
}

pub fn key_step(key: &str) -> Option<Step> {
    match key {
        "ArrowRight" => Some(Step::Next),
        "ArrowLeft" => Some(Step::Previous),
        _ => None,
    }
}

/// Remembers where a touch started until it ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Returns `(start_x, end_x)` for a touch that was begun, then forgets it.
    pub fn finish(&mut self, x: f64) -> Option<(f64, f64)> {
        self.start_x.take().map(|start| (start, x))
    }
}
