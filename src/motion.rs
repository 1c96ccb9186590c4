//! Pure helpers behind the page's small animations.

use std::time::Duration;

/// Pause before the hero title starts typing.
pub const TYPE_START_DELAY: Duration = Duration::from_millis(500);
/// Time between typed characters.
pub const TYPE_CHAR_DELAY: Duration = Duration::from_millis(100);

/// First `chars` characters of `text`, never splitting a code point.
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub const TILT_RESET: &str =
    "perspective(1000px) rotateX(0) rotateY(0) translate3d(0, 0, 0) scale3d(1, 1, 1)";

/// Max pull towards the cursor, in px.
const MAGNET: f64 = 5.0;

/// Transform for a cursor at `(x, y)` inside a `width` x `height` box.
/// `strength` is the full rotation range in degrees.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64, strength: f64) -> String {
    if width <= 0.0 || height <= 0.0 {
        return TILT_RESET.to_string();
    }
    let (cx, cy) = (width / 2.0, height / 2.0);
    let dx = (x - cx) / cx;
    let dy = (y - cy) / cy;
    // `+ 0.0` turns -0.0 into 0.0
    let rotate_x = dy * -(strength / 2.0) + 0.0;
    let rotate_y = dx * (strength / 2.0) + 0.0;
    format!(
        "perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) translate3d({:.2}px, {:.2}px, 0) scale3d(1.02, 1.02, 1.02)",
        dx * MAGNET + 0.0,
        dy * MAGNET + 0.0,
    )
}

/// Cursor position as percentages of the box, for the card glow.
pub fn pointer_percent(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (50.0, 50.0);
    }
    (x / width * 100.0, y / height * 100.0)
}
