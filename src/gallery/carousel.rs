use std::fmt;

use serde::{Deserialize, Serialize};

use super::GalleryError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarouselId(String);

impl CarouselId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CarouselId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Emitted whenever a carousel lands on a slide, even if the index did not move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideChanged {
    pub carousel: CarouselId,
    pub index: usize,
}

/// Maps any signed index onto `0..len`.
///
/// `len` must be non-zero; carousels without slides are never constructed.
pub fn wrap_index(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "cannot wrap into an empty carousel");
    index.rem_euclid(len as isize) as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    id: CarouselId,
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    pub fn new(id: CarouselId, slides: Vec<Slide>) -> Result<Self, GalleryError> {
        if slides.is_empty() {
            return Err(GalleryError::EmptyCarousel(id));
        }
        Ok(Self {
            id,
            slides,
            index: 0,
        })
    }

    pub fn id(&self) -> &CarouselId {
        &self.id
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true for a constructed carousel.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.index]
    }

    pub fn go_to(&mut self, index: isize) -> SlideChanged {
        self.index = wrap_index(index, self.len());
        SlideChanged {
            carousel: self.id.clone(),
            index: self.index,
        }
    }

    pub fn next(&mut self) -> SlideChanged {
        self.go_to(self.index as isize + 1)
    }

    pub fn previous(&mut self) -> SlideChanged {
        self.go_to(self.index as isize - 1)
    }

    /// CSS transform for the slide track.
    pub fn translate(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }

    /// Swaps the slide sources in place, keeping the current index.
    pub(super) fn replace_slides(&mut self, slides: Vec<Slide>) -> Result<(), GalleryError> {
        if slides.len() != self.slides.len() {
            return Err(GalleryError::SlideCountMismatch {
                carousel: self.id.clone(),
                expected: self.slides.len(),
                actual: slides.len(),
            });
        }
        self.slides = slides;
        Ok(())
    }
}

/// `loaded` marker of one rendered slide image across a source swap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideLoad {
    loaded: bool,
}

impl SlideLoad {
    pub fn is_loaded(self) -> bool {
        self.loaded
    }

    /// The old image started fading out.
    pub fn fade_out(&mut self) {
        self.loaded = false;
    }

    /// The element reported on its current source. Images already complete
    /// never fire `load`.
    pub fn source_set(&mut self, complete: bool) {
        self.loaded |= complete;
    }

    pub fn load(&mut self) {
        self.loaded = true;
    }
}
