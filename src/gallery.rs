//! Carousel, lightbox and tab-switcher state.
//!
//! Everything in here is plain data plus pure transitions so it can be
//! exercised without a browser. The Leptos components in `app` only translate
//! DOM events into [`GalleryEvent`]s and render whatever the
//! [`GalleryController`] currently holds.

mod carousel;
mod controller;
mod gesture;
mod lightbox;
mod tabs;

pub use carousel::{wrap_index, Carousel, CarouselId, Slide, SlideChanged, SlideLoad};
pub use controller::{GalleryController, GalleryEvent, Notification};
pub use gesture::{key_step, swipe_step, Step, SwipeTracker, SWIPE_THRESHOLD};
pub use lightbox::{FadeSettle, FadeStep, Lightbox, LightboxFade, LightboxFrame, LightboxSession};
pub use tabs::{
    GalleryId, SliderGeometry, TabBarLayout, TabMetrics, TabbedGallery, Variant, VariantImages,
    VariantSet,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("carousel `{0}` has no slides")]
    EmptyCarousel(CarouselId),
    #[error("carousel `{0}` is registered twice")]
    DuplicateCarousel(CarouselId),
    #[error("gallery `{0}` is registered twice")]
    DuplicateGallery(GalleryId),
    #[error("gallery `{gallery}` drives unknown carousel `{carousel}`")]
    UnknownCarousel {
        gallery: GalleryId,
        carousel: CarouselId,
    },
    #[error("gallery `{gallery}` has {primary} primary and {secondary} secondary images")]
    UnevenVariants {
        gallery: GalleryId,
        primary: usize,
        secondary: usize,
    },
    #[error("carousel `{carousel}` has {expected} slides but was given {actual}")]
    SlideCountMismatch {
        carousel: CarouselId,
        expected: usize,
        actual: usize,
    },
}
