use leptos::prelude::*;

use crate::gallery::{GalleryController, GalleryEvent};

/// Shared handle to the page's [`GalleryController`]. Components only ever
/// mutate it through [`GalleryHandle::dispatch`].
#[derive(Debug, Clone, Copy)]
pub struct GalleryHandle {
    state: RwSignal<GalleryController>,
}

impl GalleryHandle {
    pub fn provide(controller: GalleryController) -> Self {
        let handle = Self {
            state: RwSignal::new(controller),
        };
        provide_context(handle);
        handle
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn dispatch(&self, event: GalleryEvent) {
        let mut notes = Vec::new();
        self.state.update(|controller| notes = controller.apply(event));
        for note in notes {
            log::debug!("{}: {:?}", note.name(), note);
        }
    }

    /// Tracked read.
    pub fn with<T>(&self, f: impl FnOnce(&GalleryController) -> T) -> T {
        self.state.with(f)
    }

    pub fn with_untracked<T>(&self, f: impl FnOnce(&GalleryController) -> T) -> T {
        self.state.with_untracked(f)
    }
}

/// Starts fetching `src` so a later swap shows it without a flash.
pub fn preload_image(src: &str) {
    if let Ok(img) = web_sys::HtmlImageElement::new() {
        img.set_src(src);
    }
}
