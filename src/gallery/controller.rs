use std::collections::HashMap;

use super::{
    key_step, swipe_step, Carousel, CarouselId, GalleryError, GalleryId, Lightbox, LightboxFrame,
    LightboxSession, SlideChanged, Step, TabbedGallery, Variant,
};

/// Everything a user can do to a carousel, the lightbox or a tab bar.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    GoTo { carousel: CarouselId, index: isize },
    Next(CarouselId),
    Previous(CarouselId),
    Swipe { carousel: CarouselId, start_x: f64, end_x: f64 },
    Key { carousel: CarouselId, key: String },
    OpenLightbox { carousel: CarouselId, index: isize },
    CloseLightbox,
    LightboxGoTo(isize),
    LightboxNext,
    LightboxPrevious,
    LightboxSwipe { start_x: f64, end_x: f64 },
    LightboxKey(String),
    SelectVariant { gallery: GalleryId, variant: Variant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    SlideChanged(SlideChanged),
    VariantChanged { gallery: GalleryId, variant: Variant },
    LightboxRendered(LightboxFrame),
    LightboxClosed,
}

impl Notification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SlideChanged(_) => "carousel-slide-changed",
            Self::VariantChanged { .. } => "gallery-variant-changed",
            Self::LightboxRendered(_) => "lightbox-rendered",
            Self::LightboxClosed => "lightbox-closed",
        }
    }
}

/// Owns every carousel on the page, the tabbed galleries driving some of
/// them, and the single lightbox.
#[derive(Debug, Default, Clone)]
pub struct GalleryController {
    carousels: HashMap<CarouselId, Carousel>,
    galleries: HashMap<GalleryId, TabbedGallery>,
    lightbox: Lightbox,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_carousel(&mut self, carousel: Carousel) -> Result<(), GalleryError> {
        if self.carousels.contains_key(carousel.id()) {
            return Err(GalleryError::DuplicateCarousel(carousel.id().clone()));
        }
        self.carousels.insert(carousel.id().clone(), carousel);
        Ok(())
    }

    /// Links a tabbed gallery to an already registered carousel and loads the
    /// gallery's active variant into it.
    pub fn register_gallery(&mut self, gallery: TabbedGallery) -> Result<(), GalleryError> {
        if self.galleries.contains_key(gallery.id()) {
            return Err(GalleryError::DuplicateGallery(gallery.id().clone()));
        }
        let carousel = self.carousels.get_mut(gallery.carousel()).ok_or_else(|| {
            GalleryError::UnknownCarousel {
                gallery: gallery.id().clone(),
                carousel: gallery.carousel().clone(),
            }
        })?;
        carousel.replace_slides(gallery.slides(gallery.active()))?;
        self.galleries.insert(gallery.id().clone(), gallery);
        Ok(())
    }

    pub fn carousel(&self, id: &CarouselId) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    pub fn carousels(&self) -> impl Iterator<Item = &Carousel> {
        self.carousels.values()
    }

    pub fn gallery(&self, id: &GalleryId) -> Option<&TabbedGallery> {
        self.galleries.get(id)
    }

    pub fn galleries(&self) -> impl Iterator<Item = &TabbedGallery> {
        self.galleries.values()
    }

    pub fn gallery_for(&self, carousel: &CarouselId) -> Option<&TabbedGallery> {
        self.galleries.values().find(|g| g.carousel() == carousel)
    }

    pub fn active_variant(&self, gallery: &GalleryId) -> Option<Variant> {
        self.galleries.get(gallery).map(TabbedGallery::active)
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// The frame the lightbox shows, derived from its carousel.
    pub fn lightbox_frame(&self) -> Option<LightboxFrame> {
        let session = self.lightbox.session()?;
        self.carousels.get(session.carousel()).map(LightboxFrame::of)
    }

    pub fn apply(&mut self, event: GalleryEvent) -> Vec<Notification> {
        match event {
            GalleryEvent::GoTo { carousel, index } => self.navigate(&carousel, |_| index),
            GalleryEvent::Next(carousel) => self.step(&carousel, Some(Step::Next)),
            GalleryEvent::Previous(carousel) => self.step(&carousel, Some(Step::Previous)),
            GalleryEvent::Swipe {
                carousel,
                start_x,
                end_x,
            } => self.step(&carousel, swipe_step(start_x, end_x)),
            // the open lightbox owns the keyboard
            GalleryEvent::Key { .. } if self.lightbox.is_open() => Vec::new(),
            GalleryEvent::Key { carousel, key } => self.step(&carousel, key_step(&key)),
            GalleryEvent::OpenLightbox { carousel, index } => self.open_lightbox(carousel, index),
            GalleryEvent::CloseLightbox => self.close_lightbox(),
            GalleryEvent::LightboxGoTo(index) => self.render_lightbox(|_| index),
            GalleryEvent::LightboxNext => self.step_lightbox(Some(Step::Next)),
            GalleryEvent::LightboxPrevious => self.step_lightbox(Some(Step::Previous)),
            GalleryEvent::LightboxSwipe { start_x, end_x } => {
                self.step_lightbox(swipe_step(start_x, end_x))
            }
            GalleryEvent::LightboxKey(key) if key == "Escape" => self.close_lightbox(),
            GalleryEvent::LightboxKey(key) => self.step_lightbox(key_step(&key)),
            GalleryEvent::SelectVariant { gallery, variant } => self.select_variant(gallery, variant),
        }
    }

    fn navigate(
        &mut self,
        id: &CarouselId,
        target: impl FnOnce(isize) -> isize,
    ) -> Vec<Notification> {
        let Some(carousel) = self.carousels.get_mut(id) else {
            return Vec::new();
        };
        let index = target(carousel.index() as isize);
        vec![Notification::SlideChanged(carousel.go_to(index))]
    }

    fn step(&mut self, id: &CarouselId, step: Option<Step>) -> Vec<Notification> {
        match step {
            Some(step) => self.navigate(id, |current| current + step.offset()),
            None => Vec::new(),
        }
    }

    fn open_lightbox(&mut self, carousel: CarouselId, index: isize) -> Vec<Notification> {
        if !self.carousels.contains_key(&carousel) {
            return Vec::new();
        }
        let gallery = self.gallery_for(&carousel).map(|g| g.id().clone());
        self.lightbox.open(LightboxSession::new(carousel, gallery));
        self.render_lightbox(|_| index)
    }

    fn close_lightbox(&mut self) -> Vec<Notification> {
        match self.lightbox.close() {
            Some(_) => vec![Notification::LightboxClosed],
            None => Vec::new(),
        }
    }

    /// Moves the backing carousel, then reports the new frame.
    fn render_lightbox(&mut self, target: impl FnOnce(isize) -> isize) -> Vec<Notification> {
        let Some(id) = self.lightbox.session().map(|s| s.carousel().clone()) else {
            return Vec::new();
        };
        let mut notes = self.navigate(&id, target);
        if let Some(frame) = self.lightbox_frame() {
            notes.push(Notification::LightboxRendered(frame));
        }
        notes
    }

    fn step_lightbox(&mut self, step: Option<Step>) -> Vec<Notification> {
        match step {
            Some(step) => self.render_lightbox(|current| current + step.offset()),
            None => Vec::new(),
        }
    }

    fn select_variant(&mut self, id: GalleryId, variant: Variant) -> Vec<Notification> {
        let Some(gallery) = self.galleries.get_mut(&id) else {
            return Vec::new();
        };
        let slides = gallery.select(variant);
        let carousel_id = gallery.carousel().clone();
        if let Some(carousel) = self.carousels.get_mut(&carousel_id) {
            if let Err(e) = carousel.replace_slides(slides) {
                // lengths are checked when the gallery is registered
                log::error!("{e}");
            }
        }
        let mut notes = vec![Notification::VariantChanged {
            gallery: id,
            variant,
        }];
        if self.lightbox.is_showing(&carousel_id) {
            notes.extend(self.render_lightbox(|current| current));
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Slide, VariantImages, VariantSet};

    const HOOKFLOW: &str = "projectCarouselHookflow";

    fn images(tag: &str, ext: &str) -> VariantImages {
        VariantImages {
            label: tag.to_string(),
            tag: tag.to_string(),
            images: (1..=5).map(|i| format!("/assets/{tag}-{i}.{ext}")).collect(),
        }
    }

    fn controller() -> GalleryController {
        let mut c = GalleryController::new();
        let placeholder = (0..5).map(|_| Slide::new("", "")).collect();
        c.register_carousel(Carousel::new(HOOKFLOW.into(), placeholder).unwrap())
            .unwrap();
        let faces = (1..=3)
            .map(|i| Slide::new(format!("/assets/face{i}.webp"), format!("Face {i}")))
            .collect();
        c.register_carousel(Carousel::new("projectCarouselFace".into(), faces).unwrap())
            .unwrap();
        let gallery = TabbedGallery::new(
            "hookflow".into(),
            "HookFlow",
            HOOKFLOW.into(),
            VariantSet {
                primary: images("ios", "png"),
                secondary: images("android", "jpg"),
            },
            Variant::Primary,
        )
        .unwrap();
        c.register_gallery(gallery).unwrap();
        c
    }

    fn index_of(c: &GalleryController, id: &str) -> usize {
        c.carousel(&id.into()).unwrap().index()
    }

    #[test]
    fn test_registration_loads_active_variant() {
        let c = controller();
        let hookflow = c.carousel(&HOOKFLOW.into()).unwrap();
        assert_eq!(hookflow.slides()[0].src, "/assets/ios-1.png");
        assert_eq!(
            c.gallery_for(&HOOKFLOW.into()).map(|g| g.id().as_str()),
            Some("hookflow")
        );
    }

    #[test]
    fn test_duplicate_and_dangling_registrations() {
        let mut c = controller();
        let again = Carousel::new("projectCarouselFace".into(), vec![Slide::new("a", "")]);
        assert_eq!(
            c.register_carousel(again.unwrap()),
            Err(GalleryError::DuplicateCarousel("projectCarouselFace".into()))
        );
        let orphan = TabbedGallery::new(
            "orphan".into(),
            "Orphan",
            "missing".into(),
            VariantSet {
                primary: images("ios", "png"),
                secondary: images("android", "jpg"),
            },
            Variant::Primary,
        )
        .unwrap();
        assert!(matches!(
            c.register_gallery(orphan),
            Err(GalleryError::UnknownCarousel { .. })
        ));
    }

    #[test]
    fn test_navigation_emits_slide_changed() {
        let mut c = controller();
        let notes = c.apply(GalleryEvent::Previous("projectCarouselFace".into()));
        assert_eq!(
            notes,
            vec![Notification::SlideChanged(SlideChanged {
                carousel: "projectCarouselFace".into(),
                index: 2,
            })]
        );
        assert_eq!(notes[0].name(), "carousel-slide-changed");
        c.apply(GalleryEvent::Key {
            carousel: "projectCarouselFace".into(),
            key: "ArrowRight".to_string(),
        });
        assert_eq!(index_of(&c, "projectCarouselFace"), 0);
    }

    #[test]
    fn test_swipe_below_threshold_is_ignored() {
        let mut c = controller();
        let id = CarouselId::from(HOOKFLOW);
        let notes = c.apply(GalleryEvent::Swipe {
            carousel: id.clone(),
            start_x: 300.0,
            end_x: 251.0,
        });
        assert!(notes.is_empty());
        assert_eq!(index_of(&c, HOOKFLOW), 0);

        let notes = c.apply(GalleryEvent::Swipe {
            carousel: id,
            start_x: 300.0,
            end_x: 249.0,
        });
        assert_eq!(notes.len(), 1);
        assert_eq!(index_of(&c, HOOKFLOW), 1);
    }

    #[test]
    fn test_unknown_targets_are_noops() {
        let mut c = controller();
        assert!(c.apply(GalleryEvent::Next("nope".into())).is_empty());
        assert!(c
            .apply(GalleryEvent::OpenLightbox {
                carousel: "nope".into(),
                index: 0,
            })
            .is_empty());
        assert!(!c.lightbox().is_open());
        assert!(c.apply(GalleryEvent::LightboxNext).is_empty());
        assert!(c.apply(GalleryEvent::CloseLightbox).is_empty());
        assert!(c
            .apply(GalleryEvent::SelectVariant {
                gallery: "nope".into(),
                variant: Variant::Secondary,
            })
            .is_empty());
    }

    #[test]
    fn test_open_renders_requested_slide_of_active_variant() {
        let mut c = controller();
        let notes = c.apply(GalleryEvent::OpenLightbox {
            carousel: HOOKFLOW.into(),
            index: 2,
        });
        let Some(Notification::LightboxRendered(frame)) = notes.last() else {
            panic!("expected a rendered frame, got {notes:?}");
        };
        assert_eq!(frame.index, 2);
        assert_eq!(frame.src, "/assets/ios-3.png");
        assert_eq!(frame.preload, "/assets/ios-4.png");
        assert_eq!(frame.dot_count, 5);
        assert!(c.lightbox().session().unwrap().shows_tabs());
        assert_eq!(index_of(&c, HOOKFLOW), 2);
    }

    #[test]
    fn test_lightbox_navigation_writes_back_to_carousel() {
        let mut c = controller();
        c.apply(GalleryEvent::OpenLightbox {
            carousel: "projectCarouselFace".into(),
            index: 0,
        });
        assert!(!c.lightbox().session().unwrap().shows_tabs());

        c.apply(GalleryEvent::LightboxPrevious);
        assert_eq!(index_of(&c, "projectCarouselFace"), 2);
        c.apply(GalleryEvent::LightboxSwipe {
            start_x: 400.0,
            end_x: 100.0,
        });
        assert_eq!(index_of(&c, "projectCarouselFace"), 0);
        c.apply(GalleryEvent::LightboxKey("ArrowLeft".to_string()));
        assert_eq!(index_of(&c, "projectCarouselFace"), 2);
        c.apply(GalleryEvent::LightboxGoTo(7));
        assert_eq!(index_of(&c, "projectCarouselFace"), 1);
        assert_eq!(c.lightbox_frame().unwrap().src, "/assets/face2.webp");

        // the page carousel moving is mirrored by the lightbox
        c.apply(GalleryEvent::Next("projectCarouselFace".into()));
        assert_eq!(c.lightbox_frame().unwrap().index, 2);
    }

    #[test]
    fn test_carousel_keys_ignored_while_zoomed() {
        let mut c = controller();
        c.apply(GalleryEvent::OpenLightbox {
            carousel: "projectCarouselFace".into(),
            index: 1,
        });
        let notes = c.apply(GalleryEvent::Key {
            carousel: "projectCarouselFace".into(),
            key: "ArrowRight".to_string(),
        });
        assert!(notes.is_empty());
        assert_eq!(index_of(&c, "projectCarouselFace"), 1);
    }

    #[test]
    fn test_escape_closes() {
        let mut c = controller();
        c.apply(GalleryEvent::OpenLightbox {
            carousel: HOOKFLOW.into(),
            index: 1,
        });
        let notes = c.apply(GalleryEvent::LightboxKey("Escape".to_string()));
        assert_eq!(notes, vec![Notification::LightboxClosed]);
        assert!(c.lightbox_frame().is_none());
        // carousel keeps the index it was left at
        assert_eq!(index_of(&c, HOOKFLOW), 1);
    }

    #[test]
    fn test_variant_switch_while_zoomed_keeps_index() {
        let mut c = controller();
        c.apply(GalleryEvent::OpenLightbox {
            carousel: HOOKFLOW.into(),
            index: 3,
        });
        let notes = c.apply(GalleryEvent::SelectVariant {
            gallery: "hookflow".into(),
            variant: Variant::Secondary,
        });
        assert_eq!(notes[0].name(), "gallery-variant-changed");
        let Some(Notification::LightboxRendered(frame)) = notes.last() else {
            panic!("lightbox should re-render, got {notes:?}");
        };
        assert_eq!(frame.index, 3);
        assert_eq!(frame.src, "/assets/android-4.jpg");
        assert_eq!(frame.alt, "HookFlow ANDROID - Image 4");
        assert_eq!(c.active_variant(&"hookflow".into()), Some(Variant::Secondary));
    }

    #[test]
    fn test_variant_switch_with_other_lightbox_open() {
        let mut c = controller();
        c.apply(GalleryEvent::OpenLightbox {
            carousel: "projectCarouselFace".into(),
            index: 1,
        });
        let notes = c.apply(GalleryEvent::SelectVariant {
            gallery: "hookflow".into(),
            variant: Variant::Secondary,
        });
        assert_eq!(notes.len(), 1);
        assert_eq!(c.lightbox_frame().unwrap().src, "/assets/face2.webp");
        let hookflow = c.carousel(&HOOKFLOW.into()).unwrap();
        assert_eq!(hookflow.current().src, "/assets/android-1.jpg");
    }

    #[test]
    fn test_reopen_starts_fresh_session() {
        let mut c = controller();
        c.apply(GalleryEvent::OpenLightbox {
            carousel: HOOKFLOW.into(),
            index: 4,
        });
        c.apply(GalleryEvent::CloseLightbox);
        assert!(c.lightbox().session().is_none());

        c.apply(GalleryEvent::OpenLightbox {
            carousel: "projectCarouselFace".into(),
            index: 0,
        });
        let session = c.lightbox().session().unwrap();
        assert_eq!(session.carousel().as_str(), "projectCarouselFace");
        assert!(session.gallery().is_none());
        assert_eq!(c.lightbox_frame().unwrap().dot_count, 3);
    }
}
