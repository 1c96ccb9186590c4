use super::{wrap_index, Carousel, CarouselId, GalleryId};

/// An open lightbox. It only remembers which carousel it shows; the index
/// always comes from that carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSession {
    carousel: CarouselId,
    gallery: Option<GalleryId>,
}

impl LightboxSession {
    pub fn new(carousel: CarouselId, gallery: Option<GalleryId>) -> Self {
        Self { carousel, gallery }
    }

    pub fn carousel(&self) -> &CarouselId {
        &self.carousel
    }

    /// The tabbed gallery behind the carousel, if any.
    pub fn gallery(&self) -> Option<&GalleryId> {
        self.gallery.as_ref()
    }

    pub fn shows_tabs(&self) -> bool {
        self.gallery.is_some()
    }
}

/// What the overlay displays right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxFrame {
    pub carousel: CarouselId,
    pub index: usize,
    pub src: String,
    pub alt: String,
    pub dot_count: usize,
    /// Source of the following slide, fetched ahead of time.
    pub preload: String,
}

impl LightboxFrame {
    pub fn of(carousel: &Carousel) -> Self {
        let slide = carousel.current();
        let next = wrap_index(carousel.index() as isize + 1, carousel.len());
        Self {
            carousel: carousel.id().clone(),
            index: carousel.index(),
            src: slide.src.clone(),
            alt: slide.alt.clone(),
            dot_count: carousel.len(),
            preload: carousel.slides()[next].src.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lightbox {
    session: Option<LightboxSession>,
}

impl Lightbox {
    pub fn session(&self) -> Option<&LightboxSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Replaces any previous session.
    pub fn open(&mut self, session: LightboxSession) {
        self.session = Some(session);
    }

    pub fn close(&mut self) -> Option<LightboxSession> {
        self.session.take()
    }

    pub fn is_showing(&self, carousel: &CarouselId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.carousel() == carousel)
    }
}

/// What the overlay should do with a newly requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    /// The source is already on screen and nothing else is queued.
    Show,
    /// Fade out, then hand the ticket back to [`LightboxFade::settle`].
    Swap(u64),
}

/// Outcome of a delayed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeSettle {
    /// A newer frame was requested meanwhile.
    Stale,
    /// New source set, wait for its `load` event.
    Load,
    /// Source did not change, no `load` will fire.
    Ready,
}

/// Image swap bookkeeping behind the lightbox fade. Every request takes a
/// ticket and only the newest ticket may put its image on screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LightboxFade {
    ticket: u64,
    shown: Option<(String, String)>,
    pending: Option<(u64, String, String)>,
}

impl LightboxFade {
    /// `(src, alt)` currently on the image element.
    pub fn shown(&self) -> Option<&(String, String)> {
        self.shown.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn request(&mut self, src: String, alt: String) -> FadeStep {
        self.ticket += 1;
        let same = self.shown.as_ref().is_some_and(|(shown, _)| *shown == src);
        if same && self.pending.is_none() {
            self.shown = Some((src, alt));
            return FadeStep::Show;
        }
        self.pending = Some((self.ticket, src, alt));
        FadeStep::Swap(self.ticket)
    }

    pub fn settle(&mut self, ticket: u64) -> FadeSettle {
        match self.pending.take() {
            Some((queued, src, alt)) if queued == ticket => {
                let reload = self.shown.as_ref().map(|(shown, _)| shown) != Some(&src);
                self.shown = Some((src, alt));
                if reload {
                    FadeSettle::Load
                } else {
                    FadeSettle::Ready
                }
            }
            other => {
                self.pending = other;
                FadeSettle::Stale
            }
        }
    }

    /// Forgets the image and invalidates every outstanding ticket.
    pub fn clear(&mut self) {
        self.ticket += 1;
        self.shown = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Slide;

    #[test]
    fn test_frame_preloads_following_slide() {
        let slides = (0..3)
            .map(|i| Slide::new(format!("/face{i}.webp"), format!("Face {i}")))
            .collect();
        let mut c = Carousel::new("faces".into(), slides).unwrap();
        c.go_to(2);
        let frame = LightboxFrame::of(&c);
        assert_eq!(frame.index, 2);
        assert_eq!(frame.src, "/face2.webp");
        assert_eq!(frame.alt, "Face 2");
        assert_eq!(frame.dot_count, 3);
        assert_eq!(frame.preload, "/face0.webp");
    }

    #[test]
    fn test_close_releases_session() {
        let mut lb = Lightbox::default();
        lb.open(LightboxSession::new("faces".into(), None));
        assert!(lb.is_showing(&"faces".into()));
        assert!(!lb.session().unwrap().shows_tabs());

        let closed = lb.close().unwrap();
        assert_eq!(closed.carousel().as_str(), "faces");
        assert!(!lb.is_open());
        assert!(lb.close().is_none());
    }

    fn shown_src(fade: &LightboxFade) -> Option<&str> {
        fade.shown().map(|(src, _)| src.as_str())
    }

    #[test]
    fn test_fade_first_image_waits_for_load() {
        let mut fade = LightboxFade::default();
        let FadeStep::Swap(ticket) = fade.request("/a.png".into(), "A".into()) else {
            panic!("first frame must fade in");
        };
        assert!(fade.is_pending());
        assert_eq!(fade.settle(ticket), FadeSettle::Load);
        assert_eq!(shown_src(&fade), Some("/a.png"));
        assert!(!fade.is_pending());

        assert_eq!(fade.request("/a.png".into(), "A".into()), FadeStep::Show);
    }

    #[test]
    fn test_fade_back_and_forth_keeps_latest() {
        let mut fade = LightboxFade::default();
        let FadeStep::Swap(first) = fade.request("/a.png".into(), "A".into()) else {
            panic!("expected a swap");
        };
        fade.settle(first);

        let FadeStep::Swap(to_b) = fade.request("/b.png".into(), "B".into()) else {
            panic!("expected a swap");
        };
        // back to A before B's delay ran out
        let FadeStep::Swap(back_to_a) = fade.request("/a.png".into(), "A".into()) else {
            panic!("a queued swap must not be skipped");
        };

        assert_eq!(fade.settle(to_b), FadeSettle::Stale);
        assert_eq!(shown_src(&fade), Some("/a.png"));
        assert_eq!(fade.settle(back_to_a), FadeSettle::Ready);
        assert_eq!(shown_src(&fade), Some("/a.png"));
    }

    #[test]
    fn test_fade_variant_flip_while_zoomed() {
        let mut fade = LightboxFade::default();
        let FadeStep::Swap(t) = fade.request("/ios-3.png".into(), "HookFlow IOS - Image 3".into())
        else {
            panic!("expected a swap");
        };
        fade.settle(t);

        let android = fade.request(
            "/android-3.jpg".into(),
            "HookFlow ANDROID - Image 3".into(),
        );
        let ios = fade.request("/ios-3.png".into(), "HookFlow IOS - Image 3".into());
        for step in [android, ios] {
            if let FadeStep::Swap(t) = step {
                fade.settle(t);
            }
        }
        assert_eq!(
            fade.shown(),
            Some(&("/ios-3.png".to_string(), "HookFlow IOS - Image 3".to_string()))
        );
    }

    #[test]
    fn test_fade_clear_drops_pending_swap() {
        let mut fade = LightboxFade::default();
        let FadeStep::Swap(t) = fade.request("/a.png".into(), "A".into()) else {
            panic!("expected a swap");
        };
        fade.clear();
        assert_eq!(fade.settle(t), FadeSettle::Stale);
        assert_eq!(fade.shown(), None);
    }
}
