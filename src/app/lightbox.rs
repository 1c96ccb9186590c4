use std::time::Duration;

use leptos::{
    ev::{self, MouseEvent, TouchEvent},
    prelude::*,
};
use leptos_use::{use_document, use_event_listener};

use crate::gallery::{FadeSettle, FadeStep, GalleryEvent, LightboxFade, SwipeTracker};

use super::carousel::touch_x;
use super::gallery::{preload_image, GalleryHandle};
use super::tabs::TabBar;

/// Time the old image stays faded out before the new source is set.
const FADE_DELAY: Duration = Duration::from_millis(50);

#[component]
pub fn LightboxOverlay() -> impl IntoView {
    let gallery = GalleryHandle::expect();
    let swipe = StoredValue::new(SwipeTracker::default());

    let frame = Memo::new(move |_| gallery.with(|c| c.lightbox_frame()));
    let is_open = Memo::new(move |_| frame.with(Option::is_some));
    let tabs = Memo::new(move |_| {
        gallery.with(|c| {
            c.lightbox()
                .session()
                .and_then(|s| s.gallery().cloned())
        })
    });

    let fade = StoredValue::new(LightboxFade::default());
    // (src, alt) currently set on the <img>
    let shown = RwSignal::new(None::<(String, String)>);
    let visible = RwSignal::new(false);

    Effect::watch(
        move || frame.get(),
        move |frame, _, _| {
            let Some(frame) = frame.clone() else {
                fade.update_value(LightboxFade::clear);
                visible.set(false);
                shown.set(None);
                return;
            };
            preload_image(&frame.preload);
            match fade.try_update_value(|f| f.request(frame.src, frame.alt)) {
                Some(FadeStep::Show) => {
                    shown.set(fade.with_value(|f| f.shown().cloned()));
                    visible.set(true);
                }
                Some(FadeStep::Swap(ticket)) => {
                    visible.set(false);
                    set_timeout(
                        move || match fade.try_update_value(|f| f.settle(ticket)) {
                            Some(FadeSettle::Load) => {
                                shown.set(fade.with_value(|f| f.shown().cloned()));
                            }
                            // no load event fires for an identical source
                            Some(FadeSettle::Ready) => {
                                shown.set(fade.with_value(|f| f.shown().cloned()));
                                visible.set(true);
                            }
                            Some(FadeSettle::Stale) | None => {}
                        },
                        FADE_DELAY,
                    );
                }
                None => {}
            }
        },
        false,
    );

    Effect::new(move |_| {
        let overflow = if is_open.get() { "hidden" } else { "" };
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", overflow);
        }
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if is_open.get_untracked() {
            gallery.dispatch(GalleryEvent::LightboxKey(ev.key()));
        }
    });

    let send = move |ev: MouseEvent, event: GalleryEvent| {
        ev.stop_propagation();
        gallery.dispatch(event);
    };

    let dots = move || {
        frame.get().map(|frame| {
            (0..frame.dot_count)
                .map(|i| {
                    view! {
                        <button
                            class="carousel-dot"
                            class:active=i == frame.index
                            data-index=i.to_string()
                            aria-label=format!("Show image {}", i + 1)
                            on:click=move |ev| send(ev, GalleryEvent::LightboxGoTo(i as isize))
                        ></button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            id="imageLightbox"
            class="lightbox"
            class:active=move || is_open.get()
            on:click=move |_| gallery.dispatch(GalleryEvent::CloseLightbox)
            on:touchstart=move |ev: TouchEvent| {
                if let Some(x) = touch_x(&ev) {
                    swipe.update_value(|s| s.begin(x));
                }
            }
            on:touchend=move |ev: TouchEvent| {
                let Some(x) = touch_x(&ev) else {
                    return;
                };
                if let Some((start_x, end_x)) = swipe.try_update_value(|s| s.finish(x)).flatten() {
                    gallery.dispatch(GalleryEvent::LightboxSwipe { start_x, end_x });
                }
            }
        >
            <button
                class="lightbox-close"
                aria-label="Close"
                on:click=move |ev| send(ev, GalleryEvent::CloseLightbox)
            >
                "×"
            </button>
            {move || {
                tabs.get()
                    .map(|id| {
                        view! {
                            <div class="lightbox-tabs" on:click=|ev| ev.stop_propagation()>
                                <TabBar gallery=id />
                            </div>
                        }
                    })
            }}
            <div
                class="lightbox-image-container"
                class:loading=move || is_open.get() && !visible.get()
            >
                <img
                    id="lightboxImage"
                    src=move || shown.with(|s| s.as_ref().map(|(src, _)| src.clone()))
                    alt=move || shown.with(|s| s.as_ref().map(|(_, alt)| alt.clone()))
                    style:opacity=move || if visible.get() { "1" } else { "0" }
                    on:load=move |_| {
                        if !fade.with_value(LightboxFade::is_pending) {
                            visible.set(true);
                        }
                    }
                    on:click=|ev| ev.stop_propagation()
                />
            </div>
            <button
                class="lightbox-btn prev"
                aria-label="Previous image"
                on:click=move |ev| send(ev, GalleryEvent::LightboxPrevious)
            >
                "‹"
            </button>
            <button
                class="lightbox-btn next"
                aria-label="Next image"
                on:click=move |ev| send(ev, GalleryEvent::LightboxNext)
            >
                "›"
            </button>
            <div class="lightbox-indicators" on:click=|ev| ev.stop_propagation()>
                {dots}
            </div>
        </div>
    }
}
