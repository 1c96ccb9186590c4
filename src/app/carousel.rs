use std::time::Duration;

use leptos::{
    ev::{KeyboardEvent, MouseEvent, TouchEvent},
    html,
    prelude::*,
};

use crate::gallery::{Carousel, CarouselId, GalleryEvent, Slide, SlideLoad, SwipeTracker};

use super::gallery::GalleryHandle;

/// How long slides stay faded out while a tab switch swaps their sources.
const SWAP_DELAY: Duration = Duration::from_millis(300);

pub fn touch_x(ev: &TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.screen_x() as f64)
}

#[component]
pub fn ProjectCarousel(id: CarouselId) -> impl IntoView {
    let gallery = GalleryHandle::expect();
    let id = StoredValue::new(id);
    let swipe = StoredValue::new(SwipeTracker::default());

    let index = Memo::new(move |_| {
        gallery.with(|c| c.carousel(&id.read_value()).map(Carousel::index).unwrap_or(0))
    });
    let slides = Memo::new(move |_| {
        gallery.with(|c| {
            c.carousel(&id.read_value())
                .map(|c| c.slides().to_vec())
                .unwrap_or_default()
        })
    });
    let len = slides.with_untracked(Vec::len);

    // sources lag behind the controller so a variant switch can fade out first
    let shown = RwSignal::new(slides.get_untracked());
    let fading = RwSignal::new(false);
    Effect::watch(
        move || slides.get(),
        move |next, _, _| {
            let next = next.clone();
            fading.set(true);
            set_timeout(
                move || {
                    shown.set(next);
                    fading.set(false);
                },
                SWAP_DELAY,
            );
        },
        false,
    );

    let send = move |event: GalleryEvent| gallery.dispatch(event);
    let go = move |ev: MouseEvent, event: GalleryEvent| {
        ev.stop_propagation();
        send(event);
    };

    let slide_views = (0..len)
        .map(|i| {
            let slide = Signal::derive(move || shown.with(|s| s.get(i).cloned().unwrap_or_default()));
            let open = move |_: ()| {
                send(GalleryEvent::OpenLightbox {
                    carousel: id.get_value(),
                    index: i as isize,
                })
            };
            view! { <CarouselSlide slide fading on_open=Callback::new(open) /> }
        })
        .collect_view();

    let dots = (0..len)
        .map(|i| {
            view! {
                <button
                    class="carousel-dot"
                    class:active=move || index.get() == i
                    data-index=i.to_string()
                    aria-label=format!("Go to slide {}", i + 1)
                    on:click=move |ev| {
                        go(
                            ev,
                            GalleryEvent::GoTo {
                                carousel: id.get_value(),
                                index: i as isize,
                            },
                        )
                    }
                ></button>
            }
        })
        .collect_view();

    view! {
        <div
            id=id.get_value().to_string()
            class="project-carousel"
            tabindex="0"
            on:keydown=move |ev: KeyboardEvent| {
                send(GalleryEvent::Key {
                    carousel: id.get_value(),
                    key: ev.key(),
                })
            }
        >
            <div
                class="carousel-track"
                style:transform=move || {
                    gallery
                        .with(|c| c.carousel(&id.read_value()).map(Carousel::translate))
                        .unwrap_or_default()
                }
                on:touchstart=move |ev: TouchEvent| {
                    if let Some(x) = touch_x(&ev) {
                        swipe.update_value(|s| s.begin(x));
                    }
                }
                on:touchend=move |ev: TouchEvent| {
                    let Some(x) = touch_x(&ev) else {
                        return;
                    };
                    let Some((start_x, end_x)) = swipe.try_update_value(|s| s.finish(x)).flatten() else {
                        return;
                    };
                    send(GalleryEvent::Swipe {
                        carousel: id.get_value(),
                        start_x,
                        end_x,
                    });
                }
            >
                {slide_views}
            </div>
            <button
                class="carousel-btn prev"
                aria-label="Previous slide"
                on:click=move |ev| go(ev, GalleryEvent::Previous(id.get_value()))
            >
                "‹"
            </button>
            <button
                class="carousel-btn next"
                aria-label="Next slide"
                on:click=move |ev| go(ev, GalleryEvent::Next(id.get_value()))
            >
                "›"
            </button>
            <div class="carousel-indicators">{dots}</div>
        </div>
    }
}

#[component]
fn CarouselSlide(
    #[prop(into)] slide: Signal<Slide>,
    #[prop(into)] fading: Signal<bool>,
    on_open: Callback<()>,
) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let load = RwSignal::new(SlideLoad::default());

    Effect::new(move |_| {
        if fading.get() {
            load.update(SlideLoad::fade_out);
        }
    });
    // images finished before hydration never fire `load`
    Effect::new(move |_| {
        let src = slide.with(|s| s.src.clone());
        if let Some(img) = img_ref.get() {
            // `complete` may still describe the previous source
            let complete = img.complete() && img.src().ends_with(&src);
            load.update(|l| l.source_set(complete));
        }
    });

    view! {
        <div class="carousel-slide" class:loaded=move || load.get().is_loaded()>
            <img
                node_ref=img_ref
                src=move || slide.with(|s| s.src.clone())
                alt=move || slide.with(|s| s.alt.clone())
                loading="lazy"
                class="zoomable"
                style:opacity=move || if fading.get() { "0" } else { "1" }
                on:load=move |_| load.update(SlideLoad::load)
                on:click=move |_| on_open.run(())
            />
        </div>
    }
}
