use leptos::{html, prelude::*};
use leptos_use::use_window_size;

use crate::gallery::{GalleryEvent, GalleryId, SliderGeometry, TabBarLayout, TabMetrics, Variant};

use super::gallery::GalleryHandle;

fn metrics(tab: NodeRef<html::Button>) -> TabMetrics {
    tab.get_untracked()
        .map(|el| TabMetrics {
            offset_left: el.offset_left() as f64,
            offset_width: el.offset_width() as f64,
        })
        .unwrap_or_default()
}

/// One rendering of a gallery's variant tabs. Any number of these can exist
/// at once (page and lightbox); they all read the same active variant and
/// each sizes its own highlight.
#[component]
pub fn TabBar(gallery: GalleryId) -> impl IntoView {
    let handle = GalleryHandle::expect();
    let gallery = StoredValue::new(gallery);

    let labels = handle.with_untracked(|c| {
        c.gallery(&gallery.read_value()).map(|g| {
            let variants = g.variants();
            [variants.primary.label.clone(), variants.secondary.label.clone()]
        })
    });
    let Some(labels) = labels else {
        log::warn!("no tabbed gallery `{}`", gallery.get_value());
        return None;
    };

    let active = Memo::new(move |_| {
        handle
            .with(|c| c.active_variant(&gallery.read_value()))
            .unwrap_or_default()
    });
    let refs = [NodeRef::<html::Button>::new(), NodeRef::<html::Button>::new()];
    let slider = RwSignal::new(SliderGeometry::default());
    let window = use_window_size();

    // measure after layout so the highlight matches the freshly activated tab
    Effect::new(move |_| {
        let active = active.get();
        window.width.track();
        if refs.iter().any(|r| r.get().is_none()) {
            return;
        }
        request_animation_frame(move || {
            let layout = TabBarLayout {
                primary: metrics(refs[0]),
                secondary: metrics(refs[1]),
            };
            slider.set(layout.slider(active));
        });
    });

    let tabs = Variant::ALL
        .into_iter()
        .zip(labels)
        .zip(refs)
        .map(|((variant, label), tab_ref)| {
            view! {
                <button
                    node_ref=tab_ref
                    class="tab"
                    class:active=move || active.get() == variant
                    data-variant=variant.as_str()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        handle.dispatch(GalleryEvent::SelectVariant {
                            gallery: gallery.get_value(),
                            variant,
                        });
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    Some(view! {
        <div class="tabs-container" role="tablist">
            <div class="tab-slider" style=move || slider.get().style()></div>
            {tabs}
        </div>
    })
}
