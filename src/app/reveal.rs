use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    /// Stagger, in seconds.
    #[prop(optional)]
    delay: f64,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let revealed = RwSignal::new(false);

    Effect::new(move |_| {
        if visible.get() {
            revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=format!("reveal {class}")
            class:revealed=move || revealed.get()
            style=format!("transition-delay: {delay}s")
        >
            {children()}
        </div>
    }
}
