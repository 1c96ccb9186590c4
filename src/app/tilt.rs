use leptos::{ev::MouseEvent, html, prelude::*};

use crate::motion::{pointer_percent, tilt_transform, TILT_RESET};

/// Wraps children in a box that leans towards the cursor.
#[component]
pub fn Tilt(
    #[prop(default = 10.0)] strength: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(TILT_RESET.to_string());

    let on_move = move |ev: MouseEvent| {
        let Some(el) = el.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        let (glow_x, glow_y) = pointer_percent(x, y, rect.width(), rect.height());
        let style = web_sys::HtmlElement::style(&el);
        let _ = style.set_property("--mouse-x", &format!("{glow_x}%"));
        let _ = style.set_property("--mouse-y", &format!("{glow_y}%"));
        set_transform.set(tilt_transform(x, y, rect.width(), rect.height(), strength));
    };

    view! {
        <div
            node_ref=el
            class=format!("tilt hover-trigger {class}")
            style:transform=move || transform.get()
            on:mousemove=on_move
            on:mouseleave=move |_| set_transform.set(TILT_RESET.to_string())
        >
            {children()}
        </div>
    }
}
