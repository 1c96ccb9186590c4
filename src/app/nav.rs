use leptos::{html, prelude::*};
use leptos_use::{on_click_outside, use_window_scroll};

/// Scroll offset after which the nav bar casts a shadow.
const SHADOW_AFTER: f64 = 100.0;

const LINKS: [(&str, &str); 4] = [
    ("#skills", "Skills"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let nav_ref = NodeRef::<html::Nav>::new();

    let _ = on_click_outside(nav_ref, move |_| set_menu_open.set(false));

    view! {
        <nav
            node_ref=nav_ref
            class="main-nav sticky top-0 z-40 backdrop-blur"
            class:scrolled={move || scroll_y.get() > SHADOW_AFTER}
        >
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <a href="#hero" class="font-bold text-lg">
                    "KZY"
                </a>
                <ul class="hidden md:flex gap-6">
                    {LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a href=*href class="nav-link">
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="nav-toggle md:hidden"
                    class:active=move || menu_open.get()
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class="mobile-menu md:hidden" class:active=move || menu_open.get()>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=*href
                                class="mobile-link"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
