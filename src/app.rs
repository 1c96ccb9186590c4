mod carousel;
mod gallery;
mod hero;
mod homepage;
mod lightbox;
mod nav;
mod reveal;
mod sections;
mod tabs;
mod tilt;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;
use homepage::HomePage;
use nav::Nav;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = portfolio()
        .map(|data| data.hero.title.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <Nav />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-sm text-muted">
            "Built with Rust & Leptos · updated " {env!("BUILD_TIME")}
        </footer>
    }
}
