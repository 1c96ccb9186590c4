use leptos::prelude::*;

use crate::content::Hero;
use crate::motion::{typed_prefix, TYPE_CHAR_DELAY, TYPE_START_DELAY};

use super::reveal::Reveal;
use super::tilt::Tilt;

fn type_next(typed: RwSignal<usize>, total: usize) {
    if typed.get_untracked() < total {
        typed.update(|n| *n += 1);
        set_timeout(move || type_next(typed, total), TYPE_CHAR_DELAY);
    }
}

#[component]
pub fn HeroSection(hero: &'static Hero) -> impl IntoView {
    let typed = RwSignal::new(0usize);
    let total = hero.title.chars().count();

    // effects only run in the browser, so the server renders an empty title
    Effect::new(move |_| {
        set_timeout(move || type_next(typed, total), TYPE_START_DELAY);
    });

    view! {
        <section id="hero" class="min-h-[80vh] flex items-center">
            <div class="container mx-auto px-4 hero-content">
                <h1 class="id-typing text-5xl font-bold" aria-label=hero.title.as_str()>
                    {move || typed_prefix(&hero.title, typed.get())}
                </h1>
                <Reveal delay=0.2>
                    <p class="text-xl mt-4">{hero.subtitle.as_str()}</p>
                </Reveal>
                <Reveal class="mt-8" delay=0.4>
                    <Tilt strength=25.0 class="inline-block">
                        <a href="#projects" class="cta-button">
                            {hero.cta.as_str()}
                        </a>
                    </Tilt>
                </Reveal>
            </div>
        </section>
    }
}
