use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::content::{portfolio, PortfolioData};

use super::gallery::{preload_image, GalleryHandle};
use super::hero::HeroSection;
use super::lightbox::LightboxOverlay;
use super::sections::{ContactSection, ExperienceSection, ProjectsSection, SkillsSection};

#[component]
pub fn HomePage() -> impl IntoView {
    let page = portfolio().and_then(|data| {
        let controller = data.gallery_controller()?;
        Ok((data, controller))
    });
    match page {
        Ok((data, controller)) => {
            GalleryHandle::provide(controller);
            Either::Left(view! { <Portfolio data /> })
        }
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="mx-auto my-16 text-red">"Portfolio content couldn't be loaded: " {e.to_string()}</p>
            })
        }
    }
}

#[component]
fn Portfolio(data: &'static PortfolioData) -> impl IntoView {
    // fetch the images nobody sees yet once the browser is idle
    let deferred = data.deferred_images();
    Effect::new(move |_| {
        let deferred = deferred.clone();
        request_idle_callback(move || deferred.iter().for_each(|src| preload_image(src)));
    });

    view! {
        <Title text="Home" />
        <HeroSection hero=&data.hero />
        <SkillsSection skills=&data.skills />
        <ExperienceSection experience=&data.experience />
        <ProjectsSection projects=&data.projects />
        <ContactSection contact=&data.contact />
        <LightboxOverlay />
    }
}
