use leptos::{either::Either, ev::MouseEvent, prelude::*};
use leptos_use::{use_clipboard_with_options, UseClipboardOptions, UseClipboardReturn};

use crate::content::{Contact, Experience, Project, Skill};

use super::carousel::ProjectCarousel;
use super::reveal::Reveal;
use super::tabs::TabBar;
use super::tilt::Tilt;

/// How long "Copied!" stays up, in ms.
const COPIED_RESET_MS: f64 = 2000.0;

#[component]
pub fn SkillsSection(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id="skills" class="py-16">
            <div class="container mx-auto px-4">
                <Reveal>
                    <h2 class="text-3xl font-bold mb-8">"Technical Skills"</h2>
                </Reveal>
                <div class="skills-grid">
                    {skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            let icon = match &skill.icon {
                                Some(icon) => {
                                    Either::Left(
                                        view! {
                                            <img src=icon.as_str() alt=skill.name.as_str() class="skill-icon" />
                                        },
                                    )
                                }
                                None => {
                                    Either::Right(
                                        view! {
                                            <div
                                                class="skill-icon rounded-full"
                                                style=format!("background: {}", skill.color)
                                            ></div>
                                        },
                                    )
                                }
                            };
                            view! {
                                <Reveal delay=i as f64 * 0.1>
                                    <Tilt class="skill-card">
                                        {icon}
                                        <h3>{skill.name.as_str()}</h3>
                                    </Tilt>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(experience: &'static [Experience]) -> impl IntoView {
    view! {
        <section id="experience" class="py-16">
            <div class="container mx-auto px-4">
                <Reveal>
                    <h2 class="text-3xl font-bold mb-8">"Experience"</h2>
                </Reveal>
                <div class="experience-list">
                    {experience
                        .iter()
                        .enumerate()
                        .map(|(i, exp)| {
                            view! {
                                <Reveal class="experience-item" delay=i as f64 * 0.2>
                                    <h3 class="font-bold">{exp.role.as_str()}</h3>
                                    <p class="text-accent">
                                        {format!("{} | {}", exp.company, exp.period)}
                                    </p>
                                    <p>{exp.description.as_str()}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="py-16">
            <div class="container mx-auto px-4">
                <Reveal>
                    <h2 class="text-3xl font-bold mb-8">"Featured Projects"</h2>
                </Reveal>
                <div class="project-grid">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project delay=i as f64 * 0.2 /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay: f64) -> impl IntoView {
    let gallery = project.gallery.as_ref().map(|gallery| {
        let tabs = gallery
            .tabs
            .as_ref()
            .map(|tabs| view! { <TabBar gallery=tabs.id.clone() /> });
        view! {
            {tabs}
            <ProjectCarousel id=gallery.id.clone() />
        }
    });

    view! {
        <Reveal delay>
            <Tilt class="project-card card">
                {gallery}
                <h3 class="font-bold text-xl">{project.title.as_str()}</h3>
                <p>{project.description.as_str()}</p>
                <div class="tech-stack">
                    {project
                        .tech
                        .iter()
                        .map(|t| view! { <span class="tech-tag">{t.as_str()}</span> })
                        .collect_view()}
                </div>
            </Tilt>
        </Reveal>
    }
}

#[component]
pub fn ContactSection(contact: &'static Contact) -> impl IntoView {
    view! {
        <section id="contact" class="py-16">
            <div class="container mx-auto px-4">
                <Reveal>
                    <h2 class="text-3xl font-bold mb-8">"Get In Touch"</h2>
                </Reveal>
                <Reveal class="contact-links" delay=0.2>
                    <Tilt strength=15.0 class="inline-block">
                        <a href=format!("mailto:{}", contact.email) class="contact-link">
                            "📧 "
                            {contact.email.as_str()}
                            <CopyButton text=contact.email.as_str() />
                        </a>
                    </Tilt>
                    <Tilt strength=15.0 class="inline-block">
                        <a
                            href=format!("https://{}", contact.linkedin)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-link"
                        >
                            "💼 LinkedIn"
                        </a>
                    </Tilt>
                    <Tilt strength=15.0 class="inline-block">
                        <a
                            href=format!("https://{}", contact.github)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="contact-link"
                        >
                            "💻 GitHub"
                        </a>
                    </Tilt>
                </Reveal>
            </div>
        </section>
    }
}

/// Copies `text`; shows "Copied!" only once the clipboard write resolved.
#[component]
fn CopyButton(text: &'static str) -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard_with_options(UseClipboardOptions::default().copied_reset_delay(COPIED_RESET_MS));

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        copy(text);
    };

    view! {
        <Show when=move || is_supported.get()>
            <button
                class="copy-btn"
                class:copied=move || copied.get()
                on:click=on_click.clone()
            >
                {move || if copied.get() { "Copied!" } else { "Copy" }}
            </button>
        </Show>
    }
}
