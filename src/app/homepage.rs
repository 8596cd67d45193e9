use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::contact::{ButtonVariant, CopyEmailButton};
use super::projects::{CardSkeleton, ProjectCard};
use crate::config::SITE_PROFILE;
use crate::projects::ProjectMeta;

const WAVE_MS: f64 = 3000.0;
const FEATURED: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <HeroSection />
        <ProjectsSection />
        <AboutSection />
        <ContactSection />
    }
}

#[component]
fn SectionBadge(label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center mb-4">
            <span class="border border-gray-800 dark:border-gray-300 text-xs font-medium px-2.5 py-0.5 rounded-full">
                {label}
            </span>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let (animate, set_animate) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_animate.set(false), WAVE_MS);

    Effect::new(move |_| {
        set_animate.set(true);
        start(());
    });

    view! {
        <section class="mb-12">
            <span
                role="img"
                aria-label="Waving hand"
                class=move || {
                    if animate.get() {
                        "inline-block text-3xl mb-2 cursor-default animate-wave"
                    } else {
                        "inline-block text-3xl mb-2 cursor-default hover:animate-wave"
                    }
                }
            >
                "👋"
            </span>
            <h1 class="text-5xl font-bold mb-2">"Hey, I'm " {SITE_PROFILE.name}</h1>
            <p class="text-gray-600 dark:text-gray-400 mb-4 text-lg">{SITE_PROFILE.tagline}</p>
            <div class="flex gap-2">
                <a
                    href=SITE_PROFILE.resume_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-black text-white hover:bg-gray-800 transition-colors duration-300"
                >
                    <span aria-hidden="true">"📄"</span>
                    "Resume"
                </a>
                <CopyEmailButton variant=ButtonVariant::Outline class="rounded-full" />
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    let listing = expect_context::<Resource<Vec<ProjectMeta>>>();

    view! {
        <section id="projects" class="mb-12 scroll-mt-4">
            <SectionBadge label="My Projects" />
            <h2 class="text-3xl font-bold mb-2">"My latest works"</h2>
            <p class="text-gray-600 dark:text-gray-400 mb-8">
                "A glimpse into my recent web development projects"
            </p>
            <Transition fallback=move || view! { <CardSkeleton /> }>
                {move || Suspend::new(async move {
                    let projects = listing.await;
                    projects
                        .into_iter()
                        .take(FEATURED)
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard project priority={i == 0} /> })
                        .collect_view()
                })}
            </Transition>
            <A href="/projects">
                <span class="inline-flex items-center text-gray-600 dark:text-gray-400 hover:text-black dark:hover:text-white transition-colors duration-300">
                    "All projects ↗"
                </span>
            </A>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="mb-12">
            <SectionBadge label="About" />
            <h2 class="text-3xl font-bold mb-2">"About Me"</h2>
            <p class="text-gray-600 dark:text-gray-400 mb-4">
                "I have a Bachelor's in Computer Science and a Master's in progress at Riga Technical University. "
                "During my internship at Mykoob, I focused on improving front-end workflows, creating maintainable SCSS architecture "
                "and optimizing performance for responsive web design. I have certifications in advanced CSS and JavaScript and "
                "currently specialize in building fast, accessible web applications with tools like React, Next.js and Tailwind CSS."
            </p>
            <A href="/about">
                <span
                    class="group inline-flex items-center text-gray-600 dark:text-gray-400 hover:text-black dark:hover:text-white transition-colors duration-300"
                    aria-label="Learn more about my background and experience"
                >
                    "Learn more "
                    <span class="ml-1 transition-transform duration-300 group-hover:translate-x-1 group-hover:-translate-y-1">
                        "↗"
                    </span>
                </span>
            </A>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="mb-12">
            <SectionBadge label="Contact" />
            <h2 class="text-3xl font-bold mb-2">"Get in Touch"</h2>
            <p class="text-gray-600 dark:text-gray-400 mb-6">
                "I'm actively seeking new opportunities to apply my front-end development skills. "
                "Let's connect and discuss how I can contribute to your team."
            </p>
            <CopyEmailButton variant=ButtonVariant::Default class="rounded-full" />
        </section>
    }
}
