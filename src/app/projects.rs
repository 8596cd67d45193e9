use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::{layout::NotFound, media::LazyMedia, tooltip::Tooltip};
use crate::projects::{
    next_project, split_label, Project, ProjectMeta, GLOBAL_LISTING_CACHE, GLOBAL_PROJECT_CACHE,
    LISTING_KEY,
};
use crate::skills::skill_icon;

#[cfg(feature = "ssr")]
use crate::projects::{get_project, get_projects};

#[server(input = GetUrl)]
pub async fn list_projects_server() -> Result<Vec<ProjectMeta>, ServerFnError> {
    get_projects().ok_or(ServerFnError::new("Couldn't parse projects"))
}

#[server(input = GetUrl)]
pub async fn get_project_server(slug: String) -> Result<Project, ServerFnError> {
    get_project(&slug).map_err(|err| ServerFnError::new(err.to_string()))
}

/// Full listing, from the local cache when this client has fetched it before.
pub async fn load_listing() -> Vec<ProjectMeta> {
    let cache = &*GLOBAL_LISTING_CACHE;
    if let Some(listing) = cache.get(LISTING_KEY) {
        return listing.value().clone();
    }
    match list_projects_server().await {
        Ok(listing) => {
            cache.insert(LISTING_KEY.to_string(), listing.clone());
            listing
        }
        Err(err) => {
            log::error!("couldn't load projects: {err}");
            Vec::new()
        }
    }
}

const LINK_ICON: &str = "text-gray-500 hover:text-gray-800 dark:hover:text-gray-200";

#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="mb-8 animate-pulse">
            <div class="h-6 w-1/3 mb-4 rounded bg-gray-200 dark:bg-gray-800" />
            <div class="h-4 w-full mb-2 rounded bg-gray-200 dark:bg-gray-800" />
            <div class="h-96 w-full rounded-lg bg-gray-200 dark:bg-gray-800" />
        </div>
    }
}

#[component]
fn ProjectBadge(project: ProjectMeta) -> impl IntoView {
    match project.logo.clone() {
        Some(logo) => Either::Left(view! {
            <img
                src=logo
                alt=format!("{} logo", project.title)
                width="32"
                height="32"
                class="w-8 h-8 rounded-md"
            />
        }),
        None => Either::Right(view! {
            <span class="text-md font-bold border rounded-md px-2 py-1 bg-gray-100 dark:bg-gray-900 border-gray-200 dark:border-gray-800">
                {project.badge_text()}
            </span>
        }),
    }
}

/// Badge and title, linked to the project page when there is one.
#[component]
fn ProjectTitle(project: ProjectMeta, class: &'static str) -> impl IntoView {
    let heading = view! {
        <div class="flex items-center gap-2">
            <ProjectBadge project=project.clone() />
            <h3 class=class>{project.title.clone()}</h3>
        </div>
    };
    if project.has_page {
        Either::Left(view! {
            <A href=project.page_href()>
                <span class="hover:underline">{heading}</span>
            </A>
        })
    } else {
        Either::Right(heading)
    }
}

#[component]
fn ExternalLinks(project: ProjectMeta) -> impl IntoView {
    let github_url = project.github_url();
    let live_url = project.live_url();
    view! {
        <div class="flex items-center gap-2">
            <Tooltip content="View on GitHub">
                <a
                    href=github_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="View on GitHub"
                    class=LINK_ICON
                >
                    <i class="devicon-github-original text-xl" />
                </a>
            </Tooltip>
            <Tooltip content=project.live_tooltip().to_string()>
                <a
                    href=live_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="View live site"
                    class=format!("{LINK_ICON} text-xl")
                >
                    "🌐"
                </a>
            </Tooltip>
        </div>
    }
}

#[component]
fn TechChips(technologies: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {technologies
                .into_iter()
                .map(|tech| {
                    view! {
                        <span class="inline-flex items-center gap-1 bg-gray-100 dark:bg-gray-900 text-gray-700 dark:text-gray-300 text-xs font-medium px-2.5 py-0.5 rounded">
                            {skill_icon(&tech).map(|icon| view! { <i class=icon /> })}
                            {tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Media tile, linked to the project page when there is one.
#[component]
fn CardMedia(project: ProjectMeta, priority: bool) -> impl IntoView {
    let tile = project.card_tile(priority);
    view! {
        <div class="w-full bg-gray-200 dark:bg-gray-900 rounded-lg flex justify-center items-center overflow-hidden">
            {if project.has_page {
                Either::Left(view! {
                    <Tooltip content="Learn More">
                        <A href=project.page_href()>
                            <LazyMedia descriptor=tile />
                        </A>
                    </Tooltip>
                })
            } else {
                Either::Right(view! { <LazyMedia descriptor=tile /> })
            }}
        </div>
    }
}

/// Featured project on the homepage.
#[component]
pub fn ProjectCard(project: ProjectMeta, #[prop(optional)] priority: bool) -> impl IntoView {
    view! {
        <article class="mb-8">
            <div class="flex justify-between items-start mb-4">
                <ProjectTitle project=project.clone() class="text-xl font-bold mb-2" />
                <ExternalLinks project=project.clone() />
            </div>
            <div class="flex md:flex-row flex-col mb-6 gap-4">
                <div class="w-full md:w-1/2 flex flex-col justify-between gap-4">
                    <p class="font-medium">{project.summary.clone()}</p>
                    <TechChips technologies=project.technologies.clone() />
                </div>
                <p class="text-gray-600 dark:text-gray-400 w-full md:w-1/2">
                    {project.description.clone()}
                </p>
            </div>
            <CardMedia project=project.clone() priority />
        </article>
    }
}

/// Grid cell on the works page.
#[component]
fn WorkCard(project: ProjectMeta, priority: bool) -> impl IntoView {
    view! {
        <article class="flex flex-col gap-3">
            <CardMedia project=project.clone() priority />
            <div class="flex justify-between items-center">
                <ProjectTitle project=project.clone() class="text-lg font-bold" />
                <ExternalLinks project=project.clone() />
            </div>
            <p class="text-gray-600 dark:text-gray-400 text-sm">{project.summary.clone()}</p>
            <TechChips technologies=project.technologies.clone() />
        </article>
    }
}

#[component]
pub fn WorksPage() -> impl IntoView {
    let listing = expect_context::<Resource<Vec<ProjectMeta>>>();

    view! {
        <Title text="Projects" />
        <div class="mb-12">
            <h1 class="text-4xl font-semibold mb-2">"All Projects"</h1>
            <p class="text-gray-600 dark:text-gray-400 text-lg">
                "Take a look at some of my most recent projects"
            </p>
        </div>
        <Transition fallback=move || view! { <CardSkeleton /> }>
            {move || Suspend::new(async move {
                let projects = listing.await;
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {projects
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| view! { <WorkCard project priority={i == 0} /> })
                            .collect_view()}
                    </div>
                }
            })}
        </Transition>
    }
}

#[component]
fn DetailRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center border-b border-gray-200 dark:border-gray-800 pb-2">
            <span class="text-sm font-medium">{label}</span>
            {children()}
        </div>
    }
}

/// Bulleted list where each item's `Label:` prefix is bold.
#[component]
fn LabelledList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="list-disc pl-5 space-y-1 text-gray-600 dark:text-gray-400">
            {items
                .into_iter()
                .map(|item| {
                    let (label, rest) = split_label(&item);
                    let label = label.to_string();
                    let rest = rest.map(str::to_string);
                    view! {
                        <li>
                            {match rest {
                                Some(rest) => {
                                    Either::Left(view! { <strong>{label} ":"</strong> " " {rest} })
                                }
                                None => Either::Right(label),
                            }}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn TechnologiesUsed(stack: Vec<String>) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h3 class="text-2xl font-semibold mb-2">"Technologies Used"</h3>
            <LabelledList items=stack />
        </div>
    }
}

#[component]
fn Challenges(project: ProjectMeta) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h3 class="text-2xl font-semibold mb-2">"Challenges and Solutions"</h3>
            {project
                .challenges
                .into_iter()
                .map(|c| {
                    view! {
                        <div class="mb-4">
                            <p class="font-medium">{c.challenge}</p>
                            <p class="text-gray-600 dark:text-gray-400">{c.solution}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn NextProjectLink(slug: String) -> impl IntoView {
    let listing = expect_context::<Resource<Vec<ProjectMeta>>>();

    view! {
        <Transition>
            {move || {
                let slug = slug.clone();
                Suspend::new(async move {
                    let listing = listing.await;
                    next_project(&listing, &slug)
                        .filter(|next| next.slug != slug)
                        .map(|next| {
                            view! {
                                <div class="flex justify-end mt-12">
                                    <A href=next.page_href()>
                                        <span class="text-lg font-semibold hover:underline">
                                            "Next Project →"
                                        </span>
                                    </A>
                                </div>
                            }
                        })
                })
            }}
        </Transition>
    }
}

#[component]
fn ProjectDetails(project: Project) -> impl IntoView {
    let Project { meta, content } = project;
    let demos = meta.demo_tiles();
    let labels = meta.demos.iter().map(|d| d.label.clone()).collect::<Vec<_>>();

    // sections woven between the demo videos: stack after the first, challenges after the second
    let mut stack = Some(meta.stack.clone()).filter(|s| !s.is_empty());
    let mut challenges = Some(meta.clone()).filter(|m| !m.challenges.is_empty());
    let mut sections = Vec::new();
    for (i, (tile, label)) in demos.into_iter().zip(labels).enumerate() {
        sections.push(
            view! {
                <div class="mb-8">
                    <p class="text-sm text-gray-500 mb-2 capitalize">{label}</p>
                    <div class="w-full bg-gray-200 dark:bg-gray-900 rounded-lg flex justify-center items-center overflow-hidden">
                        <LazyMedia descriptor=tile />
                    </div>
                </div>
            }
            .into_any(),
        );
        match i {
            0 => {
                if let Some(stack) = stack.take() {
                    sections.push(view! { <TechnologiesUsed stack /> }.into_any());
                }
            }
            1 => {
                if let Some(project) = challenges.take() {
                    sections.push(view! { <Challenges project /> }.into_any());
                }
            }
            _ => {}
        }
    }
    // too few demos to host them
    if let Some(stack) = stack {
        sections.push(view! { <TechnologiesUsed stack /> }.into_any());
    }
    if let Some(project) = challenges {
        sections.push(view! { <Challenges project /> }.into_any());
    }

    let live_tooltip = meta.live_tooltip().to_string();
    let github_tooltip = format!("View Github Repository: {}", meta.github);
    let live_url = meta.live_url();
    let live = meta.live.clone();
    let github_url = meta.github_url();
    let github_short = meta.github_short();
    let year = meta.year.clone();
    let deployment = meta.deployment.clone();

    view! {
        <Title text=meta.title.clone() />
        <h1 class="text-5xl font-semibold mb-4">{meta.title.clone()}</h1>
        <p class="text-sm text-gray-600 dark:text-gray-400 mb-6">{meta.description.clone()}</p>
        <div class="grid grid-cols-1 gap-4 mb-6">
            <DetailRow label="Year">
                <p class="text-sm text-gray-400">{year}</p>
            </DetailRow>
            <DetailRow label="Live Demo">
                <Tooltip content=live_tooltip>
                    <a
                        href=live_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm text-gray-400 hover:underline"
                    >
                        {live}
                    </a>
                </Tooltip>
            </DetailRow>
            <DetailRow label="Github">
                <Tooltip content=github_tooltip>
                    <a
                        href=github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm text-gray-400 hover:underline truncate max-w-[150px] sm:max-w-none"
                    >
                        {github_short}
                    </a>
                </Tooltip>
            </DetailRow>
            <DetailRow label="Deployment">
                <p class="text-sm text-gray-400">{deployment}</p>
            </DetailRow>
        </div>
        <div class="mb-8">
            <h2 class="text-3xl font-semibold mb-2">"Project Details"</h2>
            {meta
                .main_tile()
                .map(|tile| {
                    view! {
                        <div class="w-full bg-gray-200 dark:bg-gray-900 rounded-lg flex justify-center items-center overflow-hidden mb-4">
                            <LazyMedia descriptor=tile.with_priority(true) />
                        </div>
                    }
                })}
            <div class="mb-8">
                <h3 class="text-2xl font-semibold mb-2">"Features"</h3>
                <LabelledList items=meta.features.clone() />
            </div>
            {sections}
            {(!meta.future.is_empty())
                .then(|| {
                    view! {
                        <div class="mb-8">
                            <h3 class="text-2xl font-semibold mb-2">"Future Enhancements"</h3>
                            <LabelledList items=meta.future.clone() />
                        </div>
                    }
                })}
            <div class="prose dark:prose-invert max-w-none" inner_html=content />
        </div>
        <NextProjectLink slug=meta.slug.clone() />
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let project = Resource::new(slug, |slug| async move {
        let cache = &*GLOBAL_PROJECT_CACHE;
        if let Some(cached) = cache.get(&slug) {
            return cached.value().clone().ok_or(ServerFnError::new("Couldn't get project"));
        }
        let fetched = get_project_server(slug.clone()).await;
        match &fetched {
            Ok(project) => {
                cache.insert(slug, Some(project.clone()));
            }
            Err(err) => log::debug!("project {slug} unavailable: {err}"),
        }
        fetched
    });

    view! {
        <Suspense fallback=move || view! { <CardSkeleton /> }>
            {move || Suspend::new(async move {
                match project.await {
                    Ok(project) => Either::Left(view! { <ProjectDetails project /> }),
                    Err(_) => Either::Right(view! { <NotFound /> }),
                }
            })}
        </Suspense>
    }
}
