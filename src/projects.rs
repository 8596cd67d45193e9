use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", test))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", test))]
use pulldown_cmark::{Options, Parser};

use crate::media::MediaDescriptor;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Option<Project>>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_LISTING_CACHE: LazyLock<DashMap<String, Vec<ProjectMeta>>> =
    LazyLock::new(DashMap::new);

/// Key of the full listing in [`GLOBAL_LISTING_CACHE`].
pub const LISTING_KEY: &str = "all";

const CARD_WIDTH: u32 = 565;
const CARD_HEIGHT: u32 = 400;
const VIDEO_WIDTH: u32 = 600;
const VIDEO_HEIGHT: u32 = 400;

#[derive(Embed)]
#[folder = "projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct ProjectFiles;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub challenge: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub label: String,
    pub src: String,
}

#[cfg(any(feature = "ssr", test))]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    #[serde(default)]
    abbreviation: Option<String>,
    #[serde(default)]
    logo: Option<String>,
    summary: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    technologies: Vec<String>,
    github: String,
    live: String,
    image: String,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    year: String,
    #[serde(default)]
    deployment: String,
    #[serde(default)]
    live_note: Option<String>,
    #[serde(default)]
    order: u32,
    #[serde(default)]
    has_page: bool,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    stack: Vec<String>,
    #[serde(default)]
    challenges: Vec<Challenge>,
    #[serde(default)]
    future: Vec<String>,
    #[serde(default)]
    demos: Vec<Demo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    pub abbreviation: Option<String>,
    pub logo: Option<String>,
    pub summary: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Repository host path, e.g. `github.com/lmeisters/SiteSelect`.
    pub github: String,
    /// Live site host, e.g. `siteselect.vercel.app`.
    pub live: String,
    pub image: String,
    pub video: Option<String>,
    pub year: String,
    pub deployment: String,
    pub live_note: Option<String>,
    pub order: u32,
    pub has_page: bool,
    pub features: Vec<String>,
    pub stack: Vec<String>,
    pub challenges: Vec<Challenge>,
    pub future: Vec<String>,
    pub demos: Vec<Demo>,
}

impl ProjectMeta {
    pub fn github_url(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn live_url(&self) -> String {
        format!("https://{}", self.live)
    }

    pub fn page_href(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    /// Abbreviation shown when there is no logo; falls back to the initials of the title.
    pub fn badge_text(&self) -> String {
        self.abbreviation.clone().unwrap_or_else(|| {
            self.title
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .take(2)
                .collect::<String>()
                .to_uppercase()
        })
    }

    /// Tooltip for the live-site link.
    pub fn live_tooltip(&self) -> &str {
        self.live_note.as_deref().unwrap_or("View Live Site")
    }

    /// Github host path, shortened for the details table.
    pub fn github_short(&self) -> String {
        if self.github.chars().count() > 30 {
            format!("{}...", self.github.chars().take(30).collect::<String>())
        } else {
            self.github.clone()
        }
    }

    /// Card tile: screenshot poster with the demo video on hover.
    pub fn card_tile(&self, priority: bool) -> MediaDescriptor {
        MediaDescriptor::image(
            self.image.clone(),
            self.video.clone(),
            CARD_WIDTH,
            CARD_HEIGHT,
            format!("{} project screenshot", self.title),
        )
        .with_priority(priority)
    }

    /// Zoomable main video for the project page.
    pub fn main_tile(&self) -> Option<MediaDescriptor> {
        self.video
            .as_ref()
            .map(|src| MediaDescriptor::video(src.clone(), VIDEO_WIDTH, VIDEO_HEIGHT, self.title.clone()))
    }

    pub fn demo_tiles(&self) -> Vec<MediaDescriptor> {
        self.demos
            .iter()
            .map(|d| {
                MediaDescriptor::video(
                    d.src.clone(),
                    VIDEO_WIDTH,
                    VIDEO_HEIGHT,
                    format!("{} - {}", self.title, d.label),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    /// Long-form write-up rendered to HTML.
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Couldn't parse project: {0}")]
    ParseError(String),
}

/// Lowercase, whitespace runs collapsed to `-`.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The project after `slug` that has its own page, wrapping round.
pub fn next_project<'a>(listing: &'a [ProjectMeta], slug: &str) -> Option<&'a ProjectMeta> {
    let with_pages = listing.iter().filter(|p| p.has_page).collect::<Vec<_>>();
    let i = with_pages.iter().position(|p| p.slug == slug)?;
    with_pages.get((i + 1) % with_pages.len()).copied()
}

/// Splits `"Label: detail"` into its bold label and the rest.
pub fn split_label(item: &str) -> (&str, Option<&str>) {
    match item.split_once(':') {
        Some((label, rest)) => (label.trim(), Some(rest.trim())),
        None => (item.trim(), None),
    }
}

#[cfg(any(feature = "ssr", test))]
pub fn parse_project(file_name: &str, content: &str) -> Result<Project, ProjectError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ProjectError::ParseError(file_name.to_string()))?;
    let fm = parsed.data;
    let slug = file_name.strip_suffix(".md").unwrap_or(file_name).to_string();
    let meta = ProjectMeta {
        slug,
        title: fm.title,
        abbreviation: fm.abbreviation,
        logo: fm.logo,
        summary: fm.summary,
        description: fm.description,
        technologies: fm.technologies,
        github: fm.github,
        live: fm.live,
        image: fm.image,
        video: fm.video,
        year: fm.year,
        deployment: fm.deployment,
        live_note: fm.live_note,
        order: fm.order,
        has_page: fm.has_page,
        features: fm.features,
        stack: fm.stack,
        challenges: fm.challenges,
        future: fm.future,
        demos: fm.demos,
    };

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    Ok(Project {
        meta,
        content: html_output,
    })
}

#[cfg(any(feature = "ssr", test))]
fn read_file(name: &str) -> Option<String> {
    let file = ProjectFiles::get(name)?;
    String::from_utf8(file.data.into()).ok()
}

/// Every project, ordered for display.
#[cfg(any(feature = "ssr", test))]
pub fn get_projects() -> Option<Vec<ProjectMeta>> {
    let cache = &*GLOBAL_LISTING_CACHE;
    if let Some(r) = cache.get(LISTING_KEY) {
        return Some(r.clone());
    }
    let mut listing = ProjectFiles::iter()
        .map(|name| {
            let content = read_file(&name)?;
            parse_project(&name, &content).ok().map(|p| p.meta)
        })
        .collect::<Option<Vec<ProjectMeta>>>()?;
    listing.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
    cache.insert(LISTING_KEY.to_string(), listing.clone());
    Some(listing)
}

#[cfg(any(feature = "ssr", test))]
pub fn get_project(slug: &str) -> Result<Project, ProjectError> {
    let name = format!("{slug}.md");
    let content = read_file(&name).ok_or(ProjectError::NotFound)?;

    let cache = &*GLOBAL_PROJECT_CACHE;
    cache
        .entry(slug.to_string())
        .or_insert_with(move || parse_project(&name, &content).ok().filter(|p| p.meta.has_page))
        .clone()
        .ok_or(ProjectError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"---
title: Site Select
summary: Design galleries
technologies: [JavaScript, SCSS/SASS, GSAP]
github: github.com/lmeisters/SiteSelect
live: siteselect.vercel.app
image: /assets/images/siteselect_works.webp
video: /assets/videos/siteselect/siteselect_demo.webm
order: 2
has_page: true
features:
  - "Curated Collection: Hand-picked galleries"
challenges:
  - challenge: Smooth loading
    solution: Fetch API
demos:
  - label: search
    src: /assets/videos/siteselect/siteselect_search.webm
---
A *curated* platform.
"#;

    fn meta(slug: &str, has_page: bool) -> ProjectMeta {
        let mut m = parse_project("x.md", SAMPLE).unwrap().meta;
        m.slug = slug.to_string();
        m.has_page = has_page;
        m
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("SiteSelect"), "siteselect");
        assert_eq!(slugify("AI Image Generator"), "ai-image-generator");
        assert_eq!(slugify("  Portfolio   website "), "portfolio-website");
    }

    #[test]
    fn test_parse_front_matter() {
        let project = parse_project("siteselect.md", SAMPLE).unwrap();
        let m = &project.meta;
        assert_eq!(m.slug, "siteselect");
        assert_eq!(m.title, "Site Select");
        assert_eq!(m.technologies, vec!["JavaScript", "SCSS/SASS", "GSAP"]);
        assert_eq!(m.github_url(), "https://github.com/lmeisters/SiteSelect");
        assert_eq!(m.live_tooltip(), "View Live Site");
        assert_eq!(m.badge_text(), "SS");
        assert_eq!(m.challenges[0].solution, "Fetch API");
        assert_eq!(m.demos.len(), 1);
        assert!(project.content.contains("<em>curated</em>"));
    }

    #[test]
    fn test_parse_rejects_missing_front_matter() {
        assert!(matches!(
            parse_project("broken.md", "no front matter here"),
            Err(ProjectError::ParseError(_))
        ));
    }

    #[test]
    fn test_tiles() {
        let m = meta("siteselect", true);
        let card = m.card_tile(true);
        assert!(card.priority);
        assert!(card.has_hover_preview());
        assert_eq!(card.label, "Site Select project screenshot");

        let main = m.main_tile().unwrap();
        assert!(main.is_zoomable());
        let demos = m.demo_tiles();
        assert_eq!(demos[0].label, "Site Select - search");
        assert!(demos[0].is_zoomable());
    }

    #[test]
    fn test_next_project_wraps_and_skips_pageless() {
        let listing = vec![
            meta("a", true),
            meta("b", true),
            meta("portfolio", false),
            meta("c", true),
        ];
        assert_eq!(next_project(&listing, "a").unwrap().slug, "b");
        assert_eq!(next_project(&listing, "b").unwrap().slug, "c");
        assert_eq!(next_project(&listing, "c").unwrap().slug, "a");
        assert!(next_project(&listing, "portfolio").is_none());
        assert!(next_project(&listing, "missing").is_none());
    }

    #[test]
    fn test_split_label() {
        assert_eq!(
            split_label("Keyword Filtering: Filter songs by keyword"),
            ("Keyword Filtering", Some("Filter songs by keyword"))
        );
        assert_eq!(split_label("Plain item"), ("Plain item", None));
    }

    #[test]
    fn test_github_short() {
        let mut m = meta("x", true);
        m.github = "github.com/lmeisters/AI_Image_Generator_Dall-E".to_string();
        assert_eq!(m.github_short(), "github.com/lmeisters/AI_Image_...");
    }

    #[test]
    fn test_embedded_projects_parse() {
        let listing = get_projects().expect("embedded projects should parse");
        assert!(!listing.is_empty());
        assert!(listing.windows(2).all(|w| w[0].order <= w[1].order));
        for p in &listing {
            assert_eq!(p.slug, slugify(&p.title), "file name should match title");
        }
        let with_page = listing.iter().find(|p| p.has_page).unwrap();
        assert!(get_project(&with_page.slug).is_ok());
        let without_page = listing.iter().find(|p| !p.has_page).unwrap();
        assert_eq!(get_project(&without_page.slug), Err(ProjectError::NotFound));
        assert_eq!(get_project("does-not-exist"), Err(ProjectError::NotFound));
    }
}
