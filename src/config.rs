use std::sync::LazyLock;

/// Who the site belongs to. Rendered by the header, hero, navbar and contact sections.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub name: &'static str,
    pub full_name: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub resume_url: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub location: &'static str,
}

pub static SITE_PROFILE: LazyLock<SiteProfile> = LazyLock::new(|| SiteProfile {
    name: "Linards",
    full_name: "Linards Meisters",
    initials: "LM",
    tagline: "Front-End Developer creating efficient, user-friendly web applications with modern design",
    email: "linards.meisters@gmail.com",
    resume_url: "https://drive.google.com/file/d/1_uUxYKSwakk_O9ZBZYH-jw03ZaM2X-gN/view",
    github_url: "https://github.com/lmeisters",
    linkedin_url: "https://linkedin.com/in/linards-meisters",
    location: "Riga, Latvia",
});

/// Timings and observer tuning for media tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaConfig {
    /// Margin added around the viewport when checking tile visibility.
    pub root_margin: &'static str,
    /// Fraction of the tile that must intersect before it counts as visible.
    pub threshold: f64,
    /// Length of the zoom entrance and exit transitions.
    pub zoom_transition_ms: u32,
    /// Length of the blur/scale fade once media has loaded.
    pub load_fade_ms: u32,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root_margin: "50px",
            threshold: 0.1,
            zoom_transition_ms: 400,
            load_fade_ms: 500,
        }
    }
}

/// Viewports at or below this width get no pointer tooltips.
pub const TOOLTIP_MAX_TOUCH_WIDTH: u32 = 768;

/// How long a "Copied!" confirmation stays up.
pub const COPIED_RESET_MS: f64 = 2000.0;

/// Build timestamp (RFC 3339) injected by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");
