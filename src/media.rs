mod hover;
mod load;
mod scroll_lock;
mod visibility;
pub mod zoom;

pub use hover::{HoverPreview, Playback};
pub use load::LoadState;
pub use scroll_lock::{ModalSession, ScrollLock, SCROLL_LOCK, SCROLL_LOCK_CLASS};
pub use visibility::{LazySource, VisibilityGate};
pub use zoom::{ZoomController, ZoomEffect, ZoomEvent, ZoomPhase};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a tile needs to render one image or video.
///
/// Built by the content lists (project cards, project pages) and never mutated
/// once handed to a tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub image_source: String,
    pub video_source: Option<String>,
    pub intrinsic_width: u32,
    pub intrinsic_height: u32,
    pub label: String,
    pub is_video_primary: bool,
    pub hover_disabled: bool,
    pub zoom_enabled: bool,
    pub priority: bool,
}

impl MediaDescriptor {
    /// A still image tile, optionally previewing `video_source` on hover.
    pub fn image(
        image_source: impl Into<String>,
        video_source: Option<String>,
        width: u32,
        height: u32,
        label: impl Into<String>,
    ) -> Self {
        Self {
            image_source: image_source.into(),
            video_source,
            intrinsic_width: width,
            intrinsic_height: height,
            label: label.into(),
            is_video_primary: false,
            hover_disabled: false,
            zoom_enabled: false,
            priority: false,
        }
    }

    /// A bare autoplaying video tile. Zoom is on by default.
    pub fn video(source: impl Into<String>, width: u32, height: u32, label: impl Into<String>) -> Self {
        Self {
            image_source: source.into(),
            video_source: None,
            intrinsic_width: width,
            intrinsic_height: height,
            label: label.into(),
            is_video_primary: true,
            hover_disabled: true,
            zoom_enabled: true,
            priority: false,
        }
    }

    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_hover_disabled(mut self, disabled: bool) -> Self {
        self.hover_disabled = disabled;
        self
    }

    pub fn with_zoom(mut self, enabled: bool) -> Self {
        self.zoom_enabled = enabled;
        self
    }

    pub fn is_zoomable(&self) -> bool {
        self.is_video_primary && self.zoom_enabled
    }

    pub fn has_hover_preview(&self) -> bool {
        !self.is_video_primary && !self.hover_disabled && self.video_source.is_some()
    }

    /// CSS `aspect-ratio` value keeping layout stable before the media arrives.
    pub fn aspect_ratio(&self) -> String {
        format!("{} / {}", self.intrinsic_width, self.intrinsic_height)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    #[error("IntersectionObserver is not available")]
    Unsupported,
    #[error("Playback was rejected: {0}")]
    Playback(String),
    #[error("Media failed to load: {0}")]
    Load(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_with_video_previews_on_hover() {
        let tile = MediaDescriptor::image(
            "/assets/images/siteselect.webp",
            Some("/assets/videos/siteselect/siteselect_demo.webm".to_string()),
            565,
            400,
            "SiteSelect project screenshot",
        );
        assert!(tile.has_hover_preview());
        assert!(!tile.is_zoomable());

        let tile = tile.with_hover_disabled(true);
        assert!(!tile.has_hover_preview());
    }

    #[test]
    fn test_image_without_video_has_no_preview() {
        let tile = MediaDescriptor::image("/og-image.png", None, 565, 400, "Portfolio");
        assert!(!tile.has_hover_preview());
    }

    #[test]
    fn test_video_tile_zoom_flag() {
        let tile = MediaDescriptor::video("/assets/videos/terrainly/terrainly_demo.webm", 600, 400, "Terrainly");
        assert!(tile.is_zoomable());
        assert!(!tile.has_hover_preview());
        assert!(!tile.with_zoom(false).is_zoomable());
    }

    #[test]
    fn test_aspect_ratio() {
        let tile = MediaDescriptor::video("/a.webm", 600, 400, "a");
        assert_eq!(tile.aspect_ratio(), "600 / 400");
    }

    #[test]
    fn test_descriptor_deserializes_from_json() {
        let json = r#"{
            "image_source": "/a.webp",
            "video_source": null,
            "intrinsic_width": 10,
            "intrinsic_height": 20,
            "label": "a",
            "is_video_primary": false,
            "hover_disabled": false,
            "zoom_enabled": false,
            "priority": true
        }"#;
        let tile: MediaDescriptor = serde_json::from_str(json).unwrap();
        assert!(tile.priority);
        assert_eq!(tile.intrinsic_height, 20);
    }
}
