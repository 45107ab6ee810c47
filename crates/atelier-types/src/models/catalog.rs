//! Style and dimension catalogs.
//!
//! Both catalogs are immutable configuration data, constructed once at
//! process start and shared read-only across requests. Lookups never fail:
//! an unknown or missing tag resolves to the documented default instead of
//! an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping of art style → intensity → natural-language descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleCatalog {
    styles: HashMap<String, HashMap<String, String>>,
}

impl StyleCatalog {
    pub const DEFAULT_STYLE: &'static str = "paper";
    pub const DEFAULT_INTENSITY: &'static str = "moderate";

    /// Last-resort descriptor, used if a custom catalog lacks even the
    /// default "paper"/"moderate" entry.
    const FALLBACK_DESCRIPTOR: &'static str = "expressive paper art style with vibrant black line art on textured newspaper background, enhanced with splashes of bright blue and orange paint";

    pub fn new(styles: HashMap<String, HashMap<String, String>>) -> Self {
        Self { styles }
    }

    /// Resolve a descriptor for the given tags.
    ///
    /// Missing tags take the defaults; any lookup miss (unknown style,
    /// unknown intensity, or a gap in the catalog) falls back to the
    /// "paper"/"moderate" descriptor.
    pub fn descriptor(&self, style: Option<&str>, intensity: Option<&str>) -> &str {
        let style = style.unwrap_or(Self::DEFAULT_STYLE);
        let intensity = intensity.unwrap_or(Self::DEFAULT_INTENSITY);

        self.styles
            .get(style)
            .and_then(|by_intensity| by_intensity.get(intensity))
            .or_else(|| {
                self.styles
                    .get(Self::DEFAULT_STYLE)
                    .and_then(|by_intensity| by_intensity.get(Self::DEFAULT_INTENSITY))
            })
            .map(String::as_str)
            .unwrap_or(Self::FALLBACK_DESCRIPTOR)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        let paper: HashMap<String, String> = [
            (
                "subtle",
                "subtle paper art style with light newspaper textures and minimal paint splashes",
            ),
            (
                "moderate",
                "expressive paper art style with vibrant black line art on textured newspaper background, enhanced with splashes of bright blue and orange paint",
            ),
            (
                "strong",
                "bold paper art style with strong black line illustrations on heavily textured newspaper collage, dramatic splashes of bright blue and orange paint",
            ),
            (
                "extreme",
                "extreme paper art style with intense black ink illustrations on complex newspaper collage background, explosive splashes of bright blue, orange, and additional vibrant colors",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self { styles: HashMap::from([("paper".to_string(), paper)]) }
    }
}

/// Target output size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Mapping of aspect-ratio tag → output dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionCatalog {
    ratios: HashMap<String, Dimensions>,
}

impl DimensionCatalog {
    pub const DEFAULT_RATIO: &'static str = "1:1";

    pub fn new(ratios: HashMap<String, Dimensions>) -> Self {
        Self { ratios }
    }

    /// Resolve an aspect-ratio tag; a missing or unknown tag yields the
    /// 1:1 default (1024x1024).
    pub fn resolve(&self, tag: Option<&str>) -> Dimensions {
        tag.and_then(|t| self.ratios.get(t))
            .or_else(|| self.ratios.get(Self::DEFAULT_RATIO))
            .copied()
            .unwrap_or(Dimensions { width: 1024, height: 1024 })
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.ratios.keys().map(String::as_str)
    }
}

impl Default for DimensionCatalog {
    fn default() -> Self {
        let entries: &[(&str, u32, u32)] = &[
            // Mobile devices
            ("9:16", 1080, 1920),
            ("16:9", 1920, 1080),
            ("9:18", 1080, 2160),
            // Tablets
            ("3:4", 1536, 2048),
            ("4:3", 2048, 1536),
            // Desktop / laptop
            ("16:10", 1920, 1200),
            ("21:9", 2560, 1080),
            ("1:1", 1024, 1024),
            // 4K
            ("16:9-4k", 3840, 2160),
            ("21:9-4k", 5120, 2160),
            ("9:16-4k", 2160, 3840),
            // Watch & small devices
            ("1:1-watch", 312, 312),
            ("watch-round", 360, 360),
            // Social media
            ("instagram", 1080, 1080),
            ("instagram-story", 1080, 1920),
            ("youtube-thumb", 1280, 720),
        ];

        let ratios = entries
            .iter()
            .map(|&(tag, width, height)| (tag.to_string(), Dimensions { width, height }))
            .collect();

        Self { ratios }
    }
}
