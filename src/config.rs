//! Batch configuration (`posts.toml`) parsing.
//!
//! A declarative list of posts with shared `[defaults]`; each `[[post]]`
//! entry overrides whatever it sets. Resolution happens once up front so
//! the build loop only ever sees complete posts.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RrssError};

/// Fallback accent used when nothing chooses one.
pub const DEFAULT_ACCENT: &str = "#4a3f6b";

/// Top-level `posts.toml` structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub defaults: PostEntry,
    #[serde(rename = "post")]
    pub posts: Vec<PostEntry>,
}

/// One `[[post]]` table (or the `[defaults]` table). Everything optional;
/// unset fields inherit from the defaults, then from built-in values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostEntry {
    pub name: Option<String>,
    pub title: Option<String>,
    pub quote: Option<String>,
    pub brand: Option<String>,
    pub url: Option<String>,
    pub platform: Option<String>,
    pub layout: Option<String>,
    pub theme: Option<String>,
    pub image: Option<String>,
    pub accent: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub ppi: Option<u32>,
    pub slides: Option<Vec<String>>,
    pub contour: Option<bool>,
    pub recolor: Option<bool>,
    pub recolor_intensity: Option<f64>,
}

/// A post with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPost {
    pub name: String,
    pub title: String,
    pub quote: String,
    pub brand: String,
    pub url: String,
    pub platform: String,
    pub layout: String,
    pub theme: String,
    pub image: Option<String>,
    /// `"auto"` means: extract the accent from the image.
    pub accent: String,
    pub author: String,
    pub tag: Option<String>,
    pub ppi: u32,
    pub slides: Vec<String>,
    pub contour: bool,
    pub recolor: bool,
    pub recolor_intensity: f64,
}

impl BatchConfig {
    /// Load and parse a `posts.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RrssError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;
        toml::from_str(&content).map_err(|e| RrssError::Config {
            message: format!("{}: {}", path.display(), e),
            help: Some("Expected [defaults] and [[post]] tables".to_string()),
        })
    }

    /// Merge each post over the defaults and built-in fallbacks.
    pub fn resolve(&self) -> Vec<ResolvedPost> {
        self.posts
            .iter()
            .enumerate()
            .map(|(i, post)| self.resolve_one(i, post))
            .collect()
    }

    fn resolve_one(&self, index: usize, post: &PostEntry) -> ResolvedPost {
        let d = &self.defaults;
        let pick = |a: &Option<String>, b: &Option<String>, fallback: &str| {
            a.clone()
                .or_else(|| b.clone())
                .unwrap_or_else(|| fallback.to_string())
        };

        ResolvedPost {
            name: post
                .name
                .clone()
                .unwrap_or_else(|| format!("post_{}", index)),
            title: pick(&post.title, &d.title, ""),
            quote: pick(&post.quote, &d.quote, ""),
            brand: pick(&post.brand, &d.brand, ""),
            url: pick(&post.url, &d.url, ""),
            platform: pick(&post.platform, &d.platform, "instagram-post"),
            layout: pick(&post.layout, &d.layout, "article"),
            theme: pick(&post.theme, &d.theme, "dark"),
            image: post.image.clone().or_else(|| d.image.clone()),
            accent: pick(&post.accent, &d.accent, DEFAULT_ACCENT),
            author: pick(&post.author, &d.author, ""),
            tag: post.tag.clone().or_else(|| d.tag.clone()),
            ppi: post.ppi.or(d.ppi).unwrap_or(144),
            slides: post
                .slides
                .clone()
                .or_else(|| d.slides.clone())
                .unwrap_or_default(),
            contour: post.contour.or(d.contour).unwrap_or(false),
            recolor: post.recolor.or(d.recolor).unwrap_or(false),
            recolor_intensity: post
                .recolor_intensity
                .or(d.recolor_intensity)
                .unwrap_or(0.7),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(toml: &str) -> BatchConfig {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_minimal_post() {
        let config = parse(
            r#"
            [[post]]
            name = "intro"
            title = "Hello"
            "#,
        );
        let posts = config.resolve();
        assert_eq!(posts.len(), 1);

        let post = &posts[0];
        assert_eq!(post.name, "intro");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.platform, "instagram-post");
        assert_eq!(post.layout, "article");
        assert_eq!(post.theme, "dark");
        assert_eq!(post.accent, DEFAULT_ACCENT);
        assert_eq!(post.ppi, 144);
        assert!(!post.recolor);
        assert_eq!(post.recolor_intensity, 0.7);
    }

    #[test]
    fn test_defaults_are_inherited_and_overridable() {
        let config = parse(
            r#"
            [defaults]
            brand = "Studio"
            theme = "ocean"
            ppi = 300

            [[post]]
            name = "a"

            [[post]]
            name = "b"
            theme = "sunset"
            "#,
        );
        let posts = config.resolve();

        assert_eq!(posts[0].brand, "Studio");
        assert_eq!(posts[0].theme, "ocean");
        assert_eq!(posts[0].ppi, 300);

        assert_eq!(posts[1].brand, "Studio");
        assert_eq!(posts[1].theme, "sunset");
    }

    #[test]
    fn test_unnamed_post_gets_indexed_name() {
        let config = parse(
            r#"
            [[post]]
            title = "One"

            [[post]]
            title = "Two"
            "#,
        );
        let posts = config.resolve();
        assert_eq!(posts[0].name, "post_0");
        assert_eq!(posts[1].name, "post_1");
    }

    #[test]
    fn test_recolor_settings() {
        let config = parse(
            r#"
            [[post]]
            name = "styled"
            image = "assets/photo.jpg"
            recolor = true
            recolor_intensity = 0.5
            accent = "auto"
            slides = ["a", "b"]
            contour = true
            "#,
        );
        let post = &config.resolve()[0];
        assert_eq!(post.image.as_deref(), Some("assets/photo.jpg"));
        assert!(post.recolor);
        assert_eq!(post.recolor_intensity, 0.5);
        assert_eq!(post.accent, "auto");
        assert_eq!(post.slides, vec!["a", "b"]);
        assert!(post.contour);
    }

    #[test]
    fn test_load_missing_file() {
        let err = BatchConfig::load(Path::new("/nonexistent/posts.toml")).unwrap_err();
        assert!(matches!(err, RrssError::Io { .. }));
    }

    #[test]
    fn test_invalid_toml() {
        let err = toml::from_str::<BatchConfig>("post = 3");
        assert!(err.is_err());
    }
}
