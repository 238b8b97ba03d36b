//! Typst document generation.
//!
//! Emits `main.typ`-style source text for the downstream Typst templates.
//! This layer only substitutes finished values (palette hexes, image
//! paths, copy text) into opaque template text; it knows nothing about
//! layout or typesetting.

use std::fmt;
use std::str::FromStr;

use crate::error::RrssError;

/// Document layouts the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Article,
    Quote,
    Hero,
    Carousel,
}

impl Layout {
    pub const fn as_str(self) -> &'static str {
        match self {
            Layout::Article => "article",
            Layout::Quote => "quote",
            Layout::Hero => "hero",
            Layout::Carousel => "carousel",
        }
    }
}

impl FromStr for Layout {
    type Err = RrssError;

    fn from_str(s: &str) -> Result<Self, RrssError> {
        match s {
            "article" => Ok(Layout::Article),
            "quote" => Ok(Layout::Quote),
            "hero" => Ok(Layout::Hero),
            "carousel" => Ok(Layout::Carousel),
            other => Err(RrssError::Config {
                message: format!("unknown layout: {}", other),
                help: Some("Expected one of: article, quote, hero, carousel".to_string()),
            }),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a layout template can substitute.
#[derive(Debug, Clone)]
pub struct DocumentSpec {
    pub layout: Layout,
    pub platform: String,
    pub theme: String,
    pub brand: String,
    pub title: String,
    pub quote: String,
    /// Accent hex, `#rrggbb`.
    pub accent: String,
    pub url: String,
    pub author: String,
    pub tag: Option<String>,
    pub slides: Vec<String>,
    /// Typst expression for the background image slot, e.g.
    /// `image("assets/bg.jpg", width: 100%)`. `None` leaves the slot empty.
    pub bg_image: Option<String>,
}

impl DocumentSpec {
    /// Render the full Typst source for this document.
    pub fn render(&self) -> String {
        match self.layout {
            Layout::Article => self.render_article(),
            Layout::Quote => self.render_quote(),
            Layout::Hero => self.render_hero(),
            Layout::Carousel => self.render_carousel(),
        }
    }

    fn preamble(&self, page_fill: &str) -> String {
        format!(
            "// Generated by rrss\n\
             #import \"lib.typ\": *\n\
             \n\
             #let platform = \"{platform}\"\n\
             #let t = theme(\"{theme}\")\n\
             #let dims = platforms.at(platform)\n\
             \n\
             #set page(\n\
             \x20 width: dims.width,\n\
             \x20 height: dims.height,\n\
             \x20 margin: 0pt,\n\
             \x20 fill: {page_fill},\n\
             )\n\
             \n\
             #set text(font: fonts.body.first(), fill: t.text)\n\
             \n",
            platform = self.platform,
            theme = self.theme,
            page_fill = page_fill,
        )
    }

    fn render_article(&self) -> String {
        let bg_line = match &self.bg_image {
            Some(expr) => format!("  bg-image: {},\n", expr),
            None => "  // no background image\n".to_string(),
        };
        format!(
            "{preamble}#article-layout(\n\
             \x20 brand: \"{brand}\",\n\
             \x20 title: \"{title}\",\n\
             \x20 quote-text: \"{quote}\",\n\
             {bg_line}\
             \x20 accent: rgb(\"{accent}\"),\n\
             \x20 url: \"{url}\",\n\
             )\n",
            preamble = self.preamble("rgb(\"#1a1a1a\")"),
            brand = self.brand,
            title = self.title,
            quote = self.quote,
            bg_line = bg_line,
            accent = self.accent,
            url = self.url,
        )
    }

    fn render_quote(&self) -> String {
        let author = if self.author.is_empty() {
            &self.brand
        } else {
            &self.author
        };
        format!(
            "{preamble}#quote-layout(\n\
             \x20 t,\n\
             \x20 quote-text: \"{quote}\",\n\
             \x20 author: \"{author}\",\n\
             )\n\
             \n\
             #watermark(t, \"{brand}\")\n",
            preamble = self.preamble("t.bg"),
            quote = self.quote,
            author = author,
            brand = self.brand,
        )
    }

    fn render_hero(&self) -> String {
        let tag_line = match &self.tag {
            Some(tag) => format!("  tag: \"{}\",\n", tag),
            None => "  // no tag\n".to_string(),
        };
        format!(
            "{preamble}#hero-layout(\n\
             \x20 t,\n\
             \x20 title: \"{title}\",\n\
             \x20 subtitle: \"{quote}\",\n\
             {tag_line}\
             )\n\
             \n\
             #watermark(t, \"{brand}\")\n",
            preamble = self.preamble("t.bg"),
            title = self.title,
            quote = self.quote,
            tag_line = tag_line,
            brand = self.brand,
        )
    }

    fn render_carousel(&self) -> String {
        let slides = if self.slides.is_empty() {
            "()".to_string()
        } else {
            let quoted: Vec<String> = self
                .slides
                .iter()
                .map(|s| format!("[_{}_]", s))
                .collect();
            format!("({},)", quoted.join(", "))
        };
        let bg = self.bg_image.as_deref().unwrap_or("none");
        format!(
            "{preamble}// Slides\n\
             #let slides = {slides}\n\
             \n\
             #carousel-layout(\n\
             \x20 t,\n\
             \x20 slides: slides,\n\
             \x20 title: \"{title}\",\n\
             \x20 bg-image: {bg},\n\
             )\n",
            preamble = self.preamble("t.bg"),
            slides = slides,
            title = self.title,
            bg = bg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(layout: Layout) -> DocumentSpec {
        DocumentSpec {
            layout,
            platform: "instagram-post".to_string(),
            theme: "dark".to_string(),
            brand: "Studio".to_string(),
            title: "The Title".to_string(),
            quote: "A quote".to_string(),
            accent: "#4a3f6b".to_string(),
            url: "studio.example".to_string(),
            author: String::new(),
            tag: None,
            slides: Vec::new(),
            bg_image: None,
        }
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("article".parse::<Layout>().unwrap(), Layout::Article);
        assert_eq!("carousel".parse::<Layout>().unwrap(), Layout::Carousel);
        assert!("poster".parse::<Layout>().is_err());
    }

    #[test]
    fn test_article_document() {
        let mut s = spec(Layout::Article);
        s.bg_image = Some("image(\"assets/bg.jpg\", width: 100%)".to_string());
        let doc = s.render();

        assert!(doc.starts_with("// Generated by rrss\n"));
        assert!(doc.contains("#let platform = \"instagram-post\""));
        assert!(doc.contains("#let t = theme(\"dark\")"));
        assert!(doc.contains("bg-image: image(\"assets/bg.jpg\", width: 100%),"));
        assert!(doc.contains("accent: rgb(\"#4a3f6b\")"));
        assert!(doc.contains("url: \"studio.example\""));
    }

    #[test]
    fn test_article_without_image() {
        let doc = spec(Layout::Article).render();
        assert!(doc.contains("// no background image"));
        assert!(!doc.contains("bg-image:"));
    }

    #[test]
    fn test_quote_author_falls_back_to_brand() {
        let doc = spec(Layout::Quote).render();
        assert!(doc.contains("author: \"Studio\""));
        assert!(doc.contains("#watermark(t, \"Studio\")"));

        let mut s = spec(Layout::Quote);
        s.author = "C. S. Lewis".to_string();
        assert!(s.render().contains("author: \"C. S. Lewis\""));
    }

    #[test]
    fn test_hero_tag_optional() {
        let doc = spec(Layout::Hero).render();
        assert!(doc.contains("// no tag"));

        let mut s = spec(Layout::Hero);
        s.tag = Some("essay".to_string());
        assert!(s.render().contains("tag: \"essay\","));
    }

    #[test]
    fn test_carousel_slides() {
        let mut s = spec(Layout::Carousel);
        s.slides = vec!["First".to_string(), "Second".to_string()];
        let doc = s.render();
        assert!(doc.contains("#let slides = ([_First_], [_Second_],)"));
        assert!(doc.contains("bg-image: none,"));

        let empty = spec(Layout::Carousel).render();
        assert!(empty.contains("#let slides = ()"));
    }
}
