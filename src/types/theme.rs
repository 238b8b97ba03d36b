//! Built-in theme registry and platform dimension tables.
//!
//! These mirror the palettes in the Typst side (`lib/theme.typ`), so the CLI
//! and the compiled documents agree on every color. The tables are immutable
//! process-wide constants; lookups go through read-only accessors.

use super::color::Color;
use super::palette::Palette;

/// A named, pre-registered palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub palette: Palette,
}

const fn c(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

/// The built-in themes. `dark` is first and doubles as the fallback.
pub static THEMES: [Theme; 5] = [
    Theme {
        name: "dark",
        palette: Palette::new([
            c(0x0f, 0x0f, 0x0f), // bg
            c(0x1a, 0x1a, 0x2e), // surface
            c(0xe9, 0x45, 0x60), // primary
            c(0x53, 0x34, 0x83), // secondary
            c(0x0f, 0x34, 0x60), // accent
            c(0xf5, 0xf5, 0xf5), // text
            c(0xa0, 0xa0, 0xa0), // muted
            c(0xff, 0xd3, 0x69), // highlight
        ]),
    },
    Theme {
        name: "light",
        palette: Palette::new([
            c(0xfa, 0xfa, 0xfa),
            c(0xff, 0xff, 0xff),
            c(0xe9, 0x45, 0x60),
            c(0x6c, 0x5c, 0xe7),
            c(0x00, 0xb8, 0x94),
            c(0x1a, 0x1a, 0x2e),
            c(0x6b, 0x72, 0x80),
            c(0xfd, 0xcb, 0x6e),
        ]),
    },
    Theme {
        name: "ocean",
        palette: Palette::new([
            c(0x0a, 0x19, 0x2f),
            c(0x11, 0x22, 0x40),
            c(0x64, 0xff, 0xda),
            c(0x88, 0x92, 0xb0),
            c(0x23, 0x35, 0x54),
            c(0xcc, 0xd6, 0xf6),
            c(0x88, 0x92, 0xb0),
            c(0x64, 0xff, 0xda),
        ]),
    },
    Theme {
        name: "sunset",
        palette: Palette::new([
            c(0x1a, 0x1a, 0x2e),
            c(0x16, 0x21, 0x3e),
            c(0xff, 0x6b, 0x6b),
            c(0xfe, 0xca, 0x57),
            c(0xff, 0x9f, 0xf3),
            c(0xf5, 0xf5, 0xf5),
            c(0xa0, 0xa0, 0xa0),
            c(0xfe, 0xca, 0x57),
        ]),
    },
    Theme {
        name: "forest",
        palette: Palette::new([
            c(0x1b, 0x2d, 0x1b),
            c(0x2d, 0x4a, 0x2d),
            c(0xa8, 0xe6, 0xcf),
            c(0xdc, 0xed, 0xc1),
            c(0xff, 0xd3, 0xb6),
            c(0xf0, 0xf0, 0xf0),
            c(0x98, 0xb8, 0x98),
            c(0xff, 0xaa, 0xa5),
        ]),
    },
];

impl Theme {
    /// Look up a theme by name, silently falling back to `dark` when the
    /// name is unknown. An unknown theme is a leniency case, not an error.
    pub fn resolve(name: &str) -> &'static Theme {
        THEMES.iter().find(|t| t.name == name).unwrap_or(&THEMES[0])
    }
}

/// Target platforms and their canvas dimensions in pixels.
pub static PLATFORMS: [(&str, u32, u32); 7] = [
    ("instagram-post", 1080, 1080),
    ("instagram-carousel", 1080, 1350),
    ("instagram-story", 1080, 1920),
    ("facebook-post", 1200, 630),
    ("twitter-post", 1600, 900),
    ("linkedin-post", 1200, 627),
    ("og-image", 1200, 630),
];

/// Layouts the generator knows how to emit.
pub static LAYOUTS: [&str; 4] = ["article", "quote", "hero", "carousel"];

/// Dimensions for a platform name, if registered.
pub fn platform_dimensions(name: &str) -> Option<(u32, u32)> {
    PLATFORMS
        .iter()
        .find(|(p, _, _)| *p == name)
        .map(|&(_, w, h)| (w, h))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::palette::Role;

    #[test]
    fn test_resolve_known_themes() {
        for name in ["dark", "light", "ocean", "sunset", "forest"] {
            assert_eq!(Theme::resolve(name).name, name);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_dark() {
        assert_eq!(Theme::resolve("solarized").name, "dark");
        assert_eq!(Theme::resolve("").name, "dark");
    }

    #[test]
    fn test_dark_theme_values() {
        let dark = Theme::resolve("dark");
        assert_eq!(dark.palette.get(Role::Bg).to_hex(), "#0f0f0f");
        assert_eq!(dark.palette.get(Role::Primary).to_hex(), "#e94560");
        assert_eq!(dark.palette.get(Role::Highlight).to_hex(), "#ffd369");
    }

    #[test]
    fn test_platform_dimensions() {
        assert_eq!(platform_dimensions("instagram-post"), Some((1080, 1080)));
        assert_eq!(platform_dimensions("og-image"), Some((1200, 630)));
        assert_eq!(platform_dimensions("myspace-post"), None);
    }
}
