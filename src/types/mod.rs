//! Core value types: colors, palettes, themes.

pub mod color;
pub mod palette;
pub mod theme;

pub use color::{clamp, Color};
pub use palette::{Palette, Role};
pub use theme::{platform_dimensions, Theme, LAYOUTS, PLATFORMS, THEMES};
