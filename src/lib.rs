//! rrss - Themed social media image generator
//!
//! A library for deriving color schemes, recoloring photos, and generating
//! contour-line backgrounds and Typst documents for social media posts.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod render;
pub mod template;
pub mod types;

pub use config::{BatchConfig, PostEntry, ResolvedPost, DEFAULT_ACCENT};
pub use error::{Result, RrssError};
pub use extract::{
    extract_colors, pick_accent, suggest_accent, ColorCluster, DominantColor, MedianCutQuantizer,
    Quantizer, FALLBACK_ACCENT,
};
pub use render::{
    apply_duotone, build_lut, generate_edge_contours, generate_noise_contours, recolor_image,
    render_noise_contour_svg, NoiseContourOptions,
};
pub use template::{DocumentSpec, Layout};
pub use types::{platform_dimensions, Color, Palette, Role, Theme, LAYOUTS, PLATFORMS, THEMES};
