//! Dominant-color extraction and accent suggestion.
//!
//! Pixel clustering is behind the [`Quantizer`] trait so the scoring and
//! derivation logic here stays testable with hand-built clusters, and the
//! actual algorithm (median-cut today) can be swapped without touching
//! callers.

pub mod median_cut;

use std::path::Path;

use image::RgbImage;

use crate::error::{Result, RrssError};
use crate::types::Color;

pub use median_cut::MedianCutQuantizer;

/// Accent returned when an image yields no colors at all.
pub const FALLBACK_ACCENT: &str = "#4a3f6b";

/// One cluster from a quantizer: a representative color and the share of
/// sampled pixels nearest to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCluster {
    pub rgb: [u8; 3],
    pub proportion: f64,
}

/// Pixel clustering capability. Implementations return clusters ranked by
/// descending proportion; by convention index 0 is usually a flat
/// background color.
pub trait Quantizer {
    fn quantize(&self, image: &RgbImage, count: usize) -> Vec<ColorCluster>;
}

/// A ranked representative color of an image.
#[derive(Debug, Clone, PartialEq)]
pub struct DominantColor {
    pub hex: String,
    pub rgb: [u8; 3],
    /// (hue, saturation, lightness) rounded to (1, 3, 3) decimals.
    pub hsl: (f64, f64, f64),
    /// Fraction of sampled pixels in this cluster, rounded to 4 decimals.
    pub proportion: f64,
}

/// Extract the `count` dominant colors of the image at `path`, ranked as
/// the quantizer produced them.
pub fn extract_colors(
    path: &Path,
    count: usize,
    quantizer: &dyn Quantizer,
) -> Result<Vec<DominantColor>> {
    let img = open_rgb(path)?;
    Ok(extract_colors_from(&img, count, quantizer))
}

/// Same as [`extract_colors`] for an already-decoded image.
pub fn extract_colors_from(
    image: &RgbImage,
    count: usize,
    quantizer: &dyn Quantizer,
) -> Vec<DominantColor> {
    quantizer
        .quantize(image, count)
        .into_iter()
        .map(|cluster| {
            let [r, g, b] = cluster.rgb;
            let color = Color::rgb(r, g, b);
            let (h, s, l) = color.to_hsl();
            DominantColor {
                hex: color.to_hex(),
                rgb: cluster.rgb,
                hsl: (round_to(h, 1), round_to(s, 3), round_to(l, 3)),
                proportion: round_to(cluster.proportion, 4),
            }
        })
        .collect()
}

/// Suggest the best accent color for the image at `path`: the most
/// saturated, mid-lightness dominant color.
pub fn suggest_accent(path: &Path, quantizer: &dyn Quantizer) -> Result<String> {
    let colors = extract_colors(path, 12, quantizer)?;
    Ok(pick_accent(&colors))
}

/// Score extracted colors and pick the accent.
///
/// Near-black, near-white and desaturated colors are poor accent
/// candidates and get filtered first. The lightness term peaks at l = 0.4
/// and goes negative outside roughly [0, 0.8] without further clamping;
/// the tie-break on equal scores is the lexicographically greatest hex.
/// Both quirks are kept as-is for output compatibility.
pub fn pick_accent(colors: &[DominantColor]) -> String {
    if colors.is_empty() {
        return FALLBACK_ACCENT.to_string();
    }

    let mut scored: Vec<(f64, &str)> = Vec::new();
    for c in colors {
        let (_, s, l) = c.hsl;
        if l < 0.08 || l > 0.92 || s < 0.05 {
            continue;
        }
        let lum_score = 1.0 - (l - 0.4).abs() * 2.0;
        let score = s * 0.6 + lum_score * 0.3 + c.proportion * 0.1;
        scored.push((score, &c.hex));
    }

    if scored.is_empty() {
        // Everything was filtered: prefer the second-ranked dominant color,
        // since index 0 is usually a flat background.
        return colors[1.min(colors.len() - 1)].hex.clone();
    }

    scored.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    scored[0].1.to_string()
}

fn open_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| RrssError::ImageUnreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgb8())
}

fn round_to(v: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (v * p).round() / p
}
