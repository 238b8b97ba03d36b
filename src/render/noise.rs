//! Synthetic contour lines from filtered noise.
//!
//! The generative fallback for when a contour background is wanted but no
//! photo exists: a low-resolution field of gaussian noise is smoothed into
//! soft "terrain", and its iso-lines are traced into a transparent SVG of
//! faint white strokes.

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::{Result, RrssError};

/// Stroke styling for the traced iso-lines.
const STROKE_OPACITY: &str = "0.3";
const STROKE_WIDTH: &str = "1.5";

/// Parameters for [`generate_noise_contours`].
#[derive(Debug, Clone, Copy)]
pub struct NoiseContourOptions {
    /// Output canvas width in pixels.
    pub width: u32,
    /// Output canvas height in pixels.
    pub height: u32,
    /// Undulation density: larger values mean tighter, more numerous
    /// contours; smaller values broader, sparser ones.
    pub scale: u32,
    /// Number of iso-contour lines.
    pub levels: usize,
    /// Seed for reproducible output. `Some(seed)` makes two runs
    /// bit-identical; `None` draws from entropy with no such guarantee.
    pub seed: Option<u64>,
}

impl Default for NoiseContourOptions {
    fn default() -> Self {
        Self {
            width: 3240,
            height: 1350,
            scale: 4,
            levels: 15,
            seed: None,
        }
    }
}

/// Generate a transparent contour-line SVG at `output`.
pub fn generate_noise_contours(output: &Path, opts: &NoiseContourOptions) -> Result<PathBuf> {
    let svg = render_noise_contour_svg(opts);
    fs::write(output, svg).map_err(|e| RrssError::Io {
        path: output.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })?;
    Ok(output.to_path_buf())
}

/// Build the SVG document in memory. Deterministic for a fixed seed.
pub fn render_noise_contour_svg(opts: &NoiseContourOptions) -> String {
    // The field lives at 1/10 resolution per dimension
    let low_w = ((opts.width / 10).max(2)) as usize;
    let low_h = ((opts.height / 10).max(2)) as usize;

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut field = vec![vec![0.0f64; low_w]; low_h];
    for row in &mut field {
        for value in row.iter_mut() {
            *value = rng.sample(StandardNormal);
        }
    }

    let sigma = low_w.max(low_h) as f64 / f64::from(opts.scale.max(1));
    let smooth = gaussian_smooth(&field, sigma);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = opts.width,
        h = opts.height,
    ));
    svg.push_str(&format!(
        "<g fill=\"none\" stroke=\"#ffffff\" stroke-opacity=\"{}\" stroke-width=\"{}\">\n",
        STROKE_OPACITY, STROKE_WIDTH,
    ));

    // Map field grid coordinates onto the full canvas
    let sx = f64::from(opts.width) / (low_w - 1) as f64;
    let sy = f64::from(opts.height) / (low_h - 1) as f64;

    for level in iso_levels(&smooth, opts.levels) {
        let segments = march_segments(&smooth, level);
        if segments.is_empty() {
            continue;
        }
        let mut d = String::new();
        for ((x1, y1), (x2, y2)) in segments {
            d.push_str(&format!(
                "M{:.2} {:.2} L{:.2} {:.2} ",
                x1 * sx,
                y1 * sy,
                x2 * sx,
                y2 * sy,
            ));
        }
        svg.push_str(&format!("<path d=\"{}\"/>\n", d.trim_end()));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Evenly spaced iso-levels strictly between the field's min and max.
fn iso_levels(field: &[Vec<f64>], levels: usize) -> Vec<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in field {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || max <= min {
        return Vec::new();
    }
    let step = (max - min) / (levels + 1) as f64;
    (1..=levels).map(|i| min + step * i as f64).collect()
}

/// Separable gaussian blur with reflected boundaries.
fn gaussian_smooth(field: &[Vec<f64>], sigma: f64) -> Vec<Vec<f64>> {
    let h = field.len();
    let w = field.first().map_or(0, Vec::len);
    if h == 0 || w == 0 || sigma <= 0.0 {
        return field.to_vec();
    }

    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;

    // Horizontal pass
    let mut horiz = vec![vec![0.0f64; w]; h];
    for (y, row) in field.iter().enumerate() {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let src = reflect(x as isize + k as isize - radius, w as isize);
                acc += row[src] * weight;
            }
            horiz[y][x] = acc;
        }
    }

    // Vertical pass
    let mut out = vec![vec![0.0f64; w]; h];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let src = reflect(y as isize + k as isize - radius, h as isize);
                acc += horiz[src][x] * weight;
            }
            out[y][x] = acc;
        }
    }
    out
}

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (sigma * 3.0).ceil().max(1.0) as isize;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|k| (-(k * k) as f64 / (2.0 * sigma * sigma)).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Reflect an index into `[0, n)`, mirroring about the array edges.
fn reflect(i: isize, n: isize) -> usize {
    let period = 2 * n;
    let mut i = i.rem_euclid(period);
    if i >= n {
        i = period - 1 - i;
    }
    i as usize
}

/// Marching-squares line segments of one iso-level, in grid coordinates
/// (x = column, y = row).
pub fn march_segments(field: &[Vec<f64>], level: f64) -> Vec<((f64, f64), (f64, f64))> {
    let h = field.len();
    let w = field.first().map_or(0, Vec::len);
    let mut segments = Vec::new();
    if h < 2 || w < 2 {
        return segments;
    }

    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let tl = field[y][x];
            let tr = field[y][x + 1];
            let bl = field[y + 1][x];
            let br = field[y + 1][x + 1];

            let mut case = 0u8;
            if tl >= level {
                case |= 8;
            }
            if tr >= level {
                case |= 4;
            }
            if br >= level {
                case |= 2;
            }
            if bl >= level {
                case |= 1;
            }
            if case == 0 || case == 15 {
                continue;
            }

            let xf = x as f64;
            let yf = y as f64;
            let top = (xf + interp(tl, tr, level), yf);
            let right = (xf + 1.0, yf + interp(tr, br, level));
            let bottom = (xf + interp(bl, br, level), yf + 1.0);
            let left = (xf, yf + interp(tl, bl, level));

            match case {
                1 | 14 => segments.push((left, bottom)),
                2 | 13 => segments.push((bottom, right)),
                3 | 12 => segments.push((left, right)),
                4 | 11 => segments.push((top, right)),
                6 | 9 => segments.push((top, bottom)),
                7 | 8 => segments.push((top, left)),
                5 => {
                    segments.push((left, bottom));
                    segments.push((top, right));
                }
                10 => {
                    segments.push((left, top));
                    segments.push((bottom, right));
                }
                _ => unreachable!(),
            }
        }
    }
    segments
}

/// Fraction of the way from `a` to `b` where `level` crosses.
fn interp(a: f64, b: f64, level: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        0.5
    } else {
        ((level - a) / span).clamp(0.0, 1.0)
    }
}
