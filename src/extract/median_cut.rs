//! Default quantizer: deterministic median-cut over sampled pixels.
//!
//! Good enough for "what are the main colors here" questions without
//! pulling in a full clustering dependency; anything fancier can slot in
//! behind the [`Quantizer`](super::Quantizer) trait.

use image::RgbImage;

use super::{ColorCluster, Quantizer};

/// Median-cut color quantizer.
///
/// Pixels are sampled with an even stride capped at `max_samples`, split
/// into boxes along the channel with the widest range, and each final box
/// is reported as its mean color with its pixel share. Fully
/// deterministic: the same image always yields the same clusters in the
/// same order. Boxes split at the largest value gap on the sort channel,
/// so a box never straddles two well-separated colors.
#[derive(Debug, Clone)]
pub struct MedianCutQuantizer {
    pub max_samples: usize,
}

impl Default for MedianCutQuantizer {
    fn default() -> Self {
        Self { max_samples: 1 << 16 }
    }
}

impl Quantizer for MedianCutQuantizer {
    fn quantize(&self, image: &RgbImage, count: usize) -> Vec<ColorCluster> {
        if count == 0 {
            return Vec::new();
        }

        let samples = self.sample(image);
        if samples.is_empty() {
            return Vec::new();
        }
        let total = samples.len() as f64;

        let mut boxes: Vec<Vec<[u8; 3]>> = vec![samples];
        while boxes.len() < count {
            let Some(widest) = widest_splittable_box(&boxes) else {
                break;
            };
            let (channel, _) = widest_channel(&boxes[widest]);
            let mut pixels = boxes.swap_remove(widest);
            pixels.sort_by_key(|p| p[channel]);
            let upper = pixels.split_off(split_index(&pixels, channel));
            boxes.push(pixels);
            boxes.push(upper);
        }

        let mut clusters: Vec<ColorCluster> = boxes
            .iter()
            .map(|pixels| ColorCluster {
                rgb: mean_color(pixels),
                proportion: pixels.len() as f64 / total,
            })
            .collect();

        // Rank by descending share; ties ordered by color for determinism
        clusters.sort_by(|a, b| {
            b.proportion
                .partial_cmp(&a.proportion)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.rgb.cmp(&b.rgb))
        });
        clusters
    }
}

impl MedianCutQuantizer {
    fn sample(&self, image: &RgbImage) -> Vec<[u8; 3]> {
        let total = (image.width() as usize) * (image.height() as usize);
        if total == 0 {
            return Vec::new();
        }
        let stride = (total / self.max_samples).max(1);
        image
            .pixels()
            .step_by(stride)
            .map(|p| p.0)
            .collect()
    }
}

/// Split point for a box sorted on `channel`: just after the largest gap
/// between adjacent values. A pixel-count median can land inside a solid
/// run and merge two distinct colors into one box; the gap cannot. Falls
/// back to the midpoint for the all-equal case (unreachable from
/// [`widest_splittable_box`], which requires a nonzero range).
fn split_index(pixels: &[[u8; 3]], channel: usize) -> usize {
    let mut best_gap = 0u8;
    let mut index = pixels.len() / 2;
    for i in 1..pixels.len() {
        let gap = pixels[i][channel] - pixels[i - 1][channel];
        if gap > best_gap {
            best_gap = gap;
            index = i;
        }
    }
    index
}

/// Index of the box worth splitting: largest channel range, at least two
/// pixels. `None` when every box is a single color.
fn widest_splittable_box(boxes: &[Vec<[u8; 3]>]) -> Option<usize> {
    boxes
        .iter()
        .enumerate()
        .filter(|(_, pixels)| pixels.len() > 1)
        .map(|(i, pixels)| (i, widest_channel(pixels).1))
        .filter(|&(_, range)| range > 0)
        .max_by_key(|&(_, range)| range)
        .map(|(i, _)| i)
}

/// The channel (0=r, 1=g, 2=b) with the widest min..max range in the box.
fn widest_channel(pixels: &[[u8; 3]]) -> (usize, u8) {
    let mut best = (0, 0u8);
    for channel in 0..3 {
        let min = pixels.iter().map(|p| p[channel]).min().unwrap_or(0);
        let max = pixels.iter().map(|p| p[channel]).max().unwrap_or(0);
        let range = max - min;
        if range > best.1 {
            best = (channel, range);
        }
    }
    best
}

fn mean_color(pixels: &[[u8; 3]]) -> [u8; 3] {
    let n = pixels.len() as f64;
    let mut sums = [0f64; 3];
    for p in pixels {
        for channel in 0..3 {
            sums[channel] += f64::from(p[channel]);
        }
    }
    [
        (sums[0] / n).round() as u8,
        (sums[1] / n).round() as u8,
        (sums[2] / n).round() as u8,
    ]
}
