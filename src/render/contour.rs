//! Edge-detection contours: turn a photo into white line art on a
//! transparent field, ready to composite over any themed background.

use std::path::{Path, PathBuf};

use image::{imageops, GrayImage, LumaA};

use crate::error::{Result, RrssError};

/// Blur radius applied before edge detection to suppress fine texture.
const BLUR_SIGMA: f32 = 1.5;

/// Edge intensities at or below this are treated as noise. Strictly
/// greater-than: 31 is a line, 30 is not. Raising it yields fewer,
/// bolder lines.
const EDGE_THRESHOLD: u8 = 30;

/// 3x3 Laplacian kernel for edge intensity.
const EDGE_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];

/// Generate a line-art contour image from the photo at `path`.
///
/// The output encodes the lines in its alpha channel: opaque white where
/// an edge exists, fully transparent elsewhere. Written as
/// `<stem>_contour.png` beside the source (always PNG, for the alpha).
pub fn generate_edge_contours(path: &Path) -> Result<PathBuf> {
    let img = image::open(path).map_err(|e| RrssError::ImageUnreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let gray = img.to_luma8();
    let blurred = imageops::blur(&gray, BLUR_SIGMA);
    let edges = imageops::filter3x3(&blurred, &EDGE_KERNEL);
    let mask = threshold_mask(&edges, EDGE_THRESHOLD);

    let result = compose_white_with_alpha(&mask);

    let out_path = contour_output_path(path);
    result.save(&out_path).map_err(|e| RrssError::Io {
        path: out_path.clone(),
        message: format!("Failed to write PNG: {}", e),
    })?;
    Ok(out_path)
}

/// Binarize an edge-intensity map: strictly above `cutoff` becomes 255,
/// everything else 0.
pub fn threshold_mask(edges: &GrayImage, cutoff: u8) -> GrayImage {
    let mut mask = GrayImage::new(edges.width(), edges.height());
    for (out, px) in mask.pixels_mut().zip(edges.pixels()) {
        out.0[0] = if px.0[0] > cutoff { 255 } else { 0 };
    }
    mask
}

/// Solid white color layer with the mask as its alpha channel.
fn compose_white_with_alpha(mask: &GrayImage) -> image::ImageBuffer<LumaA<u8>, Vec<u8>> {
    let mut out = image::ImageBuffer::new(mask.width(), mask.height());
    for (pixel, alpha) in out.pixels_mut().zip(mask.pixels()) {
        *pixel = LumaA([255, alpha.0[0]]);
    }
    out
}

fn contour_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    source.with_file_name(format!("{}_contour.png", stem))
}

#[cfg(test)]
mod tests {
    use image::Luma;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_threshold_is_strictly_greater() {
        let mut edges = GrayImage::new(3, 1);
        edges.put_pixel(0, 0, Luma([30])); // at the cutoff: no edge
        edges.put_pixel(1, 0, Luma([31])); // just above: edge
        edges.put_pixel(2, 0, Luma([0]));

        let mask = threshold_mask(&edges, EDGE_THRESHOLD);
        assert_eq!(mask.get_pixel(0, 0).0[0], 0);
        assert_eq!(mask.get_pixel(1, 0).0[0], 255);
        assert_eq!(mask.get_pixel(2, 0).0[0], 0);
    }

    #[test]
    fn test_mask_is_binary() {
        let mut edges = GrayImage::new(16, 16);
        for (x, y, px) in edges.enumerate_pixels_mut() {
            px.0[0] = ((x * 16 + y) % 256) as u8;
        }
        for px in threshold_mask(&edges, EDGE_THRESHOLD).pixels() {
            assert!(px.0[0] == 0 || px.0[0] == 255);
        }
    }

    #[test]
    fn test_contours_of_hard_edge() {
        // Half black, half white: the boundary must produce opaque lines,
        // the flat interiors must stay transparent.
        let dir = tempdir().unwrap();
        let source = dir.path().join("split.png");
        let mut img = GrayImage::new(64, 64);
        for (x, _, px) in img.enumerate_pixels_mut() {
            px.0[0] = if x < 32 { 0 } else { 255 };
        }
        img.save(&source).unwrap();

        let out = generate_edge_contours(&source).unwrap();
        assert_eq!(out, dir.path().join("split_contour.png"));

        let result = image::open(&out).unwrap().to_luma_alpha8();
        // Color layer is solid white everywhere
        assert!(result.pixels().all(|p| p.0[0] == 255));
        // Edge column is opaque, far corners are transparent
        assert_eq!(result.get_pixel(32, 32).0[1], 255);
        assert_eq!(result.get_pixel(2, 2).0[1], 0);
        assert_eq!(result.get_pixel(61, 61).0[1], 0);
    }

    #[test]
    fn test_flat_image_has_no_contours() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("flat.png");
        GrayImage::from_pixel(32, 32, Luma([128]))
            .save(&source)
            .unwrap();

        let out = generate_edge_contours(&source).unwrap();
        let result = image::open(&out).unwrap().to_luma_alpha8();
        assert!(result.pixels().all(|p| p.0[1] == 0));
    }

    #[test]
    fn test_unreadable_source() {
        let err = generate_edge_contours(Path::new("/nonexistent.jpg")).unwrap_err();
        assert!(matches!(err, RrssError::ImageUnreadable { .. }));
    }
}
