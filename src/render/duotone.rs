//! Duotone recoloring: map an image's luminance onto a two-color gradient
//! and blend the result with the original.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{imageops, RgbImage};

use crate::error::{Result, RrssError};
use crate::types::{Color, Role, Theme};

/// JPEG quality for photographic output.
const JPEG_QUALITY: u8 = 92;

/// Build the 256-entry luminance lookup table for a dark→light gradient.
///
/// Channel values are truncated, not rounded; the LUT is part of the
/// pinned output contract, same as the palette math.
pub fn build_lut(dark: Color, light: Color) -> [[u8; 3]; 256] {
    let dark = [f64::from(dark.r), f64::from(dark.g), f64::from(dark.b)];
    let light = [f64::from(light.r), f64::from(light.g), f64::from(light.b)];

    let mut lut = [[0u8; 3]; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let t = i as f64 / 255.0;
        *entry = [
            (dark[0] * (1.0 - t) + light[0] * t) as u8,
            (dark[1] * (1.0 - t) + light[1] * t) as u8,
            (dark[2] * (1.0 - t) + light[2] * t) as u8,
        ];
    }
    lut
}

/// Recolor an image with a theme's `bg`→`primary` duotone gradient.
///
/// Unknown theme names silently fall back to `dark` (the theme name still
/// appears in the derived output filename). `intensity` blends original
/// (0.0) and pure duotone (1.0); values outside `[0, 1]` are the caller's
/// responsibility to clamp.
///
/// Returns the path the result was written to. Without an explicit
/// `output`, writes `<stem>_<theme>.<ext>` next to the source.
pub fn recolor_image(
    path: &Path,
    theme_name: &str,
    output: Option<&Path>,
    intensity: f64,
) -> Result<PathBuf> {
    let theme = Theme::resolve(theme_name);
    let dark = theme.palette.get(Role::Bg);
    let light = theme.palette.get(Role::Primary);

    let img = image::open(path)
        .map_err(|e| RrssError::ImageUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let result = apply_duotone(&img, dark, light, intensity);

    let out_path = match output {
        Some(p) => p.to_path_buf(),
        None => derived_output_path(path, theme_name),
    };
    save_photo(&result, &out_path)?;
    Ok(out_path)
}

/// Apply the duotone gradient to `img` and blend by `intensity`.
pub fn apply_duotone(img: &RgbImage, dark: Color, light: Color, intensity: f64) -> RgbImage {
    let lut = build_lut(dark, light);
    let gray = imageops::grayscale(img);

    let mut out = RgbImage::new(img.width(), img.height());
    for (pixel, (original, luma)) in out
        .pixels_mut()
        .zip(img.pixels().zip(gray.pixels()))
    {
        let duotone = lut[luma.0[0] as usize];
        for channel in 0..3 {
            let orig = f64::from(original.0[channel]);
            let duo = f64::from(duotone[channel]);
            pixel.0[channel] = (orig * (1.0 - intensity) + duo * intensity).round() as u8;
        }
    }
    out
}

fn derived_output_path(source: &Path, theme_name: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = source
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");
    source.with_file_name(format!("{}_{}.{}", stem, theme_name, ext))
}

/// Write a photographic image: JPEG at quality 92 for `.jpg`/`.jpeg`
/// outputs, whatever the extension says otherwise.
fn save_photo(img: &RgbImage, path: &Path) -> Result<()> {
    let is_jpeg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            let e = e.to_ascii_lowercase();
            e == "jpg" || e == "jpeg"
        });

    if is_jpeg {
        let file = File::create(path).map_err(|e| RrssError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to create output: {}", e),
        })?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
        img.write_with_encoder(encoder).map_err(|e| RrssError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write JPEG: {}", e),
        })?;
    } else {
        img.save(path).map_err(|e| RrssError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write image: {}", e),
        })?;
    }
    Ok(())
}
