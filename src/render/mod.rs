//! Image transforms: duotone recoloring and contour generation.

pub mod contour;
pub mod duotone;
pub mod noise;

pub use contour::generate_edge_contours;
pub use duotone::{apply_duotone, build_lut, recolor_image};
pub use noise::{generate_noise_contours, render_noise_contour_svg, NoiseContourOptions};
