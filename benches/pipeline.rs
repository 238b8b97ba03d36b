//! Benchmarks for the rrss pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::RgbImage;

use rrss::extract::{MedianCutQuantizer, Quantizer};
use rrss::render::{apply_duotone, build_lut, render_noise_contour_svg, NoiseContourOptions};
use rrss::types::{Color, Palette};

/// A synthetic photo with smooth gradients and a few hard regions.
fn test_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        let b = if (x / 32 + y / 32) % 2 == 0 { 40 } else { 200 };
        image::Rgb([r, g, b])
    })
}

// -- Color math benchmarks --

fn bench_colors(c: &mut Criterion) {
    let mut group = c.benchmark_group("colors");

    let seed = Color::from_hex("#e94560").unwrap();

    group.bench_function("palette_from_seed", |b| {
        b.iter(|| Palette::from_seed(black_box(seed)))
    });

    group.bench_function("hsl_round_trip", |b| {
        b.iter(|| {
            let (h, s, l) = black_box(seed).to_hsl();
            Color::from_hsl(h, s, l)
        })
    });

    let dark = Color::from_hex("#0f0f0f").unwrap();
    let light = Color::from_hex("#e94560").unwrap();
    group.bench_function("build_lut", |b| {
        b.iter(|| build_lut(black_box(dark), black_box(light)))
    });

    group.finish();
}

// -- Image transform benchmarks --

fn bench_images(c: &mut Criterion) {
    let mut group = c.benchmark_group("images");
    group.sample_size(20);

    let img = test_image(640, 480);
    let dark = Color::from_hex("#0f0f0f").unwrap();
    let light = Color::from_hex("#e94560").unwrap();

    group.bench_function("apply_duotone_640x480", |b| {
        b.iter(|| apply_duotone(black_box(&img), dark, light, 0.7))
    });

    let quantizer = MedianCutQuantizer::default();
    group.bench_function("quantize_640x480", |b| {
        b.iter(|| quantizer.quantize(black_box(&img), 8))
    });

    let opts = NoiseContourOptions {
        width: 1080,
        height: 1080,
        scale: 4,
        levels: 15,
        seed: Some(7),
    };
    group.bench_function("noise_contours_1080", |b| {
        b.iter(|| render_noise_contour_svg(black_box(&opts)))
    });

    group.finish();
}

criterion_group!(benches, bench_colors, bench_images);
criterion_main!(benches);
