//! Benchmarks for the software raster path.
//!
//! Run with: cargo bench -p circlet-render --bench pixmap_bench

use std::hint::black_box;
use std::sync::Arc;

use circlet_core::geometry::Rect;
use circlet_render::pixmap::Pixmap;
use circlet_render::sampler::sample_center_crop;
use circlet_render::surface::{Fill, Stroke, Surface};
use circlet_style::Argb;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};

fn bench_fill_and_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixmap/oval");

    for side in [40u32, 120, 480] {
        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));
        let rect = Rect::from_size(side, side);

        group.bench_with_input(BenchmarkId::new("fill_solid", side), &rect, |b, rect| {
            let mut p = Pixmap::new(side, side);
            b.iter(|| {
                p.fill_oval(*rect, &Fill::Solid(Argb::rgb(0x7B, 0xC8, 0x62)));
                black_box(&p);
            });
        });

        let tex = Arc::new(RgbaImage::from_pixel(side, side, Rgba([10, 20, 30, 255])));
        group.bench_with_input(BenchmarkId::new("fill_texture", side), &rect, |b, rect| {
            let mut p = Pixmap::new(side, side);
            let fill = Fill::Texture(Arc::clone(&tex));
            b.iter(|| {
                p.fill_oval(*rect, &fill);
                black_box(&p);
            });
        });

        group.bench_with_input(BenchmarkId::new("stroke", side), &rect, |b, rect| {
            let mut p = Pixmap::new(side, side);
            let stroke = Stroke {
                width: 6.0,
                color: Argb::WHITE,
            };
            b.iter(|| {
                p.stroke_oval(rect.inset(3, 3), stroke);
                black_box(&p);
            });
        });
    }

    group.finish();
}

fn bench_center_crop(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler/center_crop");
    let src = RgbaImage::from_fn(1024, 512, |x, y| Rgba([x as u8, y as u8, 0, 255]));

    for side in [40u32, 120, 480] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter(|| black_box(sample_center_crop(&src, side, side)));
        });
    }

    let strip = RgbaImage::from_fn(20_000, 1, |x, _| Rgba([x as u8, 0, 0, 255]));
    group.bench_function("strip_20000x1", |b| {
        b.iter(|| black_box(sample_center_crop(&strip, 480, 480)));
    });

    group.finish();
}

criterion_group!(benches, bench_fill_and_stroke, bench_center_crop);
criterion_main!(benches);
