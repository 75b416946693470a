use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geosphere_biome::{Planet, PlanetSettings, land_rng};
use geosphere_render::*;

fn planet(detail: u32) -> Planet {
    let settings = PlanetSettings {
        detail,
        ..PlanetSettings::default()
    };
    Planet::generate(&settings, &mut land_rng(Some(1))).unwrap()
}

fn bench_record_frame(c: &mut Criterion) {
    let planet = planet(3);
    let mut renderer = FrameRenderer::new();
    let mut surface = RecordingSurface::new(800.0, 600.0);
    let options = RenderOptions::default();
    c.bench_function("record_frame_detail_3", |bencher| {
        bencher.iter(|| {
            surface.clear();
            renderer.render(&mut surface, &planet, black_box(0.5), &options)
        })
    });
}

fn bench_raster_frame(c: &mut Criterion) {
    let planet = planet(3);
    let mut renderer = FrameRenderer::new();
    let mut canvas = PixelCanvas::new(800, 600);
    let options = RenderOptions {
        show_wireframe: true,
        ..RenderOptions::default()
    };
    c.bench_function("raster_frame_detail_3_wireframe", |bencher| {
        bencher.iter(|| renderer.render(&mut canvas, &planet, black_box(0.5), &options))
    });
}

fn bench_unique_edges(c: &mut Criterion) {
    let planet = planet(4);
    c.bench_function("unique_edges_detail_4", |bencher| {
        bencher.iter(|| unique_edges(black_box(planet.faces())))
    });
}

criterion_group!(
    benches,
    bench_record_frame,
    bench_raster_frame,
    bench_unique_edges
);
criterion_main!(benches);
