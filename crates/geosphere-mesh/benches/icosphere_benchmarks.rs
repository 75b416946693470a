use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geosphere_mesh::*;

fn bench_build_detail_3(c: &mut Criterion) {
    c.bench_function("build_mesh_detail_3", |bencher| {
        bencher.iter(|| build_mesh(black_box(3), black_box(180.0)))
    });
}

fn bench_build_detail_5(c: &mut Criterion) {
    c.bench_function("build_mesh_detail_5", |bencher| {
        bencher.iter(|| build_mesh(black_box(5), black_box(180.0)))
    });
}

fn bench_face_centroids(c: &mut Criterion) {
    let mesh = build_mesh(4, 180.0).unwrap();
    c.bench_function("face_centroids_detail_4", |bencher| {
        bencher.iter(|| {
            (0..mesh.face_count())
                .map(|i| mesh.face_centroid(i))
                .fold(glam::DVec3::ZERO, |acc, c| acc + c)
        })
    });
}

criterion_group!(
    benches,
    bench_build_detail_3,
    bench_build_detail_5,
    bench_face_centroids
);
criterion_main!(benches);
