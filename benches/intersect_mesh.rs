use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use raycast::{
    Mesh, Plane, Ray, Scene, Shading, Sphere,
    geometry::{FloatType, WorldPoint, WorldVector},
};

const GRID: usize = 32;

/// Height field over [0, 1] x [0, 1] made of 2 * GRID * GRID triangles.
fn wavy_grid() -> Mesh {
    let vertices = (0..=GRID)
        .flat_map(|j| (0..=GRID).map(move |i| (i, j)))
        .map(|(i, j)| {
            let x = i as FloatType / GRID as FloatType;
            let y = j as FloatType / GRID as FloatType;
            WorldPoint::new(x, y, 0.05 * (10.0 * x).sin() * (10.0 * y).cos())
        })
        .collect();
    let index = |i: usize, j: usize| j * (GRID + 1) + i;
    let faces = (0..GRID)
        .flat_map(|j| (0..GRID).map(move |i| (i, j)))
        .flat_map(|(i, j)| {
            [
                [index(i, j), index(i + 1, j), index(i + 1, j + 1)],
                [index(i, j), index(i + 1, j + 1), index(i, j + 1)],
            ]
        })
        .collect();

    Mesh::new(vertices, faces, None).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mesh = wavy_grid();
    let mut scene = Scene::default();
    let material = scene.add_material(());
    scene.extend(mesh.triangles(material, Shading::Smooth));
    scene.add_shape(Sphere::new(WorldPoint::new(0.5, 0.5, 0.5), 0.2, material));
    scene.add_shape(Plane::new(
        WorldPoint::new(0.0, 0.0, -1.0),
        WorldVector::new(0.0, 0.0, 1.0),
        material,
    ));

    let rays: Vec<_> = (0..16)
        .flat_map(|j| (0..16).map(move |i| (i, j)))
        .map(|(i, j)| {
            Ray::new(
                WorldPoint::new(i as FloatType / 16.0, j as FloatType / 16.0, 2.0),
                WorldVector::new(0.01, 0.02, -1.0),
            )
        })
        .collect();

    c.bench_function("intersect_mesh", |b| {
        b.iter(|| {
            rays.iter()
                .filter(|ray| scene.intersect(ray, 0.0, FloatType::INFINITY).is_some())
                .count()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20).measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
