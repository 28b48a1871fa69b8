use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trigon::clipper::{self, MAX_CLIPPED_VERTICES};
use trigon::math::{Mat4, Vec3, Vec4};
use trigon::{color, mesh, pipeline, rasterizer};
use trigon::{ClipVertex, FrameBuffer, ScreenTriangle, ScreenVertex};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn clip_vert(x: f32, y: f32, z: f32, w: f32) -> ClipVertex {
    ClipVertex::new(Vec4::new(x, y, z, w), color::WHITE)
}

fn screen_triangle(scale: f32) -> ScreenTriangle {
    ScreenTriangle::new([
        ScreenVertex::new(Vec4::new(100.0, 100.0, 0.5, 1.0), color::RED),
        ScreenVertex::new(Vec4::new(100.0 + scale, 100.0, 0.5, 2.0), color::GREEN),
        ScreenVertex::new(Vec4::new(100.0 + scale / 2.0, 100.0 + scale, 0.5, 3.0), color::BLUE),
    ])
}

fn benchmark_clipper(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_triangle");

    let inside = [
        clip_vert(-0.3, -0.3, 0.0, 1.0),
        clip_vert(0.3, -0.3, 0.0, 1.0),
        clip_vert(0.0, 0.3, 0.0, 1.0),
    ];
    let straddling = [
        clip_vert(-2.0, -2.0, 0.0, 1.0),
        clip_vert(2.0, -2.0, 0.0, 1.0),
        clip_vert(0.0, 2.0, 0.0, 1.0),
    ];

    for (name, triangle) in [("trivial_accept", inside), ("six_plane", straddling)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &triangle, |b, tri| {
            b.iter(|| {
                let mut output = [tri[0]; MAX_CLIPPED_VERTICES];
                clipper::clip_triangle(black_box(tri), &mut output)
            });
        });
    }

    group.finish();
}

fn benchmark_fill_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_triangle");

    for (name, scale) in [("small", 20.0), ("medium", 200.0), ("large", 480.0)] {
        let triangle = screen_triangle(scale);
        group.bench_with_input(BenchmarkId::from_parameter(name), &triangle, |b, tri| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                fb.clear();
                rasterizer::fill_triangle(black_box(tri), &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_render_cube(c: &mut Criterion) {
    let triangles = mesh::cube();
    let model = Mat4::rotation_y(0.65) * Mat4::rotation_x(0.35);
    let view = Mat4::look_at(
        Vec3::new(0.0, 0.0, 6.0),
        Vec3::ZERO,
        Vec3::new(0.0, 1.0, 0.0),
    );
    let projection = Mat4::perspective(
        45.0_f32.to_radians(),
        BUFFER_WIDTH as f32 / BUFFER_HEIGHT as f32,
        0.1,
        100.0,
    );

    c.bench_function("render_cube", |b| {
        let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            fb.clear();
            pipeline::render(black_box(&triangles), &model, &view, &projection, &mut fb);
        });
    });
}

criterion_group!(
    benches,
    benchmark_clipper,
    benchmark_fill_triangle,
    benchmark_render_cube
);
criterion_main!(benches);
