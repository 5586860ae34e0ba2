use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use scene_editor::app::use_cases::selection::{entities_within, pick_entity};
use scene_editor::core::{Entity, RendererComponent};
use scene_editor::{Rect, Scene};
use std::hint::black_box;

fn build_synthetic_scene(entity_count: usize) -> Scene {
    let mut scene = Scene::new("bench");

    for index in 0..entity_count {
        let column = (index % 100) as f32;
        let row = (index / 100) as f32;
        let mut renderer = RendererComponent::new(Rect::new(0.0, 0.0, 16.0, 16.0));
        renderer.rotation_deg = (index % 4) as f32 * 15.0;
        renderer.z_index = (index % 3) as i32;
        let entity = if index % 5 == 0 {
            Entity::new(format!("marker {index}"))
                .with_transform(Vec2::new(column * 20.0, row * 20.0))
        } else {
            Entity::new(format!("sprite {index}"))
                .with_transform(Vec2::new(column * 20.0, row * 20.0))
                .with_renderer(renderer)
        };
        scene.insert(entity);
    }

    scene
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 2000) as f32 + 0.37;
            let y = ((i * 53) % 2000) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_point_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_pick");

    for &entity_count in &[1_000usize, 10_000usize] {
        let scene = build_synthetic_scene(entity_count);
        let query_points = build_query_points(256);

        group.bench_with_input(
            BenchmarkId::new("pick_batch", entity_count),
            &scene,
            |b, scene| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if pick_entity(scene, black_box(*point), false).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_rect_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_selection");

    for &entity_count in &[1_000usize, 10_000usize] {
        let scene = build_synthetic_scene(entity_count);
        let zone = Rect::from_drag(Vec2::new(480.0, 320.0), Vec2::new(90.0, 40.0));

        group.bench_with_input(
            BenchmarkId::new("drag_zone", entity_count),
            &scene,
            |b, scene| b.iter(|| black_box(entities_within(scene, black_box(zone)).len())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_point_pick, bench_rect_selection);
criterion_main!(benches);
