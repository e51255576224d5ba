//! Benchmark für den Render-Pass.
//!
//! Misst die Kosten pro Frame bei wachsender Kartengröße und Akteurzahl:
//! - render_scene: kompletter Pass in ein RecordingCanvas
//! - compute_bounds: Bounds über alle Punkte

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use sim_map_viewer::{
    compute_bounds, render_scene, ActorSnapshot, GeoMap, MapLine, MapStore, RecordingCanvas,
    RenderScene, ViewerOptions, ViewportState,
};
use std::hint::black_box;
use std::sync::Arc;

/// Baut eine Karte mit `point_count` Punkten auf einer Zickzack-Linie.
fn build_map(point_count: usize) -> GeoMap {
    let points: Vec<DVec2> = (0..point_count)
        .map(|i| {
            let x = (i % 1000) as f64 * 2.5;
            let y = (i / 1000) as f64 * 40.0 + (i as f64 * 0.37).sin() * 5.0;
            DVec2::new(x, y)
        })
        .collect();
    let lines = points
        .chunks(50)
        .enumerate()
        .filter(|(_, chunk)| chunk.len() >= 2)
        .map(|(n, chunk)| {
            let start = n * 50;
            MapLine::new((start..start + chunk.len()).collect())
        })
        .collect();
    GeoMap::new("bench", points, lines, "lightGray")
}

fn build_actors(count: usize) -> Vec<ActorSnapshot> {
    const PREFIXES: [&str; 4] = ["Car", "Ped", "Tram", "Bus"];
    (0..count)
        .map(|i| {
            ActorSnapshot::new(
                format!("{}_{}", PREFIXES[i % PREFIXES.len()], i),
                DVec2::new((i % 500) as f64 * 5.0, (i / 500) as f64 * 10.0),
            )
        })
        .collect()
}

fn build_scene(point_count: usize, actor_count: usize) -> RenderScene {
    let map = build_map(point_count);
    let bounds = compute_bounds([&map]).ok();
    let maps = MapStore::from_maps([map]).ok().map(Arc::new);
    let mut options = ViewerOptions::default();
    options.visibility.show_actor_labels = true;

    RenderScene {
        maps,
        actors: build_actors(actor_count),
        viewport: ViewportState {
            bounds,
            ..ViewportState::new()
        },
        surface_size: DVec2::new(1280.0, 720.0),
        cursor: Some(DVec2::new(640.0, 360.0)),
        options,
    }
}

/// Misst: kompletter Render-Pass (Karten + Akteure + Overlays)
fn bench_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");

    for &(point_count, actor_count) in &[(1_000usize, 100usize), (10_000, 1_000), (100_000, 5_000)]
    {
        let scene = build_scene(point_count, actor_count);
        let mut canvas = RecordingCanvas::new();

        group.bench_with_input(
            BenchmarkId::new("points_actors", format!("{point_count}_{actor_count}")),
            &scene,
            |b, scene| {
                b.iter(|| {
                    canvas.clear();
                    let report = render_scene(&mut canvas, black_box(scene));
                    black_box(report.map(|r| r.counts.total()).unwrap_or_default())
                })
            },
        );
    }

    group.finish();
}

/// Misst: Bounds über alle Punkte (einmal pro Kartenladen)
fn bench_compute_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_bounds");

    for &point_count in &[1_000usize, 100_000] {
        let map = build_map(point_count);

        group.bench_with_input(
            BenchmarkId::new("points", point_count),
            &map,
            |b, map| b.iter(|| black_box(compute_bounds([black_box(map)]).ok())),
        );
    }

    group.finish();
}

criterion_group!(render_pass_benches, bench_render_scene, bench_compute_bounds);
criterion_main!(render_pass_benches);
