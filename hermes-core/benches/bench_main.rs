use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;
use hermes_core::prelude::*;

/// Grid of `side * side` stations connected to their right and lower neighbours
fn grid_network(side: usize) -> (Vec<Station>, Vec<RawEdge>) {
    let id = |row: usize, col: usize| format!("s{row}_{col}");
    let position = |row: usize, col: usize| Point::new(col as f64 * 0.005, row as f64 * 0.005);

    let stations = (0..side)
        .flat_map(|row| (0..side).map(move |col| (row, col)))
        .map(|(row, col)| Station::new(id(row, col), id(row, col), position(row, col)))
        .collect();

    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            if col + 1 < side {
                edges.push(RawEdge::new(
                    id(row, col),
                    id(row, col + 1),
                    vec![position(row, col), position(row, col + 1)],
                ));
            }
            if row + 1 < side {
                edges.push(RawEdge::new(
                    id(row, col),
                    id(row + 1, col),
                    vec![position(row, col), position(row + 1, col)],
                ));
            }
        }
    }
    (stations, edges)
}

fn routing_benchmarks(c: &mut Criterion) {
    let (stations, edges) = grid_network(30);
    let graph = build_graph(&stations, &edges);

    c.bench_function("build_graph 30x30", |b| {
        b.iter(|| build_graph(black_box(&stations), black_box(&edges)));
    });

    c.bench_function("find_path corner to corner", |b| {
        b.iter(|| find_path(black_box(&graph), "s0_0", "s29_29"));
    });
}

fn animation_benchmarks(c: &mut Criterion) {
    let (stations, edges) = grid_network(30);
    let graph = build_graph(&stations, &edges);
    let points = concatenate_paths(&find_path(&graph, "s0_0", "s29_29"));

    let mut animation = Animation::new(points, AnimationConfig::default());
    animation.spread_evenly(50);

    c.bench_function("advance 50 vehicles", |b| {
        b.iter(|| animation.advance_by(black_box(Duration::from_millis(16))));
    });
}

criterion_group!(benches, routing_benchmarks, animation_benchmarks);
criterion_main!(benches);
