//! Layout engine micro-benchmarks
//!
//! Measures full layout passes over grids and nested compound tables of growing size.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use layouter::{
    Content, CountingProbe, LayoutConfig, LayoutEngine, LayoutEnvironment, LayoutProfile, NodeData, NodeMarkers,
    NodeTree, StaticMetrics,
};
use std::sync::Arc;

/// A table of `rows` rows with `columns` flowing cells each.
fn grid(rows: usize, columns: usize) -> (NodeTree, StaticMetrics) {
    let mut tree = NodeTree::new(NodeData::new(NodeMarkers::table()));
    let mut metrics = StaticMetrics::new();
    let root = tree.root();
    for r in 0..rows {
        let row = tree
            .append(root, NodeData::new(NodeMarkers::row()))
            .expect("root exists");
        for c in 0..columns {
            let cell = tree
                .append(row, NodeData::new(NodeMarkers::column()))
                .expect("row exists");
            metrics.set_content(
                cell,
                Content::Flow {
                    area: 2_000.0 * ((r + c) % 7 + 1) as f64,
                    natural_width: 400.0,
                },
            );
        }
    }
    (tree, metrics)
}

/// Nested compound columns, `depth` levels deep, each holding `fanout` rows.
fn nested(depth: usize, fanout: usize) -> (NodeTree, StaticMetrics) {
    let mut tree = NodeTree::new(NodeData::new(NodeMarkers::table()));
    let mut metrics = StaticMetrics::new();
    let root = tree.root();
    let mut frontier = vec![root];
    for level in 0..depth {
        let mut next = Vec::new();
        for parent in frontier {
            for i in 0..fanout {
                let row = tree
                    .append(parent, NodeData::new(NodeMarkers::row()))
                    .expect("parent exists");
                let column = tree
                    .append(row, NodeData::new(NodeMarkers::column()))
                    .expect("row exists");
                if level + 1 == depth {
                    metrics.set_content(column, Content::Fixed(10.0 * (i + 1) as f64));
                } else {
                    next.push(column);
                }
            }
        }
        frontier = next;
    }
    (tree, metrics)
}

fn benchmark_layout_grids(c: &mut Criterion) {
    let _ = env_logger::builder().try_init();
    let mut group = c.benchmark_group("layout_grids");
    let profile = LayoutProfile::new("bench").with_width(1200.0).with_row_height(30.0);

    for row_count in [1, 10, 50] {
        let (tree, metrics) = grid(row_count, 6);
        let probe = Arc::new(CountingProbe::new());
        let engine = LayoutEngine::new(tree, LayoutConfig::default()).with_probe(probe.clone());

        group.bench_with_input(BenchmarkId::new("rows", row_count), &row_count, |b, _| {
            b.iter(|| {
                engine
                    .layout(LayoutEnvironment::new(&profile, &metrics))
                    .expect("Failed to lay out grid")
            });
        });
        probe.log_summary();
    }

    group.finish();
}

fn benchmark_layout_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_nested_compounds");
    let profile = LayoutProfile::new("bench").with_width(1200.0).with_height(800.0);

    for depth in [1, 2, 3] {
        let (tree, metrics) = nested(depth, 3);
        let engine = LayoutEngine::new(tree, LayoutConfig::default());

        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, _| {
            b.iter(|| {
                engine
                    .layout(LayoutEnvironment::new(&profile, &metrics))
                    .expect("Failed to lay out nested table")
            });
        });
    }

    group.finish();
}

fn benchmark_layout_breaking(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_breaking");
    let profile = LayoutProfile::new("bench").with_row_height(30.0).breaking(true);
    let (tree, metrics) = grid(50, 6);
    let engine = LayoutEngine::new(tree, LayoutConfig::default());

    group.bench_function("rows/50", |b| {
        b.iter(|| {
            engine
                .layout(LayoutEnvironment::new(&profile, &metrics))
                .expect("Failed to lay out stacked grid")
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_layout_grids,
    benchmark_layout_nested,
    benchmark_layout_breaking
);
criterion_main!(benches);
