#![allow(missing_docs, clippy::missing_docs_in_private_items, clippy::unwrap_used)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dsa_collections::{Graph, Label};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const SAMPLE_SIZE: usize = 10;

/// Builds a graph on `0..vertices` from random `(from, to)` pairs, dropping repeats
fn random_graph(runner: &mut TestRunner, vertices: Label, edges: usize) -> Graph {
    let pairs = vec((any::<Label>(), any::<Label>()), edges).new_tree(runner).unwrap().current();

    let mut graph = Graph::new();
    for label in 0..vertices {
        graph.add_vertex(label).unwrap();
    }
    for (from, to) in pairs {
        graph.add_edge(from % vertices, to % vertices).ok();
    }
    graph
}

fn traversal_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let mut group = c.benchmark_group("Graph traversal benchmark");
    group.sample_size(SAMPLE_SIZE);

    for vertices in [100, 1_000] {
        let graph = random_graph(&mut runner, vertices, vertices as usize * 4);
        group.bench_with_input(BenchmarkId::new("depth first", vertices), &graph, |b, graph| {
            b.iter(|| graph.depth_first_search());
        });
        group.bench_with_input(BenchmarkId::new("breadth first", vertices), &graph, |b, graph| {
            b.iter(|| graph.breadth_first_search());
        });
        group.bench_with_input(BenchmarkId::new("adjacency matrix", vertices), &graph, |b, graph| {
            b.iter(|| graph.adjacency_matrix());
        });
    }
    group.finish();
}

criterion_group!(benches, traversal_benches);

criterion_main!(benches);
