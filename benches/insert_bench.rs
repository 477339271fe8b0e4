//! Insertion and rendering benchmarks

use arbor::render::{render_dot, RenderConfig};
use arbor::{BinaryTree, Direction, SearchTree, ROOT};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Deterministic pseudo-random sequence (xorshift)
fn scrambled(count: usize) -> Vec<i64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1_000_000) as i64
        })
        .collect()
}

fn benchmark_insert(c: &mut Criterion) {
    let values = scrambled(10_000);

    c.bench_function("search_insert_10k", |b| {
        b.iter(|| {
            let mut bst = SearchTree::new(500_000);
            bst.extend(values.iter().copied());
            black_box(bst.len());
        });
    });

    c.bench_function("directional_chain_10k", |b| {
        b.iter(|| {
            let mut tree = BinaryTree::new(0i64);
            let mut parent = ROOT;
            for &value in &values {
                parent = tree.insert(parent, Direction::Right, value).unwrap();
            }
            black_box(tree.len());
        });
    });
}

fn benchmark_render(c: &mut Criterion) {
    let mut bst = SearchTree::new(500_000);
    bst.extend(scrambled(10_000));
    let config = RenderConfig::default();

    c.bench_function("render_dot_10k", |b| {
        b.iter(|| black_box(render_dot(bst.tree(), &config).unwrap()));
    });
}

criterion_group!(benches, benchmark_insert, benchmark_render);
criterion_main!(benches);
