//! Criterion benchmarks for the percolation core.
//!
//! Benchmarks:
//!   - disjoint-set union + connected over a pre-built chain
//!   - filling a 64×64 grid with random opens until it percolates
//!   - percolates() query on an already-percolated grid
//!
//! Run with: cargo bench -p percolation --bench percolation_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use percolation::{DisjointSet, PercolationGrid};

// ---------------------------------------------------------------------------
// Benchmark: disjoint-set primitives
// ---------------------------------------------------------------------------

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_set");
    group.sample_size(1000);

    group.bench_function("union_chain_4096", |b| {
        b.iter(|| {
            let mut ds = DisjointSet::new(4096);
            for i in 0..4095 {
                ds.union(black_box(i), black_box(i + 1));
            }
            black_box(ds.component_size(0))
        });
    });

    group.bench_function("connected_after_compression", |b| {
        let mut ds = DisjointSet::new(4096);
        for i in 0..4095 {
            ds.union(i, i + 1);
        }
        b.iter(|| black_box(ds.connected(black_box(0), black_box(4095))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: grid fill to percolation
// ---------------------------------------------------------------------------

fn bench_grid_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_fill");
    group.sample_size(50);

    group.bench_function("fill_64x64_until_percolation", |b| {
        b.iter(|| {
            let n = 64;
            let mut rng = StdRng::seed_from_u64(42);
            let mut grid = PercolationGrid::new(n).unwrap();
            while !grid.percolates() {
                let row = rng.gen_range(1..=n);
                let col = rng.gen_range(1..=n);
                if !grid.is_open(row, col).unwrap() {
                    grid.open(row, col).unwrap();
                }
            }
            black_box(grid.open_sites())
        });
    });

    group.bench_function("percolates_query_64x64", |b| {
        let n = 64;
        let mut grid = PercolationGrid::new(n).unwrap();
        for row in 1..=n {
            grid.open(row, 1).unwrap();
        }
        b.iter(|| black_box(grid.percolates()));
    });

    group.finish();
}

criterion_group!(benches, bench_disjoint_set, bench_grid_fill);
criterion_main!(benches);
