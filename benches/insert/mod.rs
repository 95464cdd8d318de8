use avlset::AvlTree;
use criterion::{
    measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput,
};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("insert");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values);
    }
}

/// Time the construction of a tree of `n_values` random values, one insert at
/// a time.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    g.throughput(Throughput::Elements(n_values as _)); // Inserts per second
    g.bench_function(BenchmarkId::new("n_values", n_values), |b| {
        b.iter_batched(
            || (AvlTree::default(), Lfsr::default()),
            |(mut t, mut rand)| {
                for _ in 0..n_values {
                    // The LFSR yields no repeats within this many draws, so
                    // every insert lands on a fresh value.
                    t.insert(rand.next()).unwrap();
                }
                t
            },
            BatchSize::PerIteration,
        );
    });
}
