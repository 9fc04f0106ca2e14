use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_tree::OrderedTree;

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests against
/// balanced trees of various sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut OrderedTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3u32, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels) - 1;
        let largest_record = (num_nodes - 1) as i32;

        // Inserting in sorted order would skew the tree, so build balanced.
        let tree = OrderedTree::from_sorted((0..num_nodes as i32).collect());

        let id = BenchmarkId::from_parameter(largest_record);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_record));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _record = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _record = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_helper(c, "rebalance", |tree, _i| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
