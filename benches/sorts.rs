#![allow(missing_docs, clippy::missing_docs_in_private_items, clippy::unwrap_used)]
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use dsa_collections::sorts::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 2000;
const SAMPLE_SIZE: usize = 10;

type Sort = fn(&mut [u32]);

fn sort_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = vec(any::<u32>(), ITEMS_AMOUNT).new_tree(&mut runner).unwrap().current();

    let sorts: [(&str, Sort); 6] = [
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
        ("selection", selection_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
        ("rust std sort_unstable", <[u32]>::sort_unstable),
    ];

    let mut group = c.benchmark_group("Sort comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    for (name, sort) in sorts {
        group.bench_function(name, |b| {
            b.iter_batched_ref(|| items.clone(), |batch| sort(batch), BatchSize::SmallInput);
        });
    }
    group.finish();
}

criterion_group!(benches, sort_benches);

criterion_main!(benches);
