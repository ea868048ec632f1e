use dsa_collections::sorts::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
use proptest::prelude::*;

type Sort = fn(&mut [i16]);

const SORTS: [(&str, Sort); 5] = [
    ("bubble", bubble_sort),
    ("insertion", insertion_sort),
    ("selection", selection_sort),
    ("merge", merge_sort),
    ("quick", quick_sort),
];

proptest! {
    #[test]
    fn sorts_agree_with_std(items in prop::collection::vec(any::<i16>(), 0..200)) {
        let mut expected = items.clone();
        expected.sort_unstable();

        for (name, sort) in SORTS {
            let mut sorted = items.clone();
            sort(&mut sorted);
            prop_assert_eq!(&sorted, &expected, "{} sort", name);
        }
    }

    #[test]
    fn sorts_handle_heavy_duplicates(items in prop::collection::vec(0u8..3, 0..120)) {
        let mut expected = items.clone();
        expected.sort_unstable();

        let mut quick = items.clone();
        quick_sort(&mut quick);
        prop_assert_eq!(quick, expected.clone());

        let mut merged = items;
        merge_sort(&mut merged);
        prop_assert_eq!(merged, expected);
    }
}
