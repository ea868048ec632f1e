//! In-place comparison sorts over slices.
//!
//! Every sort orders the slice ascending. Bubble, insertion and merge sort keep equal
//! elements in their original order.

/// Returns true if the element at `left` is greater than the element at `right`
fn is_greater<T: Ord>(items: &[T], left: usize, right: usize) -> bool {
    matches!((items.get(left), items.get(right)), (Some(a), Some(b)) if a > b)
}

/// Sorts by repeatedly swapping adjacent out-of-order pairs.
///
/// Each pass stops at the last swap of the previous one, so an already sorted slice takes
/// a single pass.
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let mut unsorted = items.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for right in 1..unsorted {
            let left = right.saturating_sub(1);
            if is_greater(items, left, right) {
                items.swap(left, right);
                last_swap = right;
            }
        }
        unsorted = last_swap;
    }
}

/// Sorts by sinking each element left until its predecessor is not greater
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for start in 1..items.len() {
        let mut index = start;
        while let Some(previous) = index.checked_sub(1) {
            if !is_greater(items, previous, index) {
                break;
            }
            items.swap(previous, index);
            index = previous;
        }
    }
}

/// Sorts by swapping the smallest remaining element into each position in turn
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for start in 0..items.len() {
        let smallest = items
            .get(start..)
            .and_then(|rest| rest.iter().enumerate().min_by(|a, b| a.1.cmp(b.1)))
            .map(|(offset, _)| offset);

        if let Some(offset) = smallest {
            items.swap(start, start.saturating_add(offset));
        }
    }
}

/// Sorts by splitting the slice in half, sorting both halves and merging them.
///
/// Merging goes through a buffer of cloned elements the size of the current run.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    let middle = items.len() / 2;
    let (left, right) = items.split_at_mut(middle);
    merge_sort(left);
    merge_sort(right);

    let merged = merge(left, right);
    items.clone_from_slice(&merged);
}

/// Merges two sorted runs, taking from `left` on ties
fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len().saturating_add(right.len()));
    let mut left = left.iter().peekable();
    let mut right = right.iter().peekable();

    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        if a <= b {
            merged.push(T::clone(a));
            left.next();
        } else {
            merged.push(T::clone(b));
            right.next();
        }
    }
    merged.extend(left.cloned());
    merged.extend(right.cloned());
    merged
}

/// Sorts by partitioning around the middle element and recursing on both sides.
///
/// The pivot is swapped to the end, smaller elements are gathered at the front, and the
/// pivot is then placed between the two parts.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    let Some(last) = items.len().checked_sub(1) else {
        return;
    };
    if last == 0 {
        return;
    }

    items.swap(items.len() / 2, last);
    let boundary = partition(items);
    items.swap(boundary, last);

    let (lower, upper) = items.split_at_mut(boundary);
    quick_sort(lower);
    if let Some((_, upper)) = upper.split_first_mut() {
        quick_sort(upper);
    }
}

/// Moves every element smaller than the last one to the front, returning how many moved
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let Some((pivot, rest)) = items.split_last_mut() else {
        return 0;
    };

    let mut boundary: usize = 0;
    for index in 0..rest.len() {
        if rest.get(index).is_some_and(|item| *item < *pivot) {
            rest.swap(boundary, index);
            boundary = boundary.saturating_add(1);
        }
    }
    boundary
}
