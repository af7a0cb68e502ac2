use std::cmp::Ordering;

use crate::Counters;

sort_impl!("quick_sort");

#[inline]
pub fn sort<T>(v: &mut [T]) -> Counters
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b))
}

/// Lomuto partition scheme with the last element as pivot. The counters are
/// threaded through the recursion by reference, so every top-level call starts
/// from zero and the implementation stays re-entrant.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> Counters
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut counters = Counters::default();

    if v.len() > 1 {
        recurse(v, 0, v.len() - 1, &mut compare, &mut counters);
    }

    counters
}

fn recurse<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F, counters: &mut Counters)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if low < high {
        let pivot_idx = partition(v, low, high, compare, counters);

        if pivot_idx > 0 {
            recurse(v, low, pivot_idx - 1, compare, counters);
        }
        recurse(v, pivot_idx + 1, high, compare, counters);
    }
}

fn partition<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    compare: &mut F,
    counters: &mut Counters,
) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = low;

    for j in low..high {
        counters.comparisons += 1;
        if compare(&v[j], &v[high]) != Ordering::Greater {
            // Counted even when i == j, matching the swap-per-element rule.
            v.swap(i, j);
            counters.movements += 1;
            i += 1;
        }
    }

    v.swap(i, high);
    counters.movements += 1;

    i
}
