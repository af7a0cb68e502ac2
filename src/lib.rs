use std::cmp::Ordering;

/// Comparison and movement tallies for a single sort invocation.
///
/// Comparisons count element-to-element ordering checks, movements count
/// element relocations (swaps or shifts). Both are machine-independent cost
/// proxies. A fresh value is created per call, so counts never leak across
/// invocations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub comparisons: u64,
    pub movements: u64,
}

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T]) -> Counters
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F) -> Counters
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T]) -> crate::Counters
            where
                T: Ord + Clone,
            {
                sort(arr)
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F) -> crate::Counters
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare)
            }
        }
    };
}

pub mod patterns;
pub mod report;
pub mod runner;
pub mod sorts;
