use std::path::Path;
use std::time::Instant;

use crate::{patterns, report, sorts, Sort};

/// Everything measured for one (algorithm, size) run. Immutable once built.
#[derive(Copy, Clone, Debug, Default)]
pub struct SortResult {
    pub comparisons: u64,
    pub movements: u64,
    /// Wall-clock seconds bracketing the sort call itself.
    pub execution_time: f64,
}

/// Results of one algorithm across the whole size sweep, in sweep order.
#[derive(Debug)]
pub struct AlgorithmResults {
    pub name: String,
    pub results: Vec<SortResult>,
}

/// Result matrix for a full suite run: `algorithms[a].results[s]` holds the
/// measurement for algorithm `a` on `sizes[s]`. Built by the runner, consumed
/// read-only by the report writer.
#[derive(Debug)]
pub struct SuiteResults {
    pub sizes: Vec<usize>,
    pub algorithms: Vec<AlgorithmResults>,
}

type RunFn = fn(&[i32]) -> SortResult;

/// The fixed benchmark lineup. Output files and the combined report columns
/// follow this order.
fn algorithm_table() -> [(String, RunFn); 4] {
    [
        (
            sorts::selection::SortImpl::name(),
            run_algorithm::<sorts::selection::SortImpl>,
        ),
        (
            sorts::insertion::SortImpl::name(),
            run_algorithm::<sorts::insertion::SortImpl>,
        ),
        (
            sorts::bubble::SortImpl::name(),
            run_algorithm::<sorts::bubble::SortImpl>,
        ),
        (
            sorts::quick::SortImpl::name(),
            run_algorithm::<sorts::quick::SortImpl>,
        ),
    ]
}

/// Runs one algorithm against a private copy of `input`, so the caller's
/// array is never mutated and every algorithm in a size class starts from
/// byte-identical data.
///
/// A result that fails the sortedness check is still returned; the failure is
/// reported and the suite keeps going.
pub fn run_algorithm<S: Sort>(input: &[i32]) -> SortResult {
    let mut test_data = input.to_vec();

    let start = Instant::now();
    let counters = S::sort(test_data.as_mut_slice());
    let execution_time = start.elapsed().as_secs_f64();

    if !is_sorted(&test_data) {
        eprintln!(
            "ERROR: {} failed to sort the array correctly!",
            S::name()
        );
    }

    SortResult {
        comparisons: counters.comparisons,
        movements: counters.movements,
        execution_time,
    }
}

/// Runs the whole lineup over the size sweep. The one sample array per size
/// is generated here and nowhere else.
pub fn run_suite(sizes: &[usize]) -> SuiteResults {
    let table = algorithm_table();

    let mut algorithms: Vec<AlgorithmResults> = table
        .iter()
        .map(|(name, _)| AlgorithmResults {
            name: name.clone(),
            results: Vec::with_capacity(sizes.len()),
        })
        .collect();

    for &size in sizes {
        println!("\nTesting with array of size {size}...");

        let sample = patterns::random_uniform(size, 1..=1_000_000);

        for (slot, (name, run)) in algorithms.iter_mut().zip(table.iter()) {
            println!("  Running {name}...");
            let result = run(&sample);
            println!("  {name} completed in {:.6} seconds", result.execution_time);

            slot.results.push(result);
        }
    }

    SuiteResults {
        sizes: sizes.to_vec(),
        algorithms,
    }
}

/// Full pipeline: measure every (algorithm, size) pair, then persist the
/// reports under `results_dir`.
pub fn run_performance_tests(sizes: &[usize], results_dir: &Path) -> SuiteResults {
    let suite = run_suite(sizes);
    report::write_reports(&suite, results_dir);
    suite
}

fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
