use std::env;
use std::path::PathBuf;
use std::time::Instant;

use sort_bench::{patterns, runner};

/// Array lengths benchmarked by default, smallest first.
const TEST_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

const DEFAULT_RESULTS_DIR: &str = "../results";

fn main() {
    // Latch the seed before any generation happens, for reproducible runs.
    let seed = patterns::init_seed(patterns::DEFAULT_SEED);

    let results_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR));

    println!("===========================================================");
    println!("COMPARATIVE ANALYSIS OF SORTING ALGORITHMS");
    println!("===========================================================");

    println!("\nSeed: {seed}");

    print!("\nRunning tests for the following sizes:");
    for size in TEST_SIZES {
        print!(" {size}");
    }
    println!();

    println!("\nResults will be saved to: {}", results_dir.display());

    let start = Instant::now();

    runner::run_performance_tests(&TEST_SIZES, &results_dir);

    println!(
        "\nTests completed in {:.2} seconds.",
        start.elapsed().as_secs_f64()
    );
    println!("===========================================================");
}
