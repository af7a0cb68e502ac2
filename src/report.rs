use std::fs;
use std::io;
use std::path::Path;

use crate::runner::{AlgorithmResults, SuiteResults};

/// Persists one CSV per algorithm plus the combined CSV under `results_dir`,
/// creating the directory if absent. Reports are overwritten, not appended.
///
/// A file that cannot be written is reported and skipped; the remaining
/// reports still get written.
pub fn write_reports(suite: &SuiteResults, results_dir: &Path) {
    if let Err(err) = fs::create_dir_all(results_dir) {
        eprintln!(
            "Error creating results directory {}: {err}",
            results_dir.display()
        );
        return;
    }

    for algorithm in &suite.algorithms {
        let path = results_dir.join(format!("{}_results.csv", algorithm.name));

        match write_algorithm_report(suite, algorithm, &path) {
            Ok(()) => println!(
                "Results for {} saved to {}",
                algorithm.name,
                path.display()
            ),
            Err(err) => eprintln!("Error writing {}: {err}", path.display()),
        }
    }

    let combined_path = results_dir.join("combined_results.csv");
    match write_combined_report(suite, &combined_path) {
        Ok(()) => println!("Combined results saved to {}", combined_path.display()),
        Err(err) => eprintln!("Error writing {}: {err}", combined_path.display()),
    }
}

fn write_algorithm_report(
    suite: &SuiteResults,
    algorithm: &AlgorithmResults,
    path: &Path,
) -> io::Result<()> {
    let mut csv = String::from("size,execution_time_s,comparisons,movements\n");

    for (&size, result) in suite.sizes.iter().zip(&algorithm.results) {
        csv.push_str(&format!(
            "{},{:.6},{},{}\n",
            size, result.execution_time, result.comparisons, result.movements
        ));
    }

    fs::write(path, csv)
}

fn write_combined_report(suite: &SuiteResults, path: &Path) -> io::Result<()> {
    let mut csv = String::from("size");
    for algorithm in &suite.algorithms {
        csv.push_str(&format!(
            ",{name}_execution_time_s,{name}_comparisons,{name}_movements",
            name = algorithm.name
        ));
    }
    csv.push('\n');

    for (row, &size) in suite.sizes.iter().enumerate() {
        csv.push_str(&size.to_string());

        for algorithm in &suite.algorithms {
            let result = &algorithm.results[row];
            csv.push_str(&format!(
                ",{:.6},{},{}",
                result.execution_time, result.comparisons, result.movements
            ));
        }

        csv.push('\n');
    }

    fs::write(path, csv)
}
