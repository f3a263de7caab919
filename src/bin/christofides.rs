use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use christofides::metrics;
use christofides::problem::Problem;
use christofides::tour::format::write_solution;
use christofides::utils::{Args, Parser, enumerate_input_files};
use christofides::{Options, Result, logging, solve};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_logger(args.log_level) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::error!("{failed} instance(s) failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves every requested instance and returns how many of them failed.
fn run(args: &Args) -> Result<usize> {
    let options = args.options();
    let mut failed = 0;

    for dir in [&args.output_dir, &args.metrics_dir].into_iter().flatten() {
        fs::create_dir_all(dir)?;
    }

    if let Some(n) = args.random {
        let name = format!("random_{n}_{}", args.seed);
        let outcome = Problem::random(n, args.extent, args.seed, options.rounding)
            .and_then(|problem| solve_instance(args, &options, &name, &problem));
        if let Err(e) = outcome {
            log::error!("{name}: {e}");
            failed += 1;
        }
    }

    if args.has_input_files() || args.random.is_none() {
        for path in enumerate_input_files(args)? {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("instance")
                .to_string();

            let setup_time = Instant::now();
            let outcome = Problem::load(&path, options.rounding).and_then(|problem| {
                log::debug!("{name}: loaded {} points in {:?}", problem.n(), setup_time.elapsed());
                solve_instance(args, &options, &name, &problem)
            });
            if let Err(e) = outcome {
                log::error!("{}: {e}", path.display());
                failed += 1;
            }
        }
    }

    Ok(failed)
}

fn solve_instance(args: &Args, options: &Options, name: &str, problem: &Problem) -> Result<()> {
    let start_time = Instant::now();

    let mut records = Vec::new();
    let solution = solve(problem, options, Some(&mut records))?;

    log::info!(
        "{name}: n={} length={} (shortcut {}, mst {}) in {:?}",
        problem.n(),
        solution.length,
        solution.stats.shortcut_length,
        solution.stats.mst_weight,
        start_time.elapsed()
    );

    match &args.output_dir {
        Some(dir) => {
            let path = dir.join(format!("{name}.tour"));
            let file = BufWriter::new(File::create(&path)?);
            write_solution(file, solution.length, &solution.tour)?;
            println!("{name}: {} -> {}", solution.length, path.display());
        }
        None => write_solution(io::stdout().lock(), solution.length, &solution.tour)?,
    }

    if let Some(dir) = &args.metrics_dir {
        write_metrics(dir, name, &records)?;
    }

    Ok(())
}

fn write_metrics(dir: &Path, name: &str, records: &[metrics::PassRecord]) -> Result<()> {
    let path = dir.join(format!("two_opt_{name}.parquet"));
    metrics::serialize_to_parquet(records, &path)?;
    log::debug!("{name}: wrote {} pass records to {}", records.len(), path.display());
    Ok(())
}
