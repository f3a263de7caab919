use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;

use crate::pipeline::Options;
use crate::types::Rounding;
use crate::{Error, Result};

#[derive(Parser, Debug)]
#[command(about = "Approximate Euclidean TSP tours (MST + matching + Euler + 2-opt)")]
pub struct Args {
    /// Path to a directory containing point files, or a base path for point files
    #[arg(short, long)]
    prefix: Option<String>,

    /// Path to one or more point files with `id x y` per line
    #[arg(short, long)]
    file: Option<Vec<String>>,

    /// Solve a random instance with this many points
    #[arg(long)]
    pub random: Option<usize>,

    /// Seed for the random instance
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Random coordinates are drawn from 0..extent
    #[arg(long, default_value_t = 10_000)]
    pub extent: u32,

    /// Skip the 2-opt refinement
    #[arg(long)]
    pub no_refine: bool,

    /// Truncate distances instead of rounding to nearest
    #[arg(long)]
    pub truncate: bool,

    /// Directory for `<name>.tour` files; tours go to stdout when absent
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Directory for per-pass 2-opt metrics in Parquet format
    #[arg(long)]
    pub metrics_dir: Option<PathBuf>,

    /// One of off, error, warn, info, debug, trace
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn options(&self) -> Options {
        Options {
            rounding: if self.truncate {
                Rounding::Truncate
            } else {
                Rounding::Nearest
            },
            refine: !self.no_refine,
        }
    }

    /// `true` if point files were requested through `--file` or `--prefix`.
    pub fn has_input_files(&self) -> bool {
        self.file.is_some() || self.prefix.is_some()
    }
}

pub fn enumerate_input_files(args: &Args) -> Result<Vec<PathBuf>> {
    if let Some(files) = &args.file {
        if let Some(prefix) = &args.prefix {
            Ok(files.iter()
                .map(|f| Path::new(prefix).join(f))
                .collect())
        } else {
            Ok(files.iter()
                .map(PathBuf::from)
                .collect())
        }
    } else if let Some(prefix) = &args.prefix {
        let dir_entries = std::fs::read_dir(prefix)?;
        let mut files = Vec::new();
        for entry in dir_entries {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }

        files.sort_by(|a, b| {
            let a_key = a.file_name().and_then(|n| n.to_str()).map(natural_key).unwrap_or_default();
            let b_key = b.file_name().and_then(|n| n.to_str()).map(natural_key).unwrap_or_default();

            a_key.cmp(&b_key)
        });

        Ok(files)
    } else {
        Err(Error::invalid_input(
            "Either --file and/or --prefix must be provided",
        ))
    }
}

/// Splits a file name into digit and non-digit runs so that `tsp_10` sorts
/// after `tsp_9`. Numbers too long for u64 compare as text.
fn natural_key(s: &str) -> Vec<std::result::Result<u64, String>> {
    let mut parts = Vec::new();
    let mut buf = String::new();
    let mut is_digit = None;

    for c in s.chars() {
        let c = if c == '_' { ' ' } else { c.to_ascii_lowercase() };
        let current_is_digit = c.is_ascii_digit();

        if let Some(prev) = is_digit {
            if prev != current_is_digit {
                flush(&mut buf, prev, &mut parts);
            }
        }
        buf.push(c);
        is_digit = Some(current_is_digit);
    }

    if let Some(digits) = is_digit {
        flush(&mut buf, digits, &mut parts);
    }

    parts
}

fn flush(buf: &mut String, digits: bool, parts: &mut Vec<std::result::Result<u64, String>>) {
    let part = if digits {
        buf.parse::<u64>().map_err(|_| buf.clone())
    } else {
        Err(buf.clone())
    };
    parts.push(part);
    buf.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("christofides").chain(args.iter().copied()))
            .expect("args")
    }

    #[test]
    fn natural_order_puts_numbers_in_value_order() {
        let mut names = vec!["tsp_10.txt", "tsp_9.txt", "TSP_1.txt", "other.txt"];
        names.sort_by_key(|n| natural_key(n));
        assert_eq!(names, vec!["other.txt", "TSP_1.txt", "tsp_9.txt", "tsp_10.txt"]);
    }

    #[test]
    fn files_are_joined_with_prefix() {
        let args = parse(&["--prefix", "data", "--file", "a.txt", "--file", "b.txt"]);
        let files = enumerate_input_files(&args).expect("files");
        assert_eq!(files, vec![Path::new("data").join("a.txt"), Path::new("data").join("b.txt")]);
    }

    #[test]
    fn missing_inputs_are_rejected() {
        let args = parse(&["--random", "10"]);
        assert!(!args.has_input_files());
        assert!(matches!(enumerate_input_files(&args), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn prefix_directory_is_listed_in_natural_order() {
        let dir = std::env::temp_dir().join(format!("christofides-prefix-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create dir");
        for name in ["case_10.txt", "case_2.txt"] {
            std::fs::write(dir.join(name), "0 0 0\n").expect("write");
        }

        let args = parse(&["--prefix", dir.to_str().expect("utf8 path")]);
        let files = enumerate_input_files(&args).expect("files");
        let _ = std::fs::remove_dir_all(&dir);

        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["case_2.txt", "case_10.txt"]);
    }

    #[test]
    fn flags_map_to_options() {
        let defaults = parse(&["--random", "5"]).options();
        assert_eq!(defaults, Options::default());

        let args = parse(&["--random", "5", "--no-refine", "--truncate", "--log-level", "debug"]);
        assert_eq!(
            args.options(),
            Options {
                rounding: Rounding::Truncate,
                refine: false,
            }
        );
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert_eq!(args.seed, 1);
    }
}
