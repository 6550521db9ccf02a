//! Command-line harness around [`rgrep::Regex`].
//!
//! This harness owns argument parsing, sourcing lines from stdin, files, or
//! a recursive directory walk, and turning a boolean verdict into
//! grep-style output and an exit code. None of it participates in matching.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use rgrep::Regex;

/// A small grep built on a hand-rolled regex engine.
#[derive(Parser, Debug)]
#[command(name = "rgrep", about = "grep-like search over a small regex subset")]
struct Cli {
    /// The pattern to search for.
    #[arg(short = 'E', long = "extended-regexp")]
    pattern: String,

    /// Recurse into directories given as paths.
    #[arg(short = 'r', long = "recursive")]
    recursive: bool,

    /// Files or directories to search. Reads stdin if omitted.
    paths: Vec<PathBuf>,
}

/// Distinct exit codes so a caller can tell "no match" apart from "your
/// pattern doesn't parse" — two different kinds of problem.
const EXIT_MATCH: u8 = 0;
const EXIT_NO_MATCH: u8 = 1;
const EXIT_BAD_PATTERN: u8 = 2;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let regex = match Regex::new(&cli.pattern) {
        Ok(regex) => regex,
        Err(err) => {
            eprintln!("rgrep: bad pattern '{}': {}", cli.pattern, err);
            return ExitCode::from(EXIT_BAD_PATTERN);
        }
    };
    debug!("compiled pattern '{}'", cli.pattern);

    let any_matched = if cli.recursive {
        match run_recursive(&regex, &cli.paths) {
            Ok(matched) => matched,
            Err(err) => {
                eprintln!("rgrep: {err}");
                return ExitCode::from(EXIT_USAGE);
            }
        }
    } else if cli.paths.is_empty() {
        run_stdin(&regex)
    } else {
        run_files(&regex, &cli.paths)
    };

    ExitCode::from(if any_matched { EXIT_MATCH } else { EXIT_NO_MATCH })
}

fn run_stdin(regex: &Regex) -> bool {
    let stdin = io::stdin();
    let mut any_matched = false;
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if regex.is_match(&line) {
            println!("{line}");
            any_matched = true;
        }
    }
    any_matched
}

fn run_files(regex: &Regex, paths: &[PathBuf]) -> bool {
    let prefix_with_name = paths.len() > 1;
    let mut any_matched = false;
    for path in paths {
        let Ok(file) = File::open(path) else {
            eprintln!("rgrep: {}: no such file or directory", path.display());
            continue;
        };
        for line in BufReader::new(file).lines() {
            let Ok(line) = line else { break };
            if regex.is_match(&line) {
                if prefix_with_name {
                    println!("{}:{line}", path.display());
                } else {
                    println!("{line}");
                }
                any_matched = true;
            }
        }
    }
    any_matched
}

/// Recursively search every regular file under each of `roots`. Unreadable
/// files are skipped rather than treated as fatal: this harness composes a
/// boolean verdict, not a transcript of I/O failures.
fn run_recursive(regex: &Regex, roots: &[PathBuf]) -> anyhow::Result<bool> {
    let mut any_matched = false;
    for root in roots {
        if !root.is_dir() {
            anyhow::bail!("{} is not a directory", root.display());
        }
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            if search_file(regex, entry.path(), root) {
                any_matched = true;
            }
        }
    }
    Ok(any_matched)
}

fn search_file(regex: &Regex, path: &Path, root: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        debug!("skipping unreadable file {}", path.display());
        return false;
    };
    // Strip the parent of `root`, not `root` itself, so the target
    // directory's own name stays in the printed path.
    let display_path = match root.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => path.strip_prefix(parent).unwrap_or(path),
        _ => path,
    };
    let mut any_matched = false;
    for line in BufReader::new(file).lines() {
        let Ok(line) = line else { break };
        if regex.is_match(&line) {
            println!("{}:{line}", display_path.display());
            any_matched = true;
        }
    }
    any_matched
}
