use std::env;
use std::path::PathBuf;
use std::process::exit;

use anyhow::{ensure, Context, Result};

use mangle::{mangle_file, seed, DEFAULT_HEADER_SIZE, DEFAULT_NAME};

/// Interprets the positional arguments: `[file] [header_size]`.
///
/// Missing arguments fall back to the defaults; extra arguments are ignored.
/// A non-numeric or zero header size is rejected rather than silently
/// accepted.
fn parse_args(args: &[String]) -> Result<(PathBuf, usize)> {
    let path = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NAME));
    let header_size = match args.get(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("header size {raw:?} is not a number"))?,
        None => DEFAULT_HEADER_SIZE,
    };
    ensure!(header_size > 0, "header size must be positive");
    Ok((path, header_size))
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (path, header_size) = parse_args(&args)?;
    let seed = seed::entropy_seed()?;
    let count = mangle_file(&path, header_size, seed)?;
    log::info!(
        "mutated {count} bytes in the first {header_size} of {}",
        path.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // Straight to stderr rather than through the logger, so the fatal
        // diagnostic cannot be filtered away.
        eprintln!("mangle: {err:#}");
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_use_the_defaults() {
        let (path, size) = parse_args(&[]).unwrap();
        assert_eq!(path, PathBuf::from(DEFAULT_NAME));
        assert_eq!(size, DEFAULT_HEADER_SIZE);
    }

    #[test]
    fn one_argument_is_the_path() {
        let (path, size) = parse_args(&strings(&["victim.bin"])).unwrap();
        assert_eq!(path, PathBuf::from("victim.bin"));
        assert_eq!(size, DEFAULT_HEADER_SIZE);
    }

    #[test]
    fn two_arguments_set_path_and_size() {
        let (path, size) = parse_args(&strings(&["victim.bin", "2000"])).unwrap();
        assert_eq!(path, PathBuf::from("victim.bin"));
        assert_eq!(size, 2000);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let (path, size) = parse_args(&strings(&["victim.bin", "64", "junk"])).unwrap();
        assert_eq!(path, PathBuf::from("victim.bin"));
        assert_eq!(size, 64);
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        assert!(parse_args(&strings(&["victim.bin", "banana"])).is_err());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(parse_args(&strings(&["victim.bin", "0"])).is_err());
    }
}
