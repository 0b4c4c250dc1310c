// lookalike-cli: shared utilities for CLI tools.

use std::process;
use std::time::Instant;

use lookalike_compiler::LookalikeHandle;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the uncapped candidate ceiling.
pub const CEILING_ENV: &str = "LOOKALIKE_CANDIDATE_CEILING";

/// Install a stderr tracing subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the confusables table and a handle around it.
///
/// Applies `LOOKALIKE_CANDIDATE_CEILING` when set to a valid number.
pub fn build_handle() -> LookalikeHandle {
    let started = Instant::now();
    let mut handle = LookalikeHandle::new();
    info!(
        entries = handle.table().len(),
        keys = handle.table().key_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "confusables table ready"
    );

    if let Ok(raw) = std::env::var(CEILING_ENV) {
        match raw.trim().parse::<usize>() {
            Ok(ceiling) if ceiling > 0 => handle.set_uncapped_ceiling(ceiling),
            _ => warn!(value = %raw, "ignoring invalid {CEILING_ENV}"),
        }
    }
    handle
}

/// One compiled word, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct CompileRecord<'a> {
    pub word: &'a str,
    pub strategy: &'static str,
    /// Size of the full combination space, `None` if rejected or uncountable.
    pub possible: Option<usize>,
    pub candidates: Vec<String>,
}

/// Parse a positive count for option `name`, exiting on failure.
pub fn parse_count(name: &str, value: Option<&String>) -> usize {
    let Some(value) = value else {
        fatal(&format!("{name} requires a value"));
    };
    match value.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => fatal(&format!("invalid number for {name}: {value}")),
    }
}

/// Parse a shuffle seed for option `name`, exiting on failure. Zero is valid.
pub fn parse_seed(name: &str, value: Option<&String>) -> u64 {
    let Some(value) = value else {
        fatal(&format!("{name} requires a value"));
    };
    match value.parse::<u64>() {
        Ok(seed) => seed,
        Err(_) => fatal(&format!("invalid seed for {name}: {value}")),
    }
}

/// Reject flag combinations that would be silently ignored.
///
/// Greedy decomposition always keeps unmatched characters as literals, so
/// `--reject-unmapped` only has an effect together with `--no-greedy`.
pub fn check_compile_flags(greedy: bool, reject_unmapped: bool) -> Result<(), String> {
    if greedy && reject_unmapped {
        return Err("--reject-unmapped requires --no-greedy".to_string());
    }
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["flag", "-h"])));
        assert!(wants_help(&args(&["--help"])));
        assert!(!wants_help(&args(&["flag"])));
    }

    #[test]
    fn parse_valid_count() {
        assert_eq!(parse_count("--max", Some(&"12".to_string())), 12);
    }

    #[test]
    fn seed_accepts_zero_and_full_range() {
        assert_eq!(parse_seed("--seed", Some(&"0".to_string())), 0);
        assert_eq!(
            parse_seed("--seed", Some(&u64::MAX.to_string())),
            u64::MAX
        );
    }

    #[test]
    fn reject_unmapped_needs_per_character_mode() {
        assert!(check_compile_flags(true, true).is_err());
        assert!(check_compile_flags(false, true).is_ok());
        assert!(check_compile_flags(true, false).is_ok());
        assert!(check_compile_flags(false, false).is_ok());
    }

    #[test]
    fn record_serializes() {
        let record = CompileRecord {
            word: "fl",
            strategy: "greedy",
            possible: Some(2),
            candidates: vec!["\u{FB02}".to_string()],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"word":"fl","strategy":"greedy","possible":2,"candidates":["ﬂ"]}"#
        );
    }
}
