// lookalike-table: Print the confusables table.
//
// Lists every non-ASCII character whose NFKC form is plain ASCII letters, or
// with --lookup, every letter run with its look-alikes.
//
// Usage:
//   lookalike-table [--lookup]
//
// Options:
//   --lookup     Print the lookup table (letter run -> look-alikes)
//   -h, --help   Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lookalike_cli::wants_help(&args) {
        println!("lookalike-table: Print the confusables table.");
        println!();
        println!("Usage: lookalike-table [--lookup]");
        println!();
        println!("Without options, lists every character by code point with its");
        println!("normalization and Unicode name.");
        println!();
        println!("Options:");
        println!("  --lookup     Print the lookup table, longest letter runs first");
        println!("  -h, --help   Print this help");
        return;
    }

    lookalike_cli::init_logging();
    let lookup = args.iter().any(|a| a == "--lookup");
    if let Some(unknown) = args.iter().find(|a| a.as_str() != "--lookup") {
        lookalike_cli::fatal(&format!("unexpected argument: {unknown}"));
    }

    let handle = lookalike_cli::build_handle();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = if lookup {
        handle.write_lookup_table(&mut out)
    } else {
        handle.write_full_table(&mut out)
    };
    if let Err(e) = result.and_then(|()| out.flush()) {
        lookalike_cli::fatal(&format!("failed to write table: {e}"));
    }
}
