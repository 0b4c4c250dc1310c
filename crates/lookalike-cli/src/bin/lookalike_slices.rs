// lookalike-slices: Show multi-letter look-alikes usable inside words.
//
// For each word, lists every letter run of two or more characters that has a
// single-character look-alike and occurs in the word. These are the chunks
// greedy compilation can collapse.
//
// Usage:
//   lookalike-slices WORD...

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || lookalike_cli::wants_help(&args) {
        println!("lookalike-slices: Show multi-letter look-alikes usable inside words.");
        println!();
        println!("Usage: lookalike-slices WORD...");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    lookalike_cli::init_logging();
    let handle = lookalike_cli::build_handle();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for (i, word) in args.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        if let Err(e) = handle.write_useful_slices(&mut out, word) {
            lookalike_cli::fatal(&format!("failed to write slices: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        lookalike_cli::fatal(&format!("failed to write slices: {e}"));
    }
}
