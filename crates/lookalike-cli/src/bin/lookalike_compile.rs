// lookalike-compile: Compile ASCII words into Unicode look-alike spellings.
//
// Usage:
//   lookalike-compile [OPTIONS] [WORD...]
//
// Options:
//   -m, --max N          Maximum candidates per word (default: 1)
//   --all                Return every candidate (up to the ceiling)
//   --no-greedy          Substitute character by character
//   --reject-unmapped    Skip words with unmapped characters (needs --no-greedy)
//   --no-literal         Never keep a substitutable chunk unchanged
//   --ordered            Take candidates in product order instead of shuffling
//   --seed N             Seed the shuffle (any u64, including 0)
//   --json               Print one JSON object per word
//   --demo               Compile a few sample words
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use lookalike_cli::CompileRecord;
use lookalike_core::enums::Strategy;

const DEMO_WORDS: &[&str] = &["flag", "print(flag)", "help(secret)"];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if lookalike_cli::wants_help(&args) {
        println!("lookalike-compile: Compile words into Unicode look-alike spellings.");
        println!();
        println!("Usage: lookalike-compile [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, compiles each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -m, --max N         Maximum candidates per word (default: 1)");
        println!("  --all               Return every candidate (up to the ceiling)");
        println!("  --no-greedy         Substitute character by character");
        println!("  --reject-unmapped   Skip words with unmapped characters (needs --no-greedy)");
        println!("  --no-literal        Never keep a substitutable chunk unchanged");
        println!("  --ordered           Take candidates in order instead of shuffling");
        println!("  --seed N            Seed the shuffle");
        println!("  --json              Print one JSON object per word");
        println!("  --demo              Compile a few sample words");
        println!("  -h, --help          Print this help");
        println!();
        println!("Environment:");
        println!("  {}  Hard limit for --all (default: 1000000)", lookalike_cli::CEILING_ENV);
        println!("  RUST_LOG                     Log filter (default: warn)");
        return;
    }

    lookalike_cli::init_logging();

    let mut max_candidates = Some(1);
    let mut all = false;
    let mut greedy = true;
    let mut reject_unmapped = false;
    let mut include_literal = true;
    let mut shuffle = true;
    let mut seed = None;
    let mut json = false;
    let mut demo = false;
    let mut words: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-m" | "--max" => max_candidates = Some(lookalike_cli::parse_count(arg, iter.next())),
            "--all" => all = true,
            "--no-greedy" => greedy = false,
            "--reject-unmapped" => reject_unmapped = true,
            "--no-literal" => include_literal = false,
            "--ordered" => shuffle = false,
            "--seed" => seed = Some(lookalike_cli::parse_seed(arg, iter.next())),
            "--json" => json = true,
            "--demo" => demo = true,
            s if s.starts_with('-') && s.len() > 1 => {
                lookalike_cli::fatal(&format!("unknown option: {s}"))
            }
            _ => words.push(arg.clone()),
        }
    }
    if let Err(e) = lookalike_cli::check_compile_flags(greedy, reject_unmapped) {
        lookalike_cli::fatal(&e);
    }
    if all {
        max_candidates = None;
    }
    if demo {
        words = DEMO_WORDS.iter().map(|w| w.to_string()).collect();
    }

    let mut handle = lookalike_cli::build_handle();
    handle.set_greedy(greedy);
    handle.set_max_candidates(max_candidates);
    handle.set_reject_unmapped(reject_unmapped);
    handle.set_include_literal(include_literal);
    handle.set_shuffle(shuffle);
    handle.set_seed(seed);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut stats: Vec<String> = Vec::new();

    let mut compile_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let candidates = handle.compile_default(word);
        stats.push(format!(
            "Generated {} candidates for '{word}'",
            candidates.len()
        ));

        if json {
            let record = CompileRecord {
                word,
                strategy: Strategy::from_greedy(greedy).as_str(),
                possible: handle.possible_count(word),
                candidates,
            };
            match serde_json::to_string(&record) {
                Ok(line) => {
                    let _ = writeln!(out, "{line}");
                }
                Err(e) => eprintln!("error: failed to encode result for '{word}': {e}"),
            }
            return;
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "[+] Compiling: '{word}'");
        let _ = writeln!(out);
        if candidates.is_empty() {
            let _ = writeln!(
                out,
                "No results found (try removing --reject-unmapped if the word contains punctuation)"
            );
        }
        for candidate in &candidates {
            let _ = writeln!(
                out,
                "    |{candidate}|\t({} chars)",
                candidate.chars().count()
            );
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            compile_word(word, &mut out);
        }
    } else {
        for word in &words {
            compile_word(word, &mut out);
        }
    }

    if !json && !stats.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "─".repeat(40));
        for line in &stats {
            let _ = writeln!(out, "{line}");
        }
    }
    if let Err(e) = out.flush() {
        lookalike_cli::fatal(&format!("failed to write output: {e}"));
    }
}
