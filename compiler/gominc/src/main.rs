//! gomin CLI
//!
//! Shortens variable names in a Go source file.

use std::io::Write;

use gominc::{init_tracing, minify_file, parse_args, write_report, Command, MinifyConfig};

const USAGE: &str = "\
Usage: gomin <file.go> [options]

Writes a copy of <file.go> with shortened variable names to <file>_min.go.

Options:
  --ext=<ext>         Extension marker in the input path (default: .go)
  --suffix=<suffix>   Inserted before the extension (default: _min)
  --window=<n>        Lookback window in tokens (default: 4, minimum: 4)
  -q, --quiet         Do not print the rename table

Commands:
  help                Show this help message
  version             Show version information

Set RUST_LOG=gomin_rewrite=debug (or =trace) for diagnostics.";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    match command {
        Command::NoInput => {
            println!("No file provided. Please provide a filepath as argument");
        }
        Command::Help => {
            println!("{USAGE}");
        }
        Command::Version => {
            println!("gomin {}", env!("CARGO_PKG_VERSION"));
        }
        Command::Minify { input, config } => run(&input, &config),
    }
}

fn run(input: &str, config: &MinifyConfig) {
    let outcome = match minify_file(input, config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if config.quiet {
        return;
    }
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write_report(&outcome.table, &mut stdout).and_then(|()| stdout.flush()) {
        eprintln!("error writing rename table: {e}");
        std::process::exit(1);
    }
}
