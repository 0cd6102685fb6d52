use std::fs;

use clap::Parser;
use linea::{interpreter::evaluator::core::Context, run_source};

/// linea is a minimal line-oriented scripting language interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script file to execute.
    source: String,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.source).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.source);
        std::process::exit(1);
    });

    let mut context = Context::new();

    if let Err(e) = run_source(&script, &mut context) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
