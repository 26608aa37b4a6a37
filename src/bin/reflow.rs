//! Command-line front end: reflow a file (or stdin) to a target width.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reflow::{justify, DEFAULT_DEPTH, DEFAULT_WIDTH};

/// Rewrap and fully justify plain text, preserving its structure.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Input file; reads stdin when omitted.
    file: Option<PathBuf>,

    /// Target line width in chars.
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// How many levels of nested structure to reflow recursively.
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.width == 0 {
        eprintln!("error: width must be at least 1");
        return ExitCode::FAILURE;
    }

    let text = match &cli.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("error: failed to read {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("error: failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    match justify(&text, cli.width, cli.depth) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
