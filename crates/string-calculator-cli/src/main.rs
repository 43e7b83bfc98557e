//! String calculator CLI — `strcalc` command.
//!
//! Sums delimited numbers passed as an argument, read from a file, or piped
//! on stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::debug;
use serde::Serialize;

use string_calculator::{calculate, Calculation};

// ── Input helpers ─────────────────────────────────────────────────────────────

fn read_input(input: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = input {
        return Ok(text);
    }

    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            buf
        }
    };

    Ok(strip_trailing_newline(raw))
}

/// Drop the single line ending that `echo` and editors append.
fn strip_trailing_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

/// Expand `\n`, `\r`, `\t` and `\\` so headers can be typed on one line.
fn unescape(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(anyhow!("unknown escape sequence '\\{other}'")),
            None => return Err(anyhow!("input ends with a lone backslash")),
        }
    }

    Ok(out)
}

// ── Output helpers ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    negatives: Option<&'a [i64]>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn print_details(calculation: &Calculation) {
    eprintln!("Delimiters: {}", calculation.delimiters);
    eprintln!(
        "Numbers:    {}",
        calculation
            .numbers
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    eprintln!("Count:      {}", calculation.count());
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// strcalc — sum a delimited string of integers.
#[derive(Parser, Debug)]
#[command(
    name = "strcalc",
    about = "String calculator CLI",
    version,
    long_about = "strcalc — String calculator CLI\n\nSums numbers separated by ',' or newlines, or by a custom delimiter\ndeclared with a leading \"//X\\n\" header. Negative numbers are rejected.\nUse `--` before an input that starts with '-'."
)]
struct Cli {
    /// Input string (read from stdin when neither INPUT nor --file is given)
    #[arg(conflicts_with = "file")]
    input: Option<String>,

    /// Read the input from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Interpret \n, \r, \t and \\ escape sequences in the input
    #[arg(short, long)]
    escapes: bool,

    /// Print the full calculation as JSON
    #[arg(long)]
    json: bool,

    /// Print delimiters and parsed numbers to stderr
    #[arg(short, long)]
    verbose: bool,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let raw = read_input(cli.input, cli.file.as_deref())?;
    let input = if cli.escapes { unescape(&raw)? } else { raw };
    debug!("input: {input:?}");

    cmd_sum(&input, cli.json, cli.verbose)
}

// ── Command implementations ───────────────────────────────────────────────────

/// `strcalc [--json] [--verbose] INPUT`
fn cmd_sum(input: &str, json: bool, verbose: bool) -> Result<()> {
    let calculation = match calculate(input) {
        Ok(calculation) => calculation,
        Err(err) => {
            if json {
                print_json(&ErrorReport {
                    error: err.to_string(),
                    negatives: err.negatives(),
                })?;
            }
            return Err(err.into());
        }
    };

    if verbose {
        print_details(&calculation);
    }

    if json {
        print_json(&calculation)?;
    } else {
        println!("{}", calculation.sum);
    }

    Ok(())
}
