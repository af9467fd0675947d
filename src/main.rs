//! # restack - Main Entry Point
//!
//! Reads a raw Weex stack trace from a file argument or stdin, loads the
//! shim and bundle source maps, and prints the resolved stack one frame
//! per line (or as JSON with `--json`).

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::io::Read;

use restack::cli::Args;
use restack::domain::StackError;
use restack::parser::RawStack;
use restack::resolver::resolve_stack;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StackError>() {
        Some(StackError::InvalidInput(_)) => EXIT_USAGE,
        _ => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let text = read_stack_text(&args)?;
    let stack = interpret_stack_text(&text)?;
    let resolved = resolve_stack(&args.shim_map, &args.bundle_map, &stack)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        for frame in &resolved {
            println!("{frame}");
        }
    }

    if !args.quiet {
        eprintln!("{} frame(s) resolved", resolved.len());
    }
    Ok(())
}

/// Read the raw stack text from the file argument or stdin.
fn read_stack_text(args: &Args) -> Result<String> {
    match &args.stack {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stack file {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stack from stdin")?;
            Ok(buf)
        }
    }
}

/// Stack text on the wire is either a JSON value (a string, or an array of
/// per-frame strings) or plain text with one frame per line. A JSON value
/// of any other shape is invalid input, matching the library contract.
fn interpret_stack_text(text: &str) -> Result<RawStack> {
    let trimmed = text.trim_end_matches('\n');
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        debug!("stack input parsed as JSON");
        return Ok(RawStack::from_json(&value)?);
    }
    Ok(RawStack::Text(trimmed.to_string()))
}
