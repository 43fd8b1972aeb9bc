//! jsonv CLI.
//!
//! Checks whether a file or interactively entered text is properly
//! formatted JSON and reports a one-line verdict.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jsonv")]
#[command(about = "Checks whether a document is properly formatted JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// File to parse; reads lines interactively until a blank line when
    /// omitted
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let text = match read_input(cli.file.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match jsonv::parse(&text) {
        Ok(_) => {
            println!("Success: parsed input");
            ExitCode::SUCCESS
        }
        // One undifferentiated verdict; the reason stays in the library.
        Err(_) => {
            println!("Error: input is not properly formatted JSON");
            ExitCode::FAILURE
        }
    }
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => read_interactive(),
    }
}

/// Prompt for lines on stdin and accumulate them, newline-joined, until a
/// blank line or end of input.
fn read_interactive() -> io::Result<String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut text = String::new();

    loop {
        print!("Input text: ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => {
                let line = line?;
                if line.is_empty() {
                    break;
                }
                text.push_str(&line);
                text.push('\n');
            }
            None => break,
        }
    }

    Ok(text)
}
