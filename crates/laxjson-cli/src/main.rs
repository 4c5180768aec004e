//! `laxjson` CLI: inspect JSON documents with the permissive reader.
//!
//! ## Usage
//!
//! ```sh
//! # Inspect a document (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | laxjson inspect
//!
//! # Inspect from file to file
//! laxjson inspect -i data.json -o data.txt
//!
//! # Report the parse outcome (exit 1 if the input degraded)
//! laxjson check -i data.json
//! ```
//!
//! `inspect` renders the parsed tree as an indented listing. A document that
//! parses to a bare null (empty input, garbage input, or a literal `null`
//! document, indistinguishable at the value level) is rejected as invalid.
//! `check` looks at the outcome channel instead, which does distinguish a
//! clean `null` from garbage.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use laxjson_core::Outcome;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "laxjson", version, about = "Permissive JSON inspection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print the rendered tree
    Inspect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a document and report whether the parse degraded
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { input, output } => {
            let text = read_input(input.as_deref())?;
            let parsed = laxjson_core::parse(&text);
            if parsed.value.is_null() {
                bail!("Invalid JSON structure");
            }
            let listing = laxjson_core::render(&parsed.value);
            write_output(output.as_deref(), &listing)?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            let parsed = laxjson_core::parse(&text);
            match parsed.outcome {
                Outcome::Clean => println!("clean"),
                Outcome::Malformed(reason) => {
                    println!("malformed: {reason}");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
