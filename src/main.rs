// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! serel CLI: encode a JSON document into the tagged binary wire format.
//!
//! ```bash
//! serel encode --input value.json --output value.bin
//! echo '[1, 2, 3]' | serel encode > value.bin
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use serel::encoder::{json_to_value, EncodeError, Encoder, EncoderOptions};

mod cli;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            max_recursion_depth,
        } => run_encode(input, output, max_recursion_depth),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_encode(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    max_recursion_depth: usize,
) -> Result<(), String> {
    let raw = read_input(input).map_err(|e| format!("reading input: {e}"))?;
    let json: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| format!("parsing JSON: {e}"))?;
    let value = json_to_value(&json).map_err(|e| format!("converting to value: {e}"))?;

    let mut encoder = Encoder::new(EncoderOptions {
        max_recursion_depth,
        ..Default::default()
    });
    let encoded = encoder.dump(&value).map_err(describe_encode_error)?;

    write_output(output, &encoded).map_err(|e| format!("writing output: {e}"))
}

fn describe_encode_error(err: EncodeError) -> String {
    err.to_string()
}

fn read_input(path: Option<PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<PathBuf>, bytes: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, bytes),
        None => io::stdout().write_all(bytes),
    }
}
