// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI argument surface: a single `encode` subcommand.
//!
//! A `#[derive(Parser)]`/`Subcommand` layout, trimmed to the one operation
//! this crate supports. No colored terminal output module here: there are
//! no search results to format, just a success/failure exit code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "serel", about = "Tagged binary value encoder", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a JSON document into the tagged binary wire format.
    Encode {
        /// Input JSON file. Reads stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the encoded bytes. Writes stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Recursion ceiling passed to the encoder. 0 means unbounded.
        #[arg(long, default_value_t = 0)]
        max_recursion_depth: usize,
    },
}
