// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the encoder core.
//!
//! A plain enum with a hand-written `Display`, in the style the rest of this
//! crate's binary-format code uses `io::Error` with a contextual message
//! rather than a `thiserror` derive.

use std::error::Error;
use std::fmt;

/// Everything that can go wrong while encoding a value tree.
#[derive(Debug)]
pub enum EncodeError {
    /// Buffer growth or seen-table insertion failed.
    OutOfMemory,
    /// The encoder-configured recursion ceiling was exceeded.
    RecursionLimit { depth: usize, limit: usize },
    /// The input value classified as an unsupported type.
    UnsupportedType(String),
    /// A requested feature (currently: snappy compression) isn't built.
    NotImplemented(&'static str),
    /// The value-model adapter reported a failure (e.g. malformed input
    /// on the way from an external representation into `Value`).
    HostError(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::OutOfMemory => write!(f, "out of memory while encoding"),
            EncodeError::RecursionLimit { depth, limit } => write!(
                f,
                "recursion limit exceeded: depth {depth} > configured limit {limit}"
            ),
            EncodeError::UnsupportedType(name) => {
                write!(f, "type not implemented: {name}")
            }
            EncodeError::NotImplemented(feature) => {
                write!(f, "not implemented: {feature}")
            }
            EncodeError::HostError(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl Error for EncodeError {}

pub type EncodeResult<T> = Result<T, EncodeError>;
