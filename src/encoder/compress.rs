// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compression mode selection.
//!
//! Post-encoding compression is explicitly out of scope for this core.
//! `CompressionMode` exists so the header can declare the requested mode
//! (the wire format reserves the bits for it), but only `Raw` is actually
//! implemented. Requesting either snappy variant fails the whole `dump`
//! with [`EncodeError::NotImplemented`] before any encoding work happens.

use super::error::{EncodeError, EncodeResult};
use super::wire::{ENCODING_RAW, ENCODING_SNAPPY, ENCODING_SNAPPY_INCREMENTAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionMode {
    #[default]
    Raw,
    Snappy,
    SnappyIncremental,
}

impl CompressionMode {
    /// The bits this mode contributes to the header's version/flags byte.
    pub fn header_bits(self) -> u8 {
        match self {
            CompressionMode::Raw => ENCODING_RAW,
            CompressionMode::Snappy => ENCODING_SNAPPY,
            CompressionMode::SnappyIncremental => ENCODING_SNAPPY_INCREMENTAL,
        }
    }

    /// Reject unsupported modes up front. `Raw` always succeeds as a no-op.
    pub fn check_supported(self) -> EncodeResult<()> {
        match self {
            CompressionMode::Raw => Ok(()),
            CompressionMode::Snappy => Err(EncodeError::NotImplemented("snappy compression")),
            CompressionMode::SnappyIncremental => {
                Err(EncodeError::NotImplemented("incremental snappy compression"))
            }
        }
    }
}
