// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growable output buffer with a checked/unchecked append split.
//!
//! `reserve` is the checked layer: it grows the backing `Vec<u8>` (at least
//! doubling, which is `Vec`'s own growth policy) and surfaces an
//! [`EncodeError::OutOfMemory`] on allocation failure instead of aborting.
//! Everything prefixed `*_unchecked` assumes a prior `reserve` already
//! covers the bytes about to be appended in the same region. Callers sum
//! up every unchecked append that follows a `reserve` call and pass that
//! total in, mirroring how `binary/encoding.rs` pairs `encode_varint` with a
//! single `Vec::extend_from_slice` per section instead of re-checking
//! capacity on every push.

use super::error::{EncodeError, EncodeResult};
use super::varint::{encode_tag_varint, encode_varint, zigzag_encode};

/// Initial backing capacity for a freshly constructed encoder buffer.
pub const INITIAL_BUFFER_SIZE: usize = 1024;

#[derive(Debug, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Ensure room for `additional` more bytes, growing if needed.
    pub fn reserve(&mut self, additional: usize) -> EncodeResult<()> {
        self.bytes
            .try_reserve(additional)
            .map_err(|_| EncodeError::OutOfMemory)
    }

    /// Append a single byte. Caller must have reserved capacity for it.
    pub fn push_byte_unchecked(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append a byte slice. Caller must have reserved capacity for it.
    pub fn push_bytes_unchecked(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    /// Append a varint. Caller must have reserved `MAX_VARINT_LENGTH` bytes
    /// (or a tighter known bound) ahead of time.
    pub fn push_varint_unchecked(&mut self, value: u64) {
        encode_varint(value, &mut self.bytes);
    }

    /// Append a tag byte followed by a varint body.
    pub fn push_tag_varint_unchecked(&mut self, tag: u8, value: u64) {
        encode_tag_varint(tag, value, &mut self.bytes);
    }

    /// Append a zigzag-encoded signed integer as a varint.
    pub fn push_zigzag_unchecked(&mut self, value: i64) {
        encode_varint(zigzag_encode(value), &mut self.bytes);
    }

    /// Append a little-endian IEEE-754 double, no capacity check.
    pub fn push_f64_le_unchecked(&mut self, value: f64) {
        self.bytes.extend_from_slice(&value.to_le_bytes());
    }

    /// Flip the flag bit of an already-emitted tag byte at `offset`,
    /// marking it as the target of a later `REFP`.
    ///
    /// This is the offset-indexed mutation primitive the wire format needs:
    /// the flag bit can only be set after the fact, once a value is seen a
    /// second time, so the buffer must expose more than append.
    pub fn set_high_bit(&mut self, offset: usize) {
        self.bytes[offset] |= super::wire::FLAG_BIT;
    }

    /// Reset the write cursor to the start without releasing the backing
    /// allocation, so the encoder can be reused across `dump` calls.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}
