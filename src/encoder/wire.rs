// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire-protocol constants: magic bytes, tag bytes, and masks.
//!
//! The alphabet follows a Sereal v1-style tagged encoding: every value
//! starts with a tag byte that either carries a small inline payload in its
//! low bits, or introduces a varint/fixed-width body that follows. Tag
//! ranges are laid out so that low-bit-packed forms (`POS_LOW`, `NEG_LOW`,
//! `SHORT_BINARY_LOW`, `ARRAYREF_LOW`) each own a disjoint byte range, and
//! every tag stays below the flag bit (`0x80`) so a decoder can always mask
//! it off without ambiguity.

/// Stream preamble magic bytes.
pub const MAGIC: [u8; 4] = [0x3d, 0xf3, 0x72, 0x6c];

/// Protocol version embedded in the low nibble of the version/flags byte.
pub const PROTOCOL_VERSION: u8 = 1;

/// Encoding kind packed into the high nibble of the version/flags byte.
pub const ENCODING_RAW: u8 = 0b0000_0000;
pub const ENCODING_SNAPPY: u8 = 0b0001_0000;
pub const ENCODING_SNAPPY_INCREMENTAL: u8 = 0b0010_0000;

/// Top bit of a tag byte: marks the tag's position as referenceable by a
/// later `REFP`. Decoders mask it off when reading the tag's identity.
pub const FLAG_BIT: u8 = 0x80;

/// Inline non-negative integers `n in [0, 15]` are `POS_LOW | n` (occupies
/// tag bytes `0x00..=0x0F`).
pub const POS_LOW: u8 = 0x00;
/// Inline small negative integers `n in [-16, -1]` are `NEG_LOW | (n + 32)`
/// (occupies tag bytes `0x30..=0x3F`, since `n + 32` ranges over `16..=31`).
pub const NEG_LOW: u8 = 0x20;

pub const VARINT: u8 = 0x10;
pub const ZIGZAG: u8 = 0x11;
pub const DOUBLE: u8 = 0x12;

pub const TRUE: u8 = 0x13;
pub const FALSE: u8 = 0x14;

pub const BINARY: u8 = 0x15;
pub const STR_UTF8: u8 = 0x16;

pub const REFN: u8 = 0x17;
pub const ARRAY: u8 = 0x18;
pub const REFP: u8 = 0x19;
pub const COPY: u8 = 0x1a;

/// Short byte strings (`len <= 31`) are `SHORT_BINARY_LOW | len` (occupies
/// tag bytes `0x40..=0x5F`).
pub const SHORT_BINARY_LOW: u8 = 0x40;

/// Small referenceable arrays (`len <= 15`) are `ARRAYREF_LOW | len`
/// (occupies tag bytes `0x60..=0x6F`).
pub const ARRAYREF_LOW: u8 = 0x60;

/// Largest non-negative integer that fits the `POS_LOW` inline form.
pub const POS_LOW_MAX: i64 = 15;
/// Smallest negative integer that fits the `NEG_LOW` inline form.
pub const NEG_LOW_MIN: i64 = -16;
/// Largest length that fits a `SHORT_BINARY_LOW` tag.
pub const SHORT_BINARY_MAX_LEN: usize = 31;
/// Largest length that fits an `ARRAYREF_LOW` tag.
pub const ARRAYREF_MAX_LEN: usize = 15;
