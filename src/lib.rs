// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A tagged binary value encoder with identity-based back-reference
//! deduplication.
//!
//! Given an in-memory [`encoder::Value`] tree, [`encoder::Encoder::dump`]
//! produces a self-describing byte stream: small integers pack into a
//! single tag byte, larger ones fall back to varint/zigzag bodies, and any
//! value that's been seen before (by identity, not equal content) is
//! replaced by a short back-reference instead of being re-emitted in full.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐   ┌──────────┐   ┌─────────┐
//! │  value.rs │──▶│ mod.rs   │──▶│ wire.rs │
//! │ (Value,   │   │(Encoder, │   │ (tags,  │
//! │ identity) │   │dispatch, │   │ magic)  │
//! └───────────┘   │ emitters)│   └─────────┘
//!                 └────┬─────┘
//!          ┌───────────┼───────────┐
//!          ▼           ▼           ▼
//!    ┌─────────┐ ┌──────────┐ ┌─────────┐
//!    │ seen.rs │ │ guard.rs │ │buffer.rs│
//!    │(offsets)│ │(recursion│ │(output) │
//!    └─────────┘ └──────────┘ └─────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use serel::encoder::{Encoder, EncoderOptions, Value};
//!
//! let mut encoder = Encoder::new(EncoderOptions::default());
//! let bytes = encoder
//!     .dump(&Value::list(vec![Value::int(1), Value::int(2)]))
//!     .unwrap();
//! assert!(!bytes.is_empty());
//! ```

pub mod encoder;

pub use encoder::{
    CompressionMode, EncodeError, EncodeResult, Encoder, EncoderOptions, Kind, Value,
};
