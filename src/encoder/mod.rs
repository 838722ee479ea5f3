// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A self-describing, tagged binary encoder with back-reference
//! deduplication.
//!
//! Given an in-memory [`Value`] tree, [`Encoder::dump`] produces a byte
//! vector that a matching decoder (out of scope for this crate) could
//! reconstruct exactly. Repeated values (by identity, not content) are
//! deduplicated into `COPY` or `REFP` back-references instead of being
//! re-encoded in full.
//!
//! ```
//! use serel::encoder::{Encoder, EncoderOptions, Value};
//!
//! let mut enc = Encoder::new(EncoderOptions::default());
//! let bytes = enc.dump(&Value::list(vec![
//!     Value::int(1),
//!     Value::int(2),
//!     Value::int(3),
//! ])).unwrap();
//! assert!(bytes.len() > 4); // at least the header was written
//! ```

pub mod buffer;
pub mod compress;
pub mod error;
pub mod guard;
pub mod json;
pub mod seen;
pub mod value;
pub mod varint;
pub mod wire;

pub use compress::CompressionMode;
pub use error::{EncodeError, EncodeResult};
pub use json::json_to_value;
pub use value::{Kind, Value};

use buffer::{OutputBuffer, INITIAL_BUFFER_SIZE};
use guard::RecursionState;
use seen::SeenTable;
use varint::{varint_len, zigzag_encode};

/// Immutable configuration, fixed at [`Encoder::new`] time.
#[derive(Debug, Clone, Copy)]
pub struct EncoderOptions {
    /// Reserved for future dictionary support; has no observable effect in
    /// this core. Defaults to `true` to match the protocol's documented
    /// default.
    pub shared_hashkeys: bool,
    /// Which compression mode the header should declare. Only `Raw` is
    /// implemented; the others make `dump` fail immediately.
    pub compression: CompressionMode,
    /// Encoder-imposed recursion ceiling. `0` means no ceiling.
    pub max_recursion_depth: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            shared_hashkeys: true,
            compression: CompressionMode::Raw,
            max_recursion_depth: 0,
        }
    }
}

/// An encoder session: owns the output buffer, the back-reference table,
/// and the recursion counter for one or more successive `dump` calls.
pub struct Encoder {
    buffer: OutputBuffer,
    seen: SeenTable,
    recursion: RecursionState,
    options: EncoderOptions,
}

impl Encoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            buffer: OutputBuffer::with_capacity(INITIAL_BUFFER_SIZE),
            seen: SeenTable::new(),
            recursion: RecursionState::new(options.max_recursion_depth),
            options,
        }
    }

    /// Reset for reuse: drops the seen table (so offsets from the previous
    /// call can't leak into this one) and rewinds the write cursor, without
    /// releasing the backing allocation.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.seen.clear();
    }

    /// Encode `value` into one complete, self-delimited byte stream.
    pub fn dump(&mut self, value: &Value) -> EncodeResult<Vec<u8>> {
        self.options.compression.check_supported()?;
        self.reset();
        self.write_header()?;
        self.encode_value(value)?;
        // Take the buffer's contents and leave a fresh empty one behind so
        // the session is immediately reusable.
        let written = std::mem::replace(&mut self.buffer, OutputBuffer::with_capacity(INITIAL_BUFFER_SIZE));
        Ok(written.into_vec())
    }

    fn write_header(&mut self) -> EncodeResult<()> {
        let version_and_flags = wire::PROTOCOL_VERSION | self.options.compression.header_bits();
        self.buffer.reserve(wire::MAGIC.len() + 1 + varint::MAX_VARINT_LENGTH)?;
        self.buffer.push_bytes_unchecked(&wire::MAGIC);
        self.buffer.push_byte_unchecked(version_and_flags);
        self.buffer.push_varint_unchecked(0); // HEADER_SUFFIX_LEN
        Ok(())
    }

    fn encode_value(&mut self, value: &Value) -> EncodeResult<()> {
        let _guard = self.recursion.enter()?;

        // Booleans carry no identity (two singletons; always cheapest
        // inline), so only consult/populate the seen table for the rest.
        let prior = match value.identity() {
            Some(id) => {
                let found = self.seen.get(id);
                if found.is_none() {
                    self.seen.insert(id, self.buffer.len());
                }
                found
            }
            None => None,
        };

        match value {
            Value::Bool(b) => self.emit_bool(*b),
            Value::Int(rc) => self.emit_int(**rc, prior),
            Value::Float(rc) => self.emit_float(**rc, prior),
            Value::Bytes(rc) => self.emit_bytes(rc, prior),
            Value::Str(rc) => self.emit_str(rc, prior),
            Value::List(rc) => self.emit_list(rc, prior),
        }
    }

    fn emit_bool(&mut self, b: bool) -> EncodeResult<()> {
        self.buffer.reserve(1)?;
        self.buffer
            .push_byte_unchecked(if b { wire::TRUE } else { wire::FALSE });
        Ok(())
    }

    fn emit_int(&mut self, n: i64, prior_offset: Option<usize>) -> EncodeResult<()> {
        if let Some(offset) = prior_offset {
            let direct_estimate = if n >= 0 {
                varint_len(n as u64)
            } else {
                varint_len(zigzag_encode(n))
            };
            if varint_len(offset as u64) < direct_estimate {
                self.emit_copy(offset)?;
                return Ok(());
            }
        }

        self.buffer.reserve(1 + varint::MAX_VARINT_LENGTH)?;
        if (0..=wire::POS_LOW_MAX).contains(&n) {
            self.buffer.push_byte_unchecked(wire::POS_LOW | n as u8);
        } else if (wire::NEG_LOW_MIN..0).contains(&n) {
            self.buffer
                .push_byte_unchecked(wire::NEG_LOW | (n + 32) as u8);
        } else if n >= 0 {
            self.buffer.push_tag_varint_unchecked(wire::VARINT, n as u64);
        } else {
            self.buffer.push_byte_unchecked(wire::ZIGZAG);
            self.buffer.push_zigzag_unchecked(n);
        }
        Ok(())
    }

    fn emit_float(&mut self, f: f64, prior_offset: Option<usize>) -> EncodeResult<()> {
        if let Some(offset) = prior_offset {
            if varint_len(offset as u64) < 8 {
                self.emit_copy(offset)?;
                return Ok(());
            }
        }
        self.buffer.reserve(1 + 8)?;
        self.buffer.push_byte_unchecked(wire::DOUBLE);
        self.buffer.push_f64_le_unchecked(f);
        Ok(())
    }

    fn emit_bytes(&mut self, bytes: &[u8], prior_offset: Option<usize>) -> EncodeResult<()> {
        if let Some(offset) = prior_offset {
            if varint_len(offset as u64) < bytes.len() {
                self.emit_copy(offset)?;
                return Ok(());
            }
        }
        self.buffer
            .reserve(1 + varint::MAX_VARINT_LENGTH + bytes.len())?;
        if bytes.len() <= wire::SHORT_BINARY_MAX_LEN {
            self.buffer
                .push_byte_unchecked(wire::SHORT_BINARY_LOW | bytes.len() as u8);
        } else {
            self.buffer
                .push_tag_varint_unchecked(wire::BINARY, bytes.len() as u64);
        }
        self.buffer.push_bytes_unchecked(bytes);
        Ok(())
    }

    fn emit_str(&mut self, s: &str, prior_offset: Option<usize>) -> EncodeResult<()> {
        let bytes = s.as_bytes();
        if let Some(offset) = prior_offset {
            if varint_len(offset as u64) < bytes.len() {
                self.emit_copy(offset)?;
                return Ok(());
            }
        }
        self.buffer
            .reserve(1 + varint::MAX_VARINT_LENGTH + bytes.len())?;
        self.buffer
            .push_tag_varint_unchecked(wire::STR_UTF8, bytes.len() as u64);
        self.buffer.push_bytes_unchecked(bytes);
        Ok(())
    }

    fn emit_copy(&mut self, offset: usize) -> EncodeResult<()> {
        self.buffer.reserve(1 + varint::MAX_VARINT_LENGTH)?;
        self.buffer
            .push_tag_varint_unchecked(wire::COPY, offset as u64);
        Ok(())
    }

    fn emit_list(
        &mut self,
        items: &std::cell::RefCell<Vec<Value>>,
        prior_offset: Option<usize>,
    ) -> EncodeResult<()> {
        // Entering the list emitter is a second recursion level beyond the
        // dispatcher's own guard: a list contributes 2 to depth.
        let _guard = self.recursion.enter()?;

        if let Some(stored_offset) = prior_offset {
            let len = items.borrow().len();
            let flag_offset = if len <= wire::ARRAYREF_MAX_LEN {
                stored_offset
            } else {
                stored_offset + 1
            };
            self.buffer.set_high_bit(flag_offset);
            self.buffer.reserve(1 + varint::MAX_VARINT_LENGTH)?;
            self.buffer
                .push_tag_varint_unchecked(wire::REFP, flag_offset as u64);
            return Ok(());
        }

        let len = items.borrow().len();
        self.buffer
            .reserve(2 + varint::MAX_VARINT_LENGTH)?;
        if len <= wire::ARRAYREF_MAX_LEN {
            self.buffer
                .push_byte_unchecked(wire::ARRAYREF_LOW | len as u8);
        } else {
            self.buffer.push_byte_unchecked(wire::REFN);
            self.buffer.push_tag_varint_unchecked(wire::ARRAY, len as u64);
        }

        // Borrow and clone the element handles up front so that encoding an
        // element (which may itself look back into `items` for a
        // self-reference) doesn't hold the `RefCell` borrow open.
        let elements: Vec<Value> = items.borrow().clone();
        for element in &elements {
            self.encode_value(element)?;
        }
        Ok(())
    }
}
