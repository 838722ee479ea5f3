// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Back-reference tracking: a mapping from input-value identity to the
//! byte offset at which that value's tagged encoding begins.
//!
//! Grounded on this crate's dictionary-table pattern (`util::dict_table`),
//! generalized from content-keyed string interning to identity-keyed
//! offset tracking: where `DictTable` maps a string's *content* to a
//! compact index, `SeenTable` maps a value's *address* to a byte offset,
//! because the wire format's `COPY`/`REFP` back-references point at
//! positions in the output stream, not at a dictionary slot.

use std::collections::HashMap;

use super::value::ValueId;

/// Lazily-allocated identity → offset table, one per `dump` call.
#[derive(Debug, Default)]
pub struct SeenTable {
    offsets: Option<HashMap<ValueId, usize>>,
}

/// Initial capacity for the backing map, allocated on first insertion.
const INITIAL_CAPACITY: usize = 4;

impl SeenTable {
    pub fn new() -> Self {
        Self { offsets: None }
    }

    /// Offset at which `id` was first emitted, if seen before in this call.
    pub fn get(&self, id: ValueId) -> Option<usize> {
        self.offsets.as_ref()?.get(&id).copied()
    }

    /// Record that `id`'s tagged encoding begins at `offset`. Allocates the
    /// backing map on first use.
    pub fn insert(&mut self, id: ValueId, offset: usize) {
        self.offsets
            .get_or_insert_with(|| HashMap::with_capacity(INITIAL_CAPACITY))
            .insert(id, offset);
    }

    /// Drop all tracked offsets, so a reused encoder doesn't leak positions
    /// from a previous `dump` into the next one.
    pub fn clear(&mut self) {
        self.offsets = None;
    }
}
