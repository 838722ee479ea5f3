// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recursion control.
//!
//! Two independent concerns live here in principle: a stack-depth guard
//! (protects the native stack against pathologically deep input) and a
//! caller-configured ceiling (protects against pathological inputs even
//! when the stack itself would tolerate them). This crate has no separate
//! host process to probe, so `RecursionGuard` plays both roles: it is the
//! single source of truth for `recursion_depth`, and `max_recursion_depth
//! == 0` means "no encoder-imposed ceiling".
//!
//! `RecursionGuard::enter` increments on success; the returned guard's
//! `Drop` impl decrements unconditionally, so an early return via `?`
//! between `enter` and the matching "leave" can never unbalance the
//! counter: there is no matching "leave" call to forget.

use std::cell::Cell;

use super::error::EncodeError;

/// Shared recursion counter, threaded through the encoder session.
#[derive(Debug, Default)]
pub struct RecursionState {
    depth: Cell<usize>,
    limit: usize,
}

impl RecursionState {
    pub fn new(limit: usize) -> Self {
        Self {
            depth: Cell::new(0),
            limit,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Enter one more level of recursion, failing if the configured ceiling
    /// (when nonzero) would be exceeded.
    pub fn enter(&self) -> Result<RecursionGuard<'_>, EncodeError> {
        let next = self.depth.get() + 1;
        if self.limit != 0 && next > self.limit {
            return Err(EncodeError::RecursionLimit {
                depth: next,
                limit: self.limit,
            });
        }
        self.depth.set(next);
        Ok(RecursionGuard { state: self })
    }
}

/// RAII scope guard: decrements `RecursionState` on drop, on every exit
/// path including an error propagated via `?`.
pub struct RecursionGuard<'a> {
    state: &'a RecursionState,
}

impl Drop for RecursionGuard<'_> {
    fn drop(&mut self) {
        self.state.depth.set(self.state.depth.get() - 1);
    }
}
