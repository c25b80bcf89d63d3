// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic entropy source producing a repeatable byte stream.
///
/// Bytes come from a counter seeded at construction, so two sources built
/// with the same seed produce identical output. Useful for pinning salts,
/// IVs and nonces in end-to-end tests.
pub struct FixedEntropySource {
    position: Cell<u64>,
}

impl FixedEntropySource {
    /// Creates a source whose stream starts at `seed`.
    ///
    /// A zero seed is remapped to a fixed constant; zero is an absorbing
    /// state for the xorshift step below.
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self {
            position: Cell::new(seed),
        }
    }
}

impl EntropySource for FixedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut position = self.position.get();
        for byte in dest.iter_mut() {
            // xorshift keeps the stream non-repeating without being random
            position ^= position << 13;
            position ^= position >> 7;
            position ^= position << 17;
            *byte = (position >> 32) as u8;
        }
        self.position.set(position);
        Ok(())
    }
}

impl core::fmt::Debug for FixedEntropySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FixedEntropySource {{ position: {} }}", self.position.get())
    }
}
