// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Generates a fresh random key of `M` bytes from the given entropy source.
///
/// # Example
///
/// ```rust
/// use ravelin_rand::{SystemEntropySource, generate_random_key};
///
/// let mut key = [0u8; 32];
/// generate_random_key(&SystemEntropySource, &mut key)
///     .expect("Failed to generate key");
/// ```
pub fn generate_random_key<const M: usize, E: EntropySource>(
    entropy: &E,
    output_key: &mut [u8; M],
) -> Result<(), EntropyError> {
    entropy.fill_bytes(output_key)
}
