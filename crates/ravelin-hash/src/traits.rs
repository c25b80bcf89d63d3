// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::HashError;

/// Capability trait for incremental hashers.
///
/// A deliberately small seam: absorb bytes, squeeze a digest, start over.
/// Implementations keep their own parameterization (output length, keys,
/// salts) and restore it on [`reset`](Digestive::reset).
pub trait Digestive {
    /// Absorbs `data` into the hash state.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Finalized`] if the hasher was finalized and
    /// not yet reset.
    fn update(&mut self, data: &[u8]) -> Result<(), HashError>;

    /// Writes the digest into `out` and marks the hasher finalized.
    ///
    /// `out` must be exactly [`output_len`](Digestive::output_len) bytes.
    /// A second finalize without an intervening reset fails with
    /// [`HashError::Finalized`].
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError>;

    /// Restores the hasher to its freshly-initialized state.
    fn reset(&mut self);

    /// Digest length in bytes.
    fn output_len(&self) -> usize;
}
