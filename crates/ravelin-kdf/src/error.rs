// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Key-derivation errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// At least one iteration is required.
    #[error("iteration count must be at least 1")]
    InvalidIterationCount,

    /// Salt below the 8-byte minimum.
    #[error("salt is {0} bytes, the minimum is 8")]
    SaltTooShort(usize),

    /// Cipher keys for the cipher-iterated mode are exactly 32 bytes.
    #[error("cipher key is {0} bytes, expected exactly 32")]
    InvalidCipherKeyLength(usize),

    /// The instance was disposed; build a new one.
    #[error("derivation instance already disposed")]
    Disposed,
}
