// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Stream cipher construction errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key must be 16 or 32 bytes.
    #[error("invalid key length {0}, expected 16 or 32 bytes")]
    InvalidKeyLength(usize),

    /// Nonce must be 8, 12 or 16 bytes.
    #[error("invalid nonce length {0}, expected 8, 12 or 16 bytes")]
    InvalidNonceLength(usize),

    /// Round count must be even and non-zero.
    #[error("invalid round count {0}, expected a non-zero even value")]
    InvalidRounds(u8),
}
