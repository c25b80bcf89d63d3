// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_cipher::CipherError;
use ravelin_hash::HashError;
use ravelin_rand::EntropyError;
use thiserror::Error;

/// Secret container errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretError {
    /// The protection key could not be generated.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// The protection cipher rejected its parameters.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Fingerprinting failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// The container was disposed; its contents are gone.
    #[error("secret container disposed")]
    Disposed,

    /// The destination buffer does not match the secret's length.
    #[error("destination is {actual} bytes, secret is {expected}")]
    LengthMismatch {
        /// The secret's plaintext length.
        expected: usize,
        /// The provided buffer length.
        actual: usize,
    },
}
