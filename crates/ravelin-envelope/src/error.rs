// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_hash::HashError;
use ravelin_kdf::KdfError;
use ravelin_rand::EntropyError;
use thiserror::Error;

/// Envelope encryption errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Entropy for salts, IVs, or nonces could not be gathered.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// Key stretching failed.
    #[error(transparent)]
    Kdf(#[from] KdfError),

    /// Keyed-hash resolution failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// The envelope version is not one this build understands.
    #[error("unsupported envelope version {0}")]
    UnsupportedVersion(i16),

    /// The input ended before the declared structure did.
    #[error("envelope truncated")]
    Truncated,

    /// A header field is out of range.
    #[error("malformed envelope header")]
    MalformedHeader,

    /// The authentication tag did not match, or the ciphertext failed to
    /// decipher cleanly. No plaintext is ever returned on this path.
    #[error("integrity check failed")]
    IntegrityCheckFailed,

    /// The AEAD backend rejected the encryption request.
    #[error("encryption failed")]
    EncryptionFailed,
}
