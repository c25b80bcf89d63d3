// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Umbrella error chaining every member crate's error type.
///
/// Each member crate keeps its own focused error enum; this type exists
/// for callers that compose several layers (say, a key derivation feeding
/// an envelope feeding a stream) and want a single `?`-friendly return
/// type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entropy(#[from] ravelin_rand::EntropyError),

    #[error(transparent)]
    Cipher(#[from] ravelin_cipher::CipherError),

    #[error(transparent)]
    Hash(#[from] ravelin_hash::HashError),

    #[error(transparent)]
    Kdf(#[from] ravelin_kdf::KdfError),

    #[error(transparent)]
    Envelope(#[from] ravelin_envelope::EnvelopeError),

    #[error(transparent)]
    Stream(#[from] ravelin_stream::StreamError),

    #[error(transparent)]
    Secret(#[from] ravelin_secret::SecretError),
}
