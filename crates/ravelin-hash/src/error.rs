// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hashing errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// Output length must be 1..=64 bytes for Blake2b.
    #[error("invalid output length {0}, expected 1..=64 bytes")]
    InvalidOutputLength(usize),

    /// Blake2b keys are limited to 128 bytes.
    #[error("key length {0} exceeds the 128-byte maximum")]
    KeyTooLong(usize),

    /// Salt must be exactly 16 bytes when supplied.
    #[error("invalid salt length {0}, expected exactly 16 bytes")]
    InvalidSaltLength(usize),

    /// Personalization must be exactly 16 bytes when supplied.
    #[error("invalid personalization length {0}, expected exactly 16 bytes")]
    InvalidPersonalizationLength(usize),

    /// The output buffer does not match the configured digest length.
    #[error("output buffer is {actual} bytes, digest needs {expected}")]
    OutputBufferMismatch {
        /// Configured digest length.
        expected: usize,
        /// Provided buffer length.
        actual: usize,
    },

    /// The hasher was already finalized; call `reset` before reusing it.
    #[error("hasher already finalized")]
    Finalized,

    /// Unknown keyed-hash algorithm identifier on the wire.
    #[error("unsupported keyed-hash algorithm id {0}")]
    UnsupportedAlgorithm(i16),
}
