// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors produced by entropy sources and the nonce registry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The system entropy source is unavailable or failed to produce data.
    #[error("system entropy source not available")]
    EntropyNotAvailable,

    /// A bounded draw was requested with an upper bound of zero.
    #[error("upper bound must be non-zero")]
    UpperBoundZero,

    /// A nonce of zero length was requested from the registry.
    #[error("nonce length must be non-zero")]
    NonceLengthZero,

    /// The registry could not find a fresh nonce within the retry budget.
    ///
    /// Only reachable for very small nonce sizes with many outstanding
    /// entries; the nonce space is genuinely exhausted at that point.
    #[error("nonce space exhausted after {0} attempts")]
    NonceSpaceExhausted(usize),

    /// The registry lock was poisoned by a panicking thread.
    #[error("nonce registry mutex poisoned")]
    RegistryPoisoned,
}
