// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_secret
//!
//! Encrypted-at-rest secret containers for process memory.
//!
//! A [`SecretContainer`] holds a secret's ciphertext and a SHA-256
//! fingerprint of its plaintext. Equality checks run over fingerprints,
//! so two containers can be compared without decrypting either; plaintext
//! is only materialized on explicit request, into buffers that are
//! zeroized afterward.
//!
//! Protection is pluggable through [`ProtectionStrategy`]. The default
//! [`KeystreamProtection`] XORs a ChaCha20 keystream keyed by a
//! process-wide key, with a per-container nonce derived from the
//! container's unique id so no two containers ever share a keystream
//! position. The key lives in a [`ProtectionContext`], which is an
//! explicit, passable object; a process-wide default is available via
//! [`ProtectionContext::global`].
//!
//! ## Example
//!
//! ```rust
//! use ravelin_secret::{ProtectionContext, SecretContainer};
//!
//! let ctx = ProtectionContext::global();
//! let mut password = *b"hunter2";
//! let secret =
//!     SecretContainer::new(ctx, &mut password).expect("Failed to build container");
//!
//! // The source buffer was zeroized on construction
//! assert_eq!(password, [0u8; 7]);
//! assert!(secret.eq_bytes(b"hunter2").expect("Failed to compare"));
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod container;
mod context;
mod error;
mod strategy;

pub use container::SecretContainer;
pub use context::ProtectionContext;
pub use error::SecretError;
pub use strategy::{KeystreamProtection, ProtectionStrategy};
