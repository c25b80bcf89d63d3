// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_envelope
//!
//! Self-describing authenticated envelope encryption.
//!
//! An envelope carries everything needed to decrypt it (except the key):
//! a header with the keyed-hash choice, iteration count, salts and IV,
//! followed by optional caller metadata, an HMAC tag, and the ciphertext.
//! Cipher and MAC keys are stretched independently from the caller's key
//! with PBKDF2 over per-envelope random salts, so envelopes never share
//! key material even under one password.
//!
//! Decryption authenticates before it decrypts: the tag is recomputed and
//! compared in constant time, and no block is deciphered until it matches.
//!
//! [`SealedBox`] rides along as a small AES-256-GCM container for callers
//! that hold a full-strength key and do not need password stretching.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_envelope::EnvelopeProvider;
//!
//! let provider = EnvelopeProvider::new();
//! let envelope = provider
//!     .encrypt(b"hello world", b"a passphrase", None)
//!     .expect("Failed to encrypt(..)");
//!
//! let (plaintext, metadata) = provider
//!     .decrypt(&envelope, b"a passphrase")
//!     .expect("Failed to decrypt(..)");
//! assert_eq!(plaintext, b"hello world");
//! assert!(metadata.is_none());
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod cbc;
mod error;
mod header;
mod provider;
mod sealed;

pub use error::EnvelopeError;
pub use header::{ENVELOPE_VERSION, EnvelopeHeader, IV_LEN};
pub use provider::{DEFAULT_ITERATIONS, EnvelopeProvider, SALT_LEN};
pub use sealed::{SEALED_NONCE_LEN, SEALED_TAG_LEN, SealedBox};
