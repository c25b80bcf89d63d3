// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_hash
//!
//! Incremental hashing for the Ravelin stack.
//!
//! The core is a hand-written Blake2b (RFC 7693) with configurable output
//! length, key, salt and personalization. The SHA family rides along as
//! thin passthroughs over the RustCrypto `sha2` crate, and the closed set
//! of keyed-hash algorithms used by the envelope format lives in
//! [`KeyedHashAlgorithm`].
//!
//! All hashers implement the small [`Digestive`] capability trait
//! (`update` / `finalize_into` / `reset`) so callers can stay generic
//! without an inheritance-style hierarchy.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_hash::{Blake2b, Digestive};
//!
//! let mut hasher = Blake2b::new(32).expect("Failed to build hasher");
//! hasher.update(b"hello ").expect("Failed to update(..)");
//! hasher.update(b"world").expect("Failed to update(..)");
//!
//! let mut digest = [0u8; 32];
//! hasher.finalize_into(&mut digest).expect("Failed to finalize_into(..)");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod blake2b;
mod error;
mod keyed;
mod sha;
mod traits;

pub use blake2b::{
    BLAKE2B_BLOCK_SIZE, BLAKE2B_MAX_KEY_LEN, BLAKE2B_MAX_OUT_LEN, BLAKE2B_SALT_LEN, Blake2b,
};
pub use error::HashError;
pub use keyed::KeyedHashAlgorithm;
pub use sha::{Sha256Digest, Sha384Digest, Sha512Digest};
pub use traits::Digestive;
