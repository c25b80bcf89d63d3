// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_kdf
//!
//! Password-based key stretching for the Ravelin stack.
//!
//! Two independent constructions share one `derive` / `reset` / `dispose`
//! surface:
//!
//! - [`Pbkdf2DeriveBytes`]: the HMAC-iterated PBKDF2 function of RFC 2898,
//!   parameterized over the keyed-hash closed set.
//! - [`CipherIterated`]: a legacy-compatible mode that stretches the
//!   password through repeated AES-256-ECB encryption, then expands the
//!   stretched block with a keyed hash.
//!
//! Both buffer partial blocks across `derive` calls, so
//! `derive(16)` twice equals `derive(32)` once. Both zeroize their
//! password material on drop, and an explicitly disposed instance fails
//! every further call with [`KdfError::Disposed`].
//!
//! ## Example
//!
//! ```rust
//! use ravelin_hash::KeyedHashAlgorithm;
//! use ravelin_kdf::Pbkdf2DeriveBytes;
//!
//! let mut kdf = Pbkdf2DeriveBytes::new(
//!     b"correct horse battery staple",
//!     b"at least eight bytes of salt",
//!     10_000,
//!     KeyedHashAlgorithm::HmacSha256,
//! )
//! .expect("Failed to build kdf");
//!
//! let key = kdf.derive(32).expect("Failed to derive(..)");
//! assert_eq!(key.len(), 32);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod cipher_iterated;
mod error;
mod pbkdf2;

pub use cipher_iterated::{CIPHER_KEY_LEN, CipherIterated, PACKED_PASSWORD_LEN};
pub use error::KdfError;
pub use pbkdf2::{MIN_SALT_LEN, Pbkdf2DeriveBytes};
