// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_rand
//!
//! Cryptographically secure random number generation for the Ravelin stack.
//!
//! Wraps the OS CSPRNG behind the [`EntropySource`] trait and layers typed
//! draws and nonce bookkeeping on top of it.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`SecureRandom`]: typed draws (raw bytes, fixed-width integers,
//!   bias-free bounded integers, non-zero byte fills)
//! - [`NonceRegistry`]: tracked nonce issuance with process-lifetime
//!   uniqueness guarantees
//!
//! ## Example
//!
//! ```rust
//! use ravelin_rand::{SecureRandom, SystemEntropySource};
//!
//! let mut rng = SecureRandom::new(SystemEntropySource);
//!
//! let mut key = [0u8; 32];
//! rng.fill_bytes(&mut key).expect("Failed to generate entropy");
//!
//! let die = rng.next_u64_below(6).expect("Failed to draw") + 1;
//! assert!((1..=6).contains(&die));
//! ```
//!
//! ## Platform Support
//!
//! All platforms supported by `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod generate_key;
mod registry;
mod secure_random;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use generate_key::generate_random_key;
pub use registry::NonceRegistry;
pub use secure_random::SecureRandom;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
