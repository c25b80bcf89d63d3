// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_cipher
//!
//! ChaCha20 and Salsa20 keystream engines.
//!
//! Both ciphers share the same add-rotate-xor quarter-round core and differ
//! only in state layout and round scheduling (ChaCha: column + diagonal
//! rounds; Salsa: column + row rounds). The implementations follow
//! RFC 8439 (ChaCha20) and the Salsa20 specification; keystream output is
//! verified against the published test vectors.
//!
//! ## Nonce modes
//!
//! Engines accept 8, 12 and 16-byte nonces:
//!
//! - **8 bytes**: classic layout, 64-bit block counter with carry
//! - **12 bytes**: IETF layout, 32-bit block counter (wraps)
//! - **16 bytes**: the nonce overwrites the counter words entirely; the
//!   caller-supplied initial counter is ignored and the counter region
//!   keeps its 64-bit per-block increment. This matches one accepted
//!   convention and is kept as an explicit mode rather than being folded
//!   into the 12-byte behavior.
//!
//! Never reuse a (key, nonce) pair across two plaintexts.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_cipher::{ChaCha20, KeystreamCipher};
//!
//! let key = [0u8; 32];
//! let nonce = [0u8; 12];
//!
//! let mut data = *b"attack at dawn";
//! ChaCha20::new(&key, &nonce, 0)
//!     .expect("Failed to build cipher")
//!     .apply_keystream(&mut data);
//!
//! let mut cipher = ChaCha20::new(&key, &nonce, 0).expect("Failed to build cipher");
//! cipher.apply_keystream(&mut data);
//! assert_eq!(&data, b"attack at dawn");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod chacha20;
mod consts;
mod error;
mod salsa20;
mod traits;

pub use chacha20::ChaCha20;
pub use consts::{BLOCK_SIZE, KEY_LEN_128, KEY_LEN_256};
pub use error::CipherError;
pub use salsa20::Salsa20;
pub use traits::KeystreamCipher;
