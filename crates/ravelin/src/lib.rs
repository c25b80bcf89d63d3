// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Cryptographic primitives and in-memory secret protection for Rust.</em></p>
//!
//! ---
//!
//! Ravelin bundles a small family of crates: stream ciphers and hashing
//! at the bottom, key derivation and authenticated envelopes in the
//! middle, and framed streams plus encrypted-at-rest secret containers
//! on top.
//!
//! # Features
//!
//! - 🔑 **Key derivation** — PBKDF2-style and cipher-iterated stretching
//!   with incremental `derive` output
//! - ✉️ **Authenticated envelopes** — password-based encryption with a
//!   self-describing header and mandatory authenticate-then-decrypt
//! - 🌊 **Framed streams** — per-frame digests and sequence numbers over
//!   any `Read`/`Write` pair
//! - 🔐 **Secret containers** — secrets held encrypted in process
//!   memory, compared by fingerprint, zeroized on drop
//! - 🧹 **Zeroization throughout** — every intermediate buffer is wiped
//!   on every exit path
//! - 📦 **`no_std` leaf crates** — ciphers, hashing, and key derivation
//!   work without the standard library
//!
//! # Installation
//!
//! ```bash
//! cargo add ravelin
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ravelin::envelope::EnvelopeProvider;
//! use ravelin::secret::{ProtectionContext, SecretContainer};
//!
//! fn main() -> Result<(), ravelin::Error> {
//!     // Password-based authenticated encryption
//!     let provider = EnvelopeProvider::new();
//!     let envelope = provider.encrypt(b"attack at dawn", b"correct horse battery staple", None)?;
//!     let (plaintext, _metadata) = provider.decrypt(&envelope, b"correct horse battery staple")?;
//!     assert_eq!(&plaintext[..], b"attack at dawn");
//!
//!     // Secrets encrypted at rest in process memory
//!     let ctx = ProtectionContext::global();
//!     let mut password = *b"hunter2";
//!     let secret = SecretContainer::new(ctx, &mut password)?;
//!     assert_eq!(password, [0u8; 7]); // source wiped
//!     assert!(secret.eq_bytes(b"hunter2")?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Provides |
//! |--------|-------|----------|
//! | [`rand`] | `ravelin-rand` | OS entropy, key generation, nonce registry |
//! | [`cipher`] | `ravelin-cipher` | ChaCha20 and Salsa20 keystream ciphers |
//! | [`hash`] | `ravelin-hash` | Incremental Blake2b, SHA-2, keyed HMAC |
//! | [`kdf`] | `ravelin-kdf` | PBKDF2-style and cipher-iterated derivation |
//! | [`envelope`] | `ravelin-envelope` | Password-based authenticated envelopes |
//! | [`stream`] | `ravelin-stream` | Framed authenticated read/write streams |
//! | [`secret`] | `ravelin-secret` | Encrypted-at-rest secret containers |
//!
//! # Security
//!
//! - **Authenticate then decrypt**: envelope and frame tags are verified
//!   in constant time before any ciphertext is touched
//! - **Redacted `Debug`**: no type holding key material ever prints it
//! - **Source buffers are consumed**: constructors take `&mut` plaintext
//!   and zeroize it, so the caller's copy does not linger
//!
//! # License
//!
//! GPL-3.0-only

pub mod error;

pub use error::Error;

pub use ravelin_cipher as cipher;
pub use ravelin_envelope as envelope;
pub use ravelin_hash as hash;
pub use ravelin_kdf as kdf;
pub use ravelin_rand as rand;
pub use ravelin_secret as secret;
pub use ravelin_stream as stream;
