// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared cipher constants.

/// Keystream block size in bytes, common to ChaCha20 and Salsa20.
pub const BLOCK_SIZE: usize = 64;

/// 128-bit key length in bytes.
pub const KEY_LEN_128: usize = 16;

/// 256-bit key length in bytes.
pub const KEY_LEN_256: usize = 32;

/// Default double-round count (ChaCha20/Salsa20 "20 rounds").
pub const DEFAULT_ROUNDS: u8 = 20;

/// "expand 32-byte k", little-endian words.
pub(crate) const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// "expand 16-byte k", little-endian words.
pub(crate) const TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

/// Supported nonce lengths in bytes.
pub(crate) const NONCE_LEN_CLASSIC: usize = 8;
pub(crate) const NONCE_LEN_IETF: usize = 12;
pub(crate) const NONCE_LEN_FULL: usize = 16;
