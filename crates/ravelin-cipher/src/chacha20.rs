// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 stream cipher implementation (RFC 8439)
//!
//! All sensitive state is zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{
    BLOCK_SIZE, DEFAULT_ROUNDS, KEY_LEN_128, KEY_LEN_256, NONCE_LEN_CLASSIC, NONCE_LEN_FULL,
    NONCE_LEN_IETF, SIGMA, TAU,
};
use crate::error::CipherError;
use crate::traits::KeystreamCipher;

/// ChaCha20 keystream engine.
///
/// State matrix layout (16 little-endian u32 words):
///
/// ```text
/// constant constant constant constant
/// key      key      key      key
/// key      key      key      key
/// counter  counter/ nonce    nonce
///          nonce
/// ```
///
/// Words 12/13 hold the 64-bit counter with an 8-byte nonce, word 12 holds
/// a 32-bit counter with a 12-byte nonce, and a 16-byte nonce overwrites
/// words 12..16 (the initial counter argument is ignored in that mode).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    state: [u32; 16],
    rounds: u8,
    counter_carry: bool,
}

impl ChaCha20 {
    /// Builds an engine with the default 20 rounds.
    ///
    /// Key must be 16 or 32 bytes, nonce 8, 12 or 16 bytes.
    pub fn new(key: &[u8], nonce: &[u8], counter: u64) -> Result<Self, CipherError> {
        Self::with_rounds(key, nonce, counter, DEFAULT_ROUNDS)
    }

    /// Builds an engine with an explicit round count (8, 12 and 20 are the
    /// published variants; any non-zero even count is accepted).
    pub fn with_rounds(
        key: &[u8],
        nonce: &[u8],
        counter: u64,
        rounds: u8,
    ) -> Result<Self, CipherError> {
        if rounds == 0 || rounds % 2 != 0 {
            return Err(CipherError::InvalidRounds(rounds));
        }

        let mut state = [0u32; 16];

        match key.len() {
            KEY_LEN_256 => {
                state[..4].copy_from_slice(&SIGMA);
                for (word, chunk) in state[4..12].iter_mut().zip(key.chunks_exact(4)) {
                    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
            }
            KEY_LEN_128 => {
                state[..4].copy_from_slice(&TAU);
                for (word, chunk) in state[4..8].iter_mut().zip(key.chunks_exact(4)) {
                    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                let (lo, hi) = state[4..12].split_at_mut(4);
                hi.copy_from_slice(lo);
            }
            len => return Err(CipherError::InvalidKeyLength(len)),
        }

        let counter_carry = match nonce.len() {
            NONCE_LEN_CLASSIC => {
                state[12] = counter as u32;
                state[13] = (counter >> 32) as u32;
                state[14] = u32::from_le_bytes([nonce[0], nonce[1], nonce[2], nonce[3]]);
                state[15] = u32::from_le_bytes([nonce[4], nonce[5], nonce[6], nonce[7]]);
                true
            }
            NONCE_LEN_IETF => {
                state[12] = counter as u32;
                for (word, chunk) in state[13..16].iter_mut().zip(nonce.chunks_exact(4)) {
                    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                false
            }
            NONCE_LEN_FULL => {
                // Nonce overwrites the counter words; `counter` is ignored
                // and the counter region keeps its 64-bit increment
                for (word, chunk) in state[12..16].iter_mut().zip(nonce.chunks_exact(4)) {
                    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                true
            }
            len => return Err(CipherError::InvalidNonceLength(len)),
        };

        Ok(Self {
            state,
            rounds,
            counter_carry,
        })
    }

    #[inline(always)]
    fn quarter_round(working: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
        working[a] = working[a].wrapping_add(working[b]);
        working[d] ^= working[a];
        working[d] = working[d].rotate_left(16);

        working[c] = working[c].wrapping_add(working[d]);
        working[b] ^= working[c];
        working[b] = working[b].rotate_left(12);

        working[a] = working[a].wrapping_add(working[b]);
        working[d] ^= working[a];
        working[d] = working[d].rotate_left(8);

        working[c] = working[c].wrapping_add(working[d]);
        working[b] ^= working[c];
        working[b] = working[b].rotate_left(7);
    }

    #[inline(always)]
    fn increment_counter(&mut self) {
        self.state[12] = self.state[12].wrapping_add(1);
        if self.state[12] == 0 && self.counter_carry {
            self.state[13] = self.state[13].wrapping_add(1);
        }
    }
}

impl KeystreamCipher for ChaCha20 {
    fn next_block(&mut self, out: &mut [u8; BLOCK_SIZE]) {
        let mut working = self.state;

        for _ in 0..self.rounds / 2 {
            // Column rounds
            Self::quarter_round(&mut working, 0, 4, 8, 12);
            Self::quarter_round(&mut working, 1, 5, 9, 13);
            Self::quarter_round(&mut working, 2, 6, 10, 14);
            Self::quarter_round(&mut working, 3, 7, 11, 15);

            // Diagonal rounds
            Self::quarter_round(&mut working, 0, 5, 10, 15);
            Self::quarter_round(&mut working, 1, 6, 11, 12);
            Self::quarter_round(&mut working, 2, 7, 8, 13);
            Self::quarter_round(&mut working, 3, 4, 9, 14);
        }

        for (i, word) in working.iter_mut().enumerate() {
            *word = word.wrapping_add(self.state[i]);
            out[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
        }
        working.zeroize();

        self.increment_counter();
    }
}

impl core::fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ChaCha20 {{ [protected] }}")
    }
}
