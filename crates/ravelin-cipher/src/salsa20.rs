// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20 stream cipher implementation (Bernstein's specification)
//!
//! Same quarter-round core as ChaCha20 with a different state layout and
//! rotation schedule; verified against the ECRYPT test vectors.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{
    BLOCK_SIZE, DEFAULT_ROUNDS, KEY_LEN_128, KEY_LEN_256, NONCE_LEN_CLASSIC, NONCE_LEN_FULL,
    NONCE_LEN_IETF, SIGMA, TAU,
};
use crate::error::CipherError;
use crate::traits::KeystreamCipher;

/// Salsa20 keystream engine.
///
/// State matrix layout (16 little-endian u32 words): constants on the
/// diagonal (0, 5, 10, 15), key words at 1..5 and 11..15, nonce at 6/7 and
/// the 64-bit counter at 8/9.
///
/// Nonce handling mirrors [`ChaCha20`](crate::ChaCha20): an 8-byte nonce
/// leaves the full 64-bit counter, a 12-byte nonce claims word 8 and
/// narrows the counter to 32 bits, and a 16-byte nonce overwrites both
/// counter words (the initial counter argument is ignored).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Salsa20 {
    state: [u32; 16],
    rounds: u8,
    counter_carry: bool,
}

impl Salsa20 {
    /// Builds an engine with the default 20 rounds.
    ///
    /// Key must be 16 or 32 bytes, nonce 8, 12 or 16 bytes.
    pub fn new(key: &[u8], nonce: &[u8], counter: u64) -> Result<Self, CipherError> {
        Self::with_rounds(key, nonce, counter, DEFAULT_ROUNDS)
    }

    /// Builds an engine with an explicit round count.
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
        let mut key_words = [0u32; 8];

        let constants = match key.len() {
            KEY_LEN_256 => {
                for (word, chunk) in key_words.iter_mut().zip(key.chunks_exact(4)) {
                    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                SIGMA
            }
            KEY_LEN_128 => {
                for (word, chunk) in key_words[..4].iter_mut().zip(key.chunks_exact(4)) {
                    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                let (lo, hi) = key_words.split_at_mut(4);
                hi.copy_from_slice(lo);
                TAU
            }
            len => return Err(CipherError::InvalidKeyLength(len)),
        };

        state[0] = constants[0];
        state[5] = constants[1];
        state[10] = constants[2];
        state[15] = constants[3];
        state[1..5].copy_from_slice(&key_words[..4]);
        state[11..15].copy_from_slice(&key_words[4..]);
        key_words.zeroize();

        let counter_carry = match nonce.len() {
            NONCE_LEN_CLASSIC => {
                state[6] = u32::from_le_bytes([nonce[0], nonce[1], nonce[2], nonce[3]]);
                state[7] = u32::from_le_bytes([nonce[4], nonce[5], nonce[6], nonce[7]]);
                state[8] = counter as u32;
                state[9] = (counter >> 32) as u32;
                true
            }
            NONCE_LEN_IETF => {
                for (word, chunk) in state[6..9].iter_mut().zip(nonce.chunks_exact(4)) {
                    *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                }
                state[9] = counter as u32;
                false
            }
            NONCE_LEN_FULL => {
                // Nonce overwrites the counter words; `counter` is ignored
                // and the counter region keeps its 64-bit increment
                for (word, chunk) in state[6..10].iter_mut().zip(nonce.chunks_exact(4)) {
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
        working[b] ^= working[a].wrapping_add(working[d]).rotate_left(7);
        working[c] ^= working[b].wrapping_add(working[a]).rotate_left(9);
        working[d] ^= working[c].wrapping_add(working[b]).rotate_left(13);
        working[a] ^= working[d].wrapping_add(working[c]).rotate_left(18);
    }

    #[inline(always)]
    fn increment_counter(&mut self) {
        if self.counter_carry {
            self.state[8] = self.state[8].wrapping_add(1);
            if self.state[8] == 0 {
                self.state[9] = self.state[9].wrapping_add(1);
            }
        } else {
            // 12-byte nonce claims word 8, leaving a narrow counter in word 9
            self.state[9] = self.state[9].wrapping_add(1);
        }
    }
}

impl KeystreamCipher for Salsa20 {
    fn next_block(&mut self, out: &mut [u8; BLOCK_SIZE]) {
        let mut working = self.state;

        for _ in 0..self.rounds / 2 {
            // Column rounds
            Self::quarter_round(&mut working, 0, 4, 8, 12);
            Self::quarter_round(&mut working, 5, 9, 13, 1);
            Self::quarter_round(&mut working, 10, 14, 2, 6);
            Self::quarter_round(&mut working, 15, 3, 7, 11);

            // Row rounds
            Self::quarter_round(&mut working, 0, 1, 2, 3);
            Self::quarter_round(&mut working, 5, 6, 7, 4);
            Self::quarter_round(&mut working, 10, 11, 8, 9);
            Self::quarter_round(&mut working, 15, 12, 13, 14);
        }

        for (i, word) in working.iter_mut().enumerate() {
            *word = word.wrapping_add(self.state[i]);
            out[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
        }
        working.zeroize();

        self.increment_counter();
    }
}

impl core::fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salsa20 {{ [protected] }}")
    }
}
