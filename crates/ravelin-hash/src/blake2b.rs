// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Blake2b implementation (RFC 7693)
//!
//! Incremental state machine with configurable output length, key, salt
//! and personalization. All sensitive state is zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::HashError;
use crate::traits::Digestive;

/// Blake2b block size in bytes.
pub const BLAKE2B_BLOCK_SIZE: usize = 128;

/// Maximum digest length in bytes.
pub const BLAKE2B_MAX_OUT_LEN: usize = 64;

/// Maximum key length in bytes.
pub const BLAKE2B_MAX_KEY_LEN: usize = 128;

/// Salt and personalization length in bytes (exact, when supplied).
pub const BLAKE2B_SALT_LEN: usize = 16;

/// Initialization vector per RFC 7693 Section 2.6
/// (first 64 bits of the fractional parts of the square roots of the
/// first 8 primes; shared with SHA-512).
const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
];

/// Message schedule permutations per RFC 7693 Section 2.7
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Incremental Blake2b hasher.
///
/// The parameter block (digest length, key length, fan-out 1, depth 1,
/// optional salt and personalization) is folded into the initial chaining
/// value; a supplied key is absorbed as the first compressed block.
/// [`reset`](Digestive::reset) restores the fully parameterized initial
/// state, key included.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Blake2b {
    h: [u64; 8],
    t: [u64; 2],
    buf: [u8; BLAKE2B_BLOCK_SIZE],
    buf_len: usize,
    finalized: bool,
    out_len: usize,
    key: [u8; BLAKE2B_MAX_KEY_LEN],
    key_len: usize,
    salt: [u8; BLAKE2B_SALT_LEN],
    has_salt: bool,
    personal: [u8; BLAKE2B_SALT_LEN],
    has_personal: bool,
}

impl Blake2b {
    /// Builds an unkeyed hasher with the given digest length (1..=64).
    pub fn new(out_len: usize) -> Result<Self, HashError> {
        Self::with_params(out_len, &[], None, None)
    }

    /// Builds a keyed hasher (MAC mode), key up to 128 bytes.
    pub fn keyed(out_len: usize, key: &[u8]) -> Result<Self, HashError> {
        Self::with_params(out_len, key, None, None)
    }

    /// Builds a hasher with the full parameter set.
    ///
    /// Salt and personalization must be exactly 16 bytes when supplied.
    pub fn with_params(
        out_len: usize,
        key: &[u8],
        salt: Option<&[u8]>,
        personal: Option<&[u8]>,
    ) -> Result<Self, HashError> {
        if out_len == 0 || out_len > BLAKE2B_MAX_OUT_LEN {
            return Err(HashError::InvalidOutputLength(out_len));
        }
        if key.len() > BLAKE2B_MAX_KEY_LEN {
            return Err(HashError::KeyTooLong(key.len()));
        }
        if let Some(salt) = salt
            && salt.len() != BLAKE2B_SALT_LEN
        {
            return Err(HashError::InvalidSaltLength(salt.len()));
        }
        if let Some(personal) = personal
            && personal.len() != BLAKE2B_SALT_LEN
        {
            return Err(HashError::InvalidPersonalizationLength(personal.len()));
        }

        let mut hasher = Self {
            h: [0; 8],
            t: [0; 2],
            buf: [0; BLAKE2B_BLOCK_SIZE],
            buf_len: 0,
            finalized: false,
            out_len,
            key: [0; BLAKE2B_MAX_KEY_LEN],
            key_len: key.len(),
            salt: [0; BLAKE2B_SALT_LEN],
            has_salt: salt.is_some(),
            personal: [0; BLAKE2B_SALT_LEN],
            has_personal: personal.is_some(),
        };
        hasher.key[..key.len()].copy_from_slice(key);
        if let Some(salt) = salt {
            hasher.salt.copy_from_slice(salt);
        }
        if let Some(personal) = personal {
            hasher.personal.copy_from_slice(personal);
        }

        hasher.init();
        Ok(hasher)
    }

    /// XORs the parameter block into the IV and absorbs the key block.
    fn init(&mut self) {
        self.h = IV;
        self.h[0] ^= 0x0101_0000 ^ ((self.key_len as u64) << 8) ^ self.out_len as u64;
        if self.has_salt {
            self.h[4] ^= u64_le(&self.salt[0..8]);
            self.h[5] ^= u64_le(&self.salt[8..16]);
        }
        if self.has_personal {
            self.h[6] ^= u64_le(&self.personal[0..8]);
            self.h[7] ^= u64_le(&self.personal[8..16]);
        }

        self.t = [0; 2];
        self.buf = [0; BLAKE2B_BLOCK_SIZE];
        self.buf_len = 0;
        self.finalized = false;

        if self.key_len > 0 {
            // Key is zero-padded to a full block and compressed first
            self.buf[..self.key_len].copy_from_slice(&self.key[..self.key_len]);
            self.buf_len = BLAKE2B_BLOCK_SIZE;
        }
    }

    #[inline(always)]
    fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
        v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
        v[d] = (v[d] ^ v[a]).rotate_right(32);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(24);
        v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
        v[d] = (v[d] ^ v[a]).rotate_right(16);
        v[c] = v[c].wrapping_add(v[d]);
        v[b] = (v[b] ^ v[c]).rotate_right(63);
    }

    #[inline(always)]
    fn increment_counter(&mut self, inc: u64) {
        self.t[0] = self.t[0].wrapping_add(inc);
        if self.t[0] < inc {
            self.t[1] = self.t[1].wrapping_add(1);
        }
    }

    /// Compresses the buffered block into the chaining value.
    fn compress(&mut self, last: bool) {
        let mut m = [0u64; 16];
        for (word, chunk) in m.iter_mut().zip(self.buf.chunks_exact(8)) {
            *word = u64_le(chunk);
        }

        let mut v = [0u64; 16];
        v[..8].copy_from_slice(&self.h);
        v[8..].copy_from_slice(&IV);
        v[12] ^= self.t[0];
        v[13] ^= self.t[1];
        if last {
            v[14] = !v[14];
        }

        for round in 0..12 {
            let s = &SIGMA[round % 10];
            Self::g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
            Self::g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
            Self::g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
            Self::g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

            Self::g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
            Self::g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
            Self::g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
            Self::g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
        }

        for i in 0..8 {
            self.h[i] ^= v[i] ^ v[i + 8];
        }

        m.zeroize();
        v.zeroize();
    }
}

impl Digestive for Blake2b {
    fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
        if self.finalized {
            return Err(HashError::Finalized);
        }

        let mut input = data;

        // Compression is lazy: a full buffer is only compressed once more
        // input arrives, so the trailing block is available for the
        // finalization flag.
        if self.buf_len > 0 {
            let fill = BLAKE2B_BLOCK_SIZE - self.buf_len;
            if input.len() > fill {
                self.buf[self.buf_len..].copy_from_slice(&input[..fill]);
                self.increment_counter(BLAKE2B_BLOCK_SIZE as u64);
                self.compress(false);
                self.buf_len = 0;
                input = &input[fill..];
            } else {
                self.buf[self.buf_len..self.buf_len + input.len()].copy_from_slice(input);
                self.buf_len += input.len();
                return Ok(());
            }
        }

        while input.len() > BLAKE2B_BLOCK_SIZE {
            self.buf.copy_from_slice(&input[..BLAKE2B_BLOCK_SIZE]);
            self.increment_counter(BLAKE2B_BLOCK_SIZE as u64);
            self.compress(false);
            input = &input[BLAKE2B_BLOCK_SIZE..];
        }

        self.buf[..input.len()].copy_from_slice(input);
        self.buf_len = input.len();
        Ok(())
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError> {
        if self.finalized {
            return Err(HashError::Finalized);
        }
        if out.len() != self.out_len {
            return Err(HashError::OutputBufferMismatch {
                expected: self.out_len,
                actual: out.len(),
            });
        }

        self.increment_counter(self.buf_len as u64);
        self.buf[self.buf_len..].fill(0);
        self.compress(true);

        let mut digest = [0u8; BLAKE2B_MAX_OUT_LEN];
        for (chunk, word) in digest.chunks_exact_mut(8).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out.copy_from_slice(&digest[..self.out_len]);
        digest.zeroize();

        self.finalized = true;
        Ok(())
    }

    fn reset(&mut self) {
        self.init();
    }

    fn output_len(&self) -> usize {
        self.out_len
    }
}

impl core::fmt::Debug for Blake2b {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Blake2b {{ [protected] }}")
    }
}

#[inline(always)]
fn u64_le(bytes: &[u8]) -> u64 {
    u64::from_le_bytes(
        bytes
            .try_into()
            .expect("infallible: caller passes exactly 8 bytes"),
    )
}
