// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use aes::Aes256;
use aes::cipher::{BlockEncrypt, KeyInit};
use ravelin_hash::KeyedHashAlgorithm;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KdfError;

/// The password is packed into a block of this many bytes.
pub const PACKED_PASSWORD_LEN: usize = 32;

/// Cipher key length for the stretching cipher.
pub const CIPHER_KEY_LEN: usize = 32;

/// Legacy-compatible cipher-iterated key stretching.
///
/// The UTF-8 password is packed into a 32-byte block (zero-padded,
/// truncated at 32). An AES-256 instance keyed by an independent 32-byte
/// key encrypts each 16-byte half of the block `iterations` times; output
/// block `i` is then `KeyedHash(mac_key, stretched || INT_BE(i))`.
///
/// Iteration counts are only validated to be positive. Very low counts
/// weaken the stretching and are the caller's responsibility.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CipherIterated {
    stretched: [u8; PACKED_PASSWORD_LEN],
    mac_key: Vec<u8>,
    #[zeroize(skip)]
    algorithm: KeyedHashAlgorithm,
    block_index: u32,
    buffer: Vec<u8>,
    disposed: bool,
}

impl CipherIterated {
    /// Builds a derivation instance, performing the stretching up front.
    ///
    /// # Errors
    ///
    /// Fails when `iterations` is zero or `cipher_key` is not exactly
    /// [`CIPHER_KEY_LEN`] bytes.
    pub fn new(
        password: &str,
        cipher_key: &[u8],
        mac_key: &[u8],
        iterations: u32,
        algorithm: KeyedHashAlgorithm,
    ) -> Result<Self, KdfError> {
        if iterations == 0 {
            return Err(KdfError::InvalidIterationCount);
        }
        if cipher_key.len() != CIPHER_KEY_LEN {
            return Err(KdfError::InvalidCipherKeyLength(cipher_key.len()));
        }

        let mut stretched = [0u8; PACKED_PASSWORD_LEN];
        let packed_len = password.len().min(PACKED_PASSWORD_LEN);
        stretched[..packed_len].copy_from_slice(&password.as_bytes()[..packed_len]);

        let cipher = Aes256::new_from_slice(cipher_key)
            .map_err(|_| KdfError::InvalidCipherKeyLength(cipher_key.len()))?;
        let (lo, hi) = stretched.split_at_mut(16);
        for _ in 0..iterations {
            cipher.encrypt_block(aes::Block::from_mut_slice(lo));
            cipher.encrypt_block(aes::Block::from_mut_slice(hi));
        }

        Ok(Self {
            stretched,
            mac_key: mac_key.to_vec(),
            algorithm,
            block_index: 1,
            buffer: Vec::new(),
            disposed: false,
        })
    }

    /// Produces the next `n` bytes of derived material.
    pub fn derive(&mut self, n: usize) -> Result<Vec<u8>, KdfError> {
        if self.disposed {
            return Err(KdfError::Disposed);
        }

        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            if self.buffer.is_empty() {
                let counter = self.block_index.to_be_bytes();
                self.buffer = self
                    .algorithm
                    .mac_parts(&self.mac_key, &[&self.stretched, &counter]);
                self.block_index += 1;
            }
            let take = (n - out.len()).min(self.buffer.len());
            out.extend_from_slice(&self.buffer[..take]);

            let remainder = self.buffer.split_off(take);
            self.buffer.zeroize();
            self.buffer = remainder;
        }
        Ok(out)
    }

    /// Restarts derivation at block 1, discarding buffered output.
    pub fn reset(&mut self) {
        self.block_index = 1;
        self.buffer.zeroize();
        self.buffer.clear();
    }

    /// Zeroizes all key material and poisons the instance.
    pub fn dispose(&mut self) {
        self.stretched.zeroize();
        self.mac_key.zeroize();
        self.mac_key.clear();
        self.buffer.zeroize();
        self.buffer.clear();
        self.disposed = true;
    }
}

impl core::fmt::Debug for CipherIterated {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CipherIterated {{ [protected] }}")
    }
}
