// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use ravelin_hash::KeyedHashAlgorithm;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KdfError;

/// Minimum salt length in bytes.
pub const MIN_SALT_LEN: usize = 8;

/// HMAC-iterated key stretching (RFC 2898 PBKDF2).
///
/// Block `i` is the XOR of the iteration chain
/// `U_1 = HMAC(password, salt || INT_BE(i))`, `U_j = HMAC(password,
/// U_{j-1})`. [`derive`](Pbkdf2DeriveBytes::derive) concatenates
/// successive blocks, carrying partial block output across calls;
/// [`reset`](Pbkdf2DeriveBytes::reset) restarts at block 1.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Pbkdf2DeriveBytes {
    password: Vec<u8>,
    salt: Vec<u8>,
    iterations: u32,
    #[zeroize(skip)]
    algorithm: KeyedHashAlgorithm,
    block_index: u32,
    buffer: Vec<u8>,
    disposed: bool,
}

impl Pbkdf2DeriveBytes {
    /// Builds a derivation instance.
    ///
    /// # Errors
    ///
    /// Fails when `iterations` is zero or `salt` is shorter than
    /// [`MIN_SALT_LEN`] bytes.
    pub fn new(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        algorithm: KeyedHashAlgorithm,
    ) -> Result<Self, KdfError> {
        if iterations == 0 {
            return Err(KdfError::InvalidIterationCount);
        }
        if salt.len() < MIN_SALT_LEN {
            return Err(KdfError::SaltTooShort(salt.len()));
        }

        Ok(Self {
            password: password.to_vec(),
            salt: salt.to_vec(),
            iterations,
            algorithm,
            block_index: 1,
            buffer: Vec::new(),
            disposed: false,
        })
    }

    /// Produces the next `n` bytes of derived material.
    ///
    /// A zero-length request is valid and returns an empty vec without
    /// advancing the block counter.
    pub fn derive(&mut self, n: usize) -> Result<Vec<u8>, KdfError> {
        if self.disposed {
            return Err(KdfError::Disposed);
        }

        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            if self.buffer.is_empty() {
                self.buffer = self.next_block();
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
        self.password.zeroize();
        self.password.clear();
        self.salt.zeroize();
        self.salt.clear();
        self.buffer.zeroize();
        self.buffer.clear();
        self.disposed = true;
    }

    fn next_block(&mut self) -> Vec<u8> {
        let counter = self.block_index.to_be_bytes();
        let mut u = self
            .algorithm
            .mac_parts(&self.password, &[&self.salt, &counter]);
        let mut block = u.clone();
        for _ in 1..self.iterations {
            let next = self.algorithm.mac(&self.password, &u);
            u.zeroize();
            u = next;
            for (acc, byte) in block.iter_mut().zip(&u) {
                *acc ^= byte;
            }
        }
        u.zeroize();
        self.block_index += 1;
        block
    }
}

impl core::fmt::Debug for Pbkdf2DeriveBytes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Pbkdf2DeriveBytes {{ [protected] }}")
    }
}
