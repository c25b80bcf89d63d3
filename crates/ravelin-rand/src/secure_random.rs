// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Typed draws over an [`EntropySource`].

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Typed random-value generator over a pluggable entropy source.
///
/// All draws pull fresh bytes from the underlying source; nothing is
/// buffered, so there is no generator state to protect or reseed.
#[derive(Debug)]
pub struct SecureRandom<E: EntropySource> {
    entropy: E,
}

impl<E: EntropySource> SecureRandom<E> {
    /// Creates a generator over the given entropy source.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Fills `dest` with random bytes.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.entropy.fill_bytes(dest)
    }

    /// Returns `len` freshly drawn random bytes.
    pub fn bytes(&mut self, len: usize) -> Result<Vec<u8>, EntropyError> {
        let mut out = vec![0u8; len];
        if let Err(e) = self.entropy.fill_bytes(&mut out) {
            out.zeroize();
            return Err(e);
        }
        Ok(out)
    }

    /// Draws a random `i16`.
    pub fn next_i16(&mut self) -> Result<i16, EntropyError> {
        let mut buf = [0u8; 2];
        self.entropy.fill_bytes(&mut buf)?;
        let value = i16::from_le_bytes(buf);
        buf.zeroize();
        Ok(value)
    }

    /// Draws a random `i32`.
    pub fn next_i32(&mut self) -> Result<i32, EntropyError> {
        let mut buf = [0u8; 4];
        self.entropy.fill_bytes(&mut buf)?;
        let value = i32::from_le_bytes(buf);
        buf.zeroize();
        Ok(value)
    }

    /// Draws a random `i64`.
    pub fn next_i64(&mut self) -> Result<i64, EntropyError> {
        let mut buf = [0u8; 8];
        self.entropy.fill_bytes(&mut buf)?;
        let value = i64::from_le_bytes(buf);
        buf.zeroize();
        Ok(value)
    }

    /// Draws a random `u64`.
    pub fn next_u64(&mut self) -> Result<u64, EntropyError> {
        let mut buf = [0u8; 8];
        self.entropy.fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        buf.zeroize();
        Ok(value)
    }

    /// Draws a uniform `u64` in `0..max` via rejection sampling.
    ///
    /// Raw draws are rejected while they fall into the truncated top range
    /// of the `u64` space, which removes modulo bias entirely.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::UpperBoundZero`] when `max == 0`.
    pub fn next_u64_below(&mut self, max: u64) -> Result<u64, EntropyError> {
        if max == 0 {
            return Err(EntropyError::UpperBoundZero);
        }

        loop {
            let value = self.next_u64()?;
            // Reject draws from the incomplete final bucket
            if value - value % max <= u64::MAX - (max - 1) {
                return Ok(value % max);
            }
        }
    }

    /// Fills `dest` with random bytes, none of which are zero.
    ///
    /// After an initial fill, any zero bytes are squeezed out by shifting
    /// the non-zero bytes down; only the freed tail is refilled. Repeats
    /// until no zero byte remains, so no byte position is ever resampled
    /// in a way that skews the non-zero distribution.
    pub fn fill_nonzero_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.entropy.fill_bytes(dest)?;

        loop {
            let mut write = 0;
            for read in 0..dest.len() {
                if dest[read] != 0 {
                    dest[write] = dest[read];
                    write += 1;
                }
            }

            if write == dest.len() {
                return Ok(());
            }

            self.entropy.fill_bytes(&mut dest[write..])?;
        }
    }
}
