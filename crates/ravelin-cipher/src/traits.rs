// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::consts::BLOCK_SIZE;

/// Common surface of the keystream engines.
///
/// The keystream for a given (key, nonce, initial counter) is fully
/// deterministic; each call to [`next_block`](KeystreamCipher::next_block)
/// advances the block counter. The provided methods consume whole blocks,
/// so every call starts on a block boundary.
pub trait KeystreamCipher {
    /// Writes the next 64-byte keystream block and advances the counter.
    fn next_block(&mut self, out: &mut [u8; BLOCK_SIZE]);

    /// XORs the keystream into `data` in place (encrypt and decrypt are
    /// the same operation).
    fn apply_keystream(&mut self, data: &mut [u8]) {
        let mut block = [0u8; BLOCK_SIZE];
        for chunk in data.chunks_mut(BLOCK_SIZE) {
            self.next_block(&mut block);
            for (byte, ks) in chunk.iter_mut().zip(block.iter()) {
                *byte ^= ks;
            }
        }
        block.zeroize();
    }

    /// Copies raw keystream into `out` without XORing (skip-XOR mode).
    ///
    /// This repurposes the engine as a deterministic random byte source.
    fn read_keystream(&mut self, out: &mut [u8]) {
        let mut block = [0u8; BLOCK_SIZE];
        for chunk in out.chunks_mut(BLOCK_SIZE) {
            self.next_block(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        block.zeroize();
    }
}
