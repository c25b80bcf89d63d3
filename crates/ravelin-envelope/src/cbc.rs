// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-256-CBC with PKCS7 padding, hand-composed over the `aes` block
//! cipher. Only reachable behind the envelope's authenticate-then-decrypt
//! flow, so padding failures carry no oracle value and surface as plain
//! integrity errors.

use aes::Aes256;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use zeroize::Zeroize;

use crate::error::EnvelopeError;

const BLOCK_LEN: usize = 16;

pub(crate) fn encrypt(key: &[u8; 32], iv: &[u8; BLOCK_LEN], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256::new(GenericArray::from_slice(key));

    // PKCS7 always pads, so an exact multiple gains a full block
    let pad = BLOCK_LEN - plaintext.len() % BLOCK_LEN;
    let mut buf = Vec::with_capacity(plaintext.len() + pad);
    buf.extend_from_slice(plaintext);
    buf.resize(plaintext.len() + pad, pad as u8);

    let mut prev = *iv;
    for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
        for (byte, mask) in chunk.iter_mut().zip(&prev) {
            *byte ^= mask;
        }
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
        prev.copy_from_slice(chunk);
    }

    prev.zeroize();
    buf
}

pub(crate) fn decrypt(
    key: &[u8; 32],
    iv: &[u8; BLOCK_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>, EnvelopeError> {
    if ciphertext.is_empty() || !ciphertext.len().is_multiple_of(BLOCK_LEN) {
        return Err(EnvelopeError::IntegrityCheckFailed);
    }

    let cipher = Aes256::new(GenericArray::from_slice(key));
    let mut buf = ciphertext.to_vec();
    let mut prev = *iv;
    for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
        let mut saved = [0u8; BLOCK_LEN];
        saved.copy_from_slice(chunk);
        cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
        for (byte, mask) in chunk.iter_mut().zip(&prev) {
            *byte ^= mask;
        }
        prev = saved;
    }
    prev.zeroize();

    let pad = usize::from(buf[buf.len() - 1]);
    if pad == 0 || pad > BLOCK_LEN || pad > buf.len() {
        buf.zeroize();
        return Err(EnvelopeError::IntegrityCheckFailed);
    }
    let unpadded_len = buf.len() - pad;
    if !buf[unpadded_len..].iter().all(|&b| usize::from(b) == pad) {
        buf.zeroize();
        return Err(EnvelopeError::IntegrityCheckFailed);
    }

    buf[unpadded_len..].zeroize();
    buf.truncate(unpadded_len);
    Ok(buf)
}
