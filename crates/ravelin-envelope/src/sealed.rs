// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use ravelin_rand::{EntropySource, SystemEntropySource};

use crate::error::EnvelopeError;

/// AES-GCM nonce length in bytes.
pub const SEALED_NONCE_LEN: usize = 12;

/// AES-GCM tag length in bytes.
pub const SEALED_TAG_LEN: usize = 16;

/// Simple AES-256-GCM container for callers holding a full-strength key.
///
/// Wire layout, integers little-endian:
///
/// ```text
/// nonce_len:i32 | tag_len:i32 | nonce | tag | ciphertext
/// ```
///
/// A fresh random nonce is drawn per [`seal`](SealedBox::seal) call. No
/// key stretching is involved; use [`crate::EnvelopeProvider`] for
/// password-derived keys.
#[derive(Debug)]
pub struct SealedBox<E: EntropySource = SystemEntropySource> {
    entropy: E,
}

impl SealedBox<SystemEntropySource> {
    /// Builds a container over the OS entropy source.
    pub fn new() -> Self {
        Self::with_entropy(SystemEntropySource)
    }
}

impl Default for SealedBox<SystemEntropySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> SealedBox<E> {
    /// Builds a container over a caller-chosen entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Encrypts `data` under the 32-byte `key`.
    pub fn seal(&self, data: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, EnvelopeError> {
        let mut nonce = [0u8; SEALED_NONCE_LEN];
        self.entropy.fill_bytes(&mut nonce)?;

        let cipher = Aes256Gcm::new(key.into());
        let combined = cipher
            .encrypt(Nonce::from_slice(&nonce), data)
            .map_err(|_| EnvelopeError::EncryptionFailed)?;
        let (ciphertext, tag) = combined.split_at(combined.len() - SEALED_TAG_LEN);

        let mut out =
            Vec::with_capacity(8 + SEALED_NONCE_LEN + SEALED_TAG_LEN + ciphertext.len());
        out.extend_from_slice(&(SEALED_NONCE_LEN as i32).to_le_bytes());
        out.extend_from_slice(&(SEALED_TAG_LEN as i32).to_le_bytes());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(tag);
        out.extend_from_slice(ciphertext);
        Ok(out)
    }

    /// Decrypts a sealed container under the 32-byte `key`.
    pub fn open(&self, sealed: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, EnvelopeError> {
        let nonce_len = read_i32(sealed, 0)?;
        let tag_len = read_i32(sealed, 4)?;
        if nonce_len != SEALED_NONCE_LEN as i32 || tag_len != SEALED_TAG_LEN as i32 {
            return Err(EnvelopeError::MalformedHeader);
        }

        let nonce = sealed
            .get(8..8 + SEALED_NONCE_LEN)
            .ok_or(EnvelopeError::Truncated)?;
        let tag = sealed
            .get(8 + SEALED_NONCE_LEN..8 + SEALED_NONCE_LEN + SEALED_TAG_LEN)
            .ok_or(EnvelopeError::Truncated)?;
        let ciphertext = &sealed[8 + SEALED_NONCE_LEN + SEALED_TAG_LEN..];

        // The AEAD backend wants ciphertext || tag
        let mut combined = Vec::with_capacity(ciphertext.len() + SEALED_TAG_LEN);
        combined.extend_from_slice(ciphertext);
        combined.extend_from_slice(tag);

        let cipher = Aes256Gcm::new(key.into());
        cipher
            .decrypt(Nonce::from_slice(nonce), combined.as_slice())
            .map_err(|_| EnvelopeError::IntegrityCheckFailed)
    }
}

fn read_i32(buf: &[u8], offset: usize) -> Result<i32, EnvelopeError> {
    let bytes = buf
        .get(offset..offset + 4)
        .ok_or(EnvelopeError::Truncated)?;
    Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
