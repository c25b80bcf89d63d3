// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_hash::KeyedHashAlgorithm;

use crate::error::EnvelopeError;

/// The only envelope version this build reads and writes.
pub const ENVELOPE_VERSION: i16 = 1;

/// Initialization vector length in bytes.
pub const IV_LEN: usize = 16;

/// The self-describing prefix of every envelope.
///
/// Wire layout, all integers little-endian:
///
/// ```text
/// version:i16 | hash_id:i16 | metadata_len:i32 | iterations:i32 |
/// salt_len:i16 | hash_salt_len:i16 | salt | hash_salt | iv:16
/// ```
///
/// Headers are immutable once built; a fresh one is created per
/// encryption call with freshly random salts and IV, never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeHeader {
    algorithm: KeyedHashAlgorithm,
    metadata_len: i32,
    iterations: i32,
    salt: Vec<u8>,
    hash_salt: Vec<u8>,
    iv: [u8; IV_LEN],
}

impl EnvelopeHeader {
    pub(crate) fn new(
        algorithm: KeyedHashAlgorithm,
        metadata_len: i32,
        iterations: i32,
        salt: Vec<u8>,
        hash_salt: Vec<u8>,
        iv: [u8; IV_LEN],
    ) -> Self {
        Self {
            algorithm,
            metadata_len,
            iterations,
            salt,
            hash_salt,
            iv,
        }
    }

    /// The keyed-hash algorithm for the tag and key stretching.
    pub fn algorithm(&self) -> KeyedHashAlgorithm {
        self.algorithm
    }

    /// Length of the metadata section following the header.
    pub fn metadata_len(&self) -> usize {
        self.metadata_len as usize
    }

    /// PBKDF2 iteration count used for both derived keys.
    pub fn iterations(&self) -> u32 {
        self.iterations as u32
    }

    /// Salt for the cipher-key derivation.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Salt for the MAC-key derivation.
    pub fn hash_salt(&self) -> &[u8] {
        &self.hash_salt
    }

    /// CBC initialization vector.
    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    /// Encoded size in bytes, computable from the fields alone.
    pub fn encoded_len(&self) -> usize {
        2 + 2 + 4 + 4 + 2 + 2 + self.salt.len() + self.hash_salt.len() + IV_LEN
    }

    /// Serializes the header.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&ENVELOPE_VERSION.to_le_bytes());
        out.extend_from_slice(&self.algorithm.id().to_le_bytes());
        out.extend_from_slice(&self.metadata_len.to_le_bytes());
        out.extend_from_slice(&self.iterations.to_le_bytes());
        out.extend_from_slice(&(self.salt.len() as i16).to_le_bytes());
        out.extend_from_slice(&(self.hash_salt.len() as i16).to_le_bytes());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.hash_salt);
        out.extend_from_slice(&self.iv);
        out
    }

    /// Parses and validates a header from the front of `buf`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown version, an unknown keyed-hash identifier,
    /// out-of-range lengths, or input shorter than the declared layout.
    pub fn decode(buf: &[u8]) -> Result<Self, EnvelopeError> {
        let mut cursor = Cursor { buf, pos: 0 };

        let version = cursor.read_i16()?;
        if version != ENVELOPE_VERSION {
            return Err(EnvelopeError::UnsupportedVersion(version));
        }
        let algorithm = KeyedHashAlgorithm::from_id(cursor.read_i16()?)?;
        let metadata_len = cursor.read_i32()?;
        let iterations = cursor.read_i32()?;
        let salt_len = cursor.read_i16()?;
        let hash_salt_len = cursor.read_i16()?;

        if metadata_len < 0 || iterations <= 0 || salt_len < 0 || hash_salt_len < 0 {
            return Err(EnvelopeError::MalformedHeader);
        }

        let salt = cursor.read_bytes(salt_len as usize)?.to_vec();
        let hash_salt = cursor.read_bytes(hash_salt_len as usize)?.to_vec();
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(cursor.read_bytes(IV_LEN)?);

        Ok(Self {
            algorithm,
            metadata_len,
            iterations,
            salt,
            hash_salt,
            iv,
        })
    }
}

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], EnvelopeError> {
        let end = self.pos.checked_add(n).ok_or(EnvelopeError::Truncated)?;
        let bytes = self.buf.get(self.pos..end).ok_or(EnvelopeError::Truncated)?;
        self.pos = end;
        Ok(bytes)
    }

    fn read_i16(&mut self) -> Result<i16, EnvelopeError> {
        let bytes = self.read_bytes(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_i32(&mut self) -> Result<i32, EnvelopeError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}
