// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::error::HashError;

/// The closed set of keyed-hash algorithms carried on the wire.
///
/// Identifiers are part of the envelope header format and must never be
/// renumbered. Unknown identifiers fail decoding with
/// [`HashError::UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum KeyedHashAlgorithm {
    /// HMAC-SHA-1, 20-byte tag. Kept for compatibility with old envelopes.
    HmacSha1 = 1,
    /// HMAC-SHA-256, 32-byte tag. The default for new envelopes.
    HmacSha256 = 2,
    /// HMAC-SHA-384, 48-byte tag.
    HmacSha384 = 3,
    /// HMAC-SHA-512, 64-byte tag.
    HmacSha512 = 4,
}

impl KeyedHashAlgorithm {
    /// Decodes a wire identifier.
    pub fn from_id(id: i16) -> Result<Self, HashError> {
        match id {
            1 => Ok(Self::HmacSha1),
            2 => Ok(Self::HmacSha256),
            3 => Ok(Self::HmacSha384),
            4 => Ok(Self::HmacSha512),
            other => Err(HashError::UnsupportedAlgorithm(other)),
        }
    }

    /// The wire identifier for this algorithm.
    pub fn id(self) -> i16 {
        self as i16
    }

    /// Tag length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Self::HmacSha1 => 20,
            Self::HmacSha256 => 32,
            Self::HmacSha384 => 48,
            Self::HmacSha512 => 64,
        }
    }

    /// Computes the MAC of `data` under `key`.
    pub fn mac(self, key: &[u8], data: &[u8]) -> Vec<u8> {
        self.mac_parts(key, &[data])
    }

    /// Computes the MAC of the concatenation of `parts` under `key`
    /// without materializing the concatenation.
    pub fn mac_parts(self, key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
        match self {
            Self::HmacSha1 => compute::<Hmac<Sha1>>(key, parts),
            Self::HmacSha256 => compute::<Hmac<Sha256>>(key, parts),
            Self::HmacSha384 => compute::<Hmac<Sha384>>(key, parts),
            Self::HmacSha512 => compute::<Hmac<Sha512>>(key, parts),
        }
    }
}

fn compute<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
    let mut mac =
        <M as Mac>::new_from_slice(key).expect("infallible: HMAC accepts any key length");
    for part in parts {
        mac.update(part);
    }
    mac.finalize().into_bytes().to_vec()
}
