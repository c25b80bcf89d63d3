// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_cipher::{ChaCha20, KeystreamCipher};
use ravelin_rand::EntropySource;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SecretError;

/// In-place transformation between plaintext and protected bytes.
///
/// `protect` and `unprotect` receive the owning container's unique id so
/// a strategy can diversify per container. Implementations must be exact
/// inverses for the same id.
pub trait ProtectionStrategy: Send + Sync {
    /// Transforms plaintext into protected bytes in place.
    fn protect(&self, id: u64, data: &mut [u8]) -> Result<(), SecretError>;

    /// Transforms protected bytes back into plaintext in place.
    fn unprotect(&self, id: u64, data: &mut [u8]) -> Result<(), SecretError>;
}

/// The default strategy: a ChaCha20 keystream keyed by a process-wide
/// 32-byte key, with the container id spread little-endian into the
/// 12-byte nonce. Distinct ids give distinct nonces, so no two containers
/// share a keystream position under one key.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeystreamProtection {
    key: [u8; 32],
}

impl KeystreamProtection {
    /// Builds a strategy from an explicit key.
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Builds a strategy with a fresh random key.
    pub fn random<E: EntropySource>(entropy: &E) -> Result<Self, SecretError> {
        let mut key = [0u8; 32];
        entropy.fill_bytes(&mut key)?;
        Ok(Self { key })
    }

    fn apply(&self, id: u64, data: &mut [u8]) -> Result<(), SecretError> {
        let mut nonce = [0u8; 12];
        nonce[..8].copy_from_slice(&id.to_le_bytes());
        ChaCha20::new(&self.key, &nonce, 0)?.apply_keystream(data);
        Ok(())
    }
}

impl ProtectionStrategy for KeystreamProtection {
    fn protect(&self, id: u64, data: &mut [u8]) -> Result<(), SecretError> {
        self.apply(id, data)
    }

    // XOR keystreams are their own inverse
    fn unprotect(&self, id: u64, data: &mut [u8]) -> Result<(), SecretError> {
        self.apply(id, data)
    }
}

impl core::fmt::Debug for KeystreamProtection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeystreamProtection {{ [protected] }}")
    }
}
