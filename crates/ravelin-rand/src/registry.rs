// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tracked nonce issuance.

use std::sync::Mutex;

use zeroize::Zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Retry budget for collision resolution before giving up.
const MAX_ISSUE_ATTEMPTS: usize = 128;

/// Issues nonces that are guaranteed unique among all outstanding entries.
///
/// Every issued nonce is recorded; candidates are generated and checked
/// against the record under a single lock, so two threads can never be
/// handed the same value. Entries stay in the registry until
/// [`release`](NonceRegistry::release)d or [`clear`](NonceRegistry::clear)ed.
///
/// Uniqueness is only tracked within one process lifetime. Callers that
/// persist nonces across restarts need their own bookkeeping.
pub struct NonceRegistry<E: EntropySource> {
    entropy: E,
    issued: Mutex<Vec<Vec<u8>>>,
}

impl<E: EntropySource> NonceRegistry<E> {
    /// Creates an empty registry over the given entropy source.
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            issued: Mutex::new(Vec::new()),
        }
    }

    /// Issues a fresh nonce of `len` bytes, distinct from every outstanding one.
    ///
    /// # Errors
    ///
    /// - [`EntropyError::NonceLengthZero`] when `len == 0`
    /// - [`EntropyError::NonceSpaceExhausted`] when no unused value was found
    ///   within the retry budget (practically only for 1-2 byte nonces)
    /// - [`EntropyError::EntropyNotAvailable`] on entropy failure
    pub fn issue(&self, len: usize) -> Result<Vec<u8>, EntropyError> {
        if len == 0 {
            return Err(EntropyError::NonceLengthZero);
        }

        let mut issued = self
            .issued
            .lock()
            .map_err(|_| EntropyError::RegistryPoisoned)?;

        let mut candidate = vec![0u8; len];
        for _ in 0..MAX_ISSUE_ATTEMPTS {
            if let Err(e) = self.entropy.fill_bytes(&mut candidate) {
                candidate.zeroize();
                return Err(e);
            }

            let collides = issued
                .iter()
                .any(|n| n.len() == candidate.len() && n[..] == candidate[..]);
            if !collides {
                issued.push(candidate.clone());
                return Ok(candidate);
            }
        }

        candidate.zeroize();
        Err(EntropyError::NonceSpaceExhausted(MAX_ISSUE_ATTEMPTS))
    }

    /// Removes `nonce` from the registry, freeing it for reissue.
    ///
    /// The registry's stored copy is zeroed before removal when `zeroize`
    /// is set. Returns whether the nonce was found.
    pub fn release(&self, nonce: &[u8], zeroize: bool) -> Result<bool, EntropyError> {
        let mut issued = self
            .issued
            .lock()
            .map_err(|_| EntropyError::RegistryPoisoned)?;

        match issued.iter().position(|n| n[..] == nonce[..]) {
            Some(idx) => {
                if zeroize {
                    issued[idx].zeroize();
                }
                issued.swap_remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every outstanding nonce, optionally zeroing the stored copies.
    pub fn clear(&self, zeroize: bool) -> Result<(), EntropyError> {
        let mut issued = self
            .issued
            .lock()
            .map_err(|_| EntropyError::RegistryPoisoned)?;

        if zeroize {
            for nonce in issued.iter_mut() {
                nonce.zeroize();
            }
        }
        issued.clear();
        Ok(())
    }

    /// Number of outstanding nonces.
    pub fn len(&self) -> Result<usize, EntropyError> {
        Ok(self
            .issued
            .lock()
            .map_err(|_| EntropyError::RegistryPoisoned)?
            .len())
    }

    /// Whether no nonces are outstanding.
    pub fn is_empty(&self) -> Result<bool, EntropyError> {
        Ok(self.len()? == 0)
    }
}

impl<E: EntropySource> core::fmt::Debug for NonceRegistry<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NonceRegistry {{ [protected] }}")
    }
}
