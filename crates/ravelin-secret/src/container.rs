// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use ravelin_hash::{Digestive, Sha256Digest};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::context::ProtectionContext;
use crate::error::SecretError;
use crate::strategy::ProtectionStrategy;

const FINGERPRINT_LEN: usize = 32;

/// A secret held encrypted at rest in process memory.
///
/// The container stores the protected bytes, the plaintext length, and a
/// SHA-256 fingerprint of the plaintext. Equality runs over fingerprints
/// first, so comparisons normally never decrypt; plaintext only
/// materializes through [`to_vec`](SecretContainer::to_vec) or
/// [`copy_to`](SecretContainer::copy_to), and every intermediate buffer
/// is zeroized on all exit paths.
///
/// The protection strategy is captured from the context at construction
/// and the container keeps its own id for nonce diversification, so a
/// later [`ProtectionContext::rotate`] does not disturb existing
/// containers.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretContainer {
    #[zeroize(skip)]
    id: u64,
    protected: Vec<u8>,
    #[zeroize(skip)]
    len: usize,
    fingerprint: [u8; FINGERPRINT_LEN],
    #[zeroize(skip)]
    is_protected: bool,
    #[zeroize(skip)]
    strategy: Arc<dyn ProtectionStrategy>,
    #[zeroize(skip)]
    disposed: bool,
}

impl SecretContainer {
    /// Protects `plaintext` and zeroizes the source buffer.
    pub fn new(ctx: &ProtectionContext, plaintext: &mut [u8]) -> Result<Self, SecretError> {
        Self::build(ctx, plaintext, true)
    }

    /// Stores `plaintext` verbatim (the caller accepts exposure), still
    /// zeroizing the source buffer.
    pub fn new_unprotected(
        ctx: &ProtectionContext,
        plaintext: &mut [u8],
    ) -> Result<Self, SecretError> {
        Self::build(ctx, plaintext, false)
    }

    fn build(
        ctx: &ProtectionContext,
        plaintext: &mut [u8],
        protect: bool,
    ) -> Result<Self, SecretError> {
        let strategy = ctx.strategy()?;
        let id = ctx.next_id();
        let fingerprint = fingerprint_of(plaintext)?;

        let mut protected = plaintext.to_vec();
        if protect
            && let Err(err) = strategy.protect(id, &mut protected)
        {
            protected.zeroize();
            plaintext.zeroize();
            return Err(err);
        }
        let len = plaintext.len();
        plaintext.zeroize();

        Ok(Self {
            id,
            protected,
            len,
            fingerprint,
            is_protected: protect,
            strategy,
            disposed: false,
        })
    }

    /// Replaces the secret with `new_plaintext`, re-fingerprinting and
    /// re-protecting under a fresh id so the old keystream position is
    /// never reused. The source buffer is zeroized.
    pub fn update(
        &mut self,
        ctx: &ProtectionContext,
        new_plaintext: &mut [u8],
    ) -> Result<(), SecretError> {
        self.ensure_live()?;
        let mut replacement = Self::build_with_mode(ctx, new_plaintext, self.is_protected)?;

        self.protected.zeroize();
        self.fingerprint.zeroize();

        self.id = replacement.id;
        self.protected = std::mem::take(&mut replacement.protected);
        self.len = replacement.len;
        self.fingerprint = replacement.fingerprint;
        self.strategy = Arc::clone(&replacement.strategy);
        Ok(())
    }

    fn build_with_mode(
        ctx: &ProtectionContext,
        plaintext: &mut [u8],
        protect: bool,
    ) -> Result<Self, SecretError> {
        if protect {
            Self::new(ctx, plaintext)
        } else {
            Self::new_unprotected(ctx, plaintext)
        }
    }

    /// Plaintext length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length secret.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The container's process-unique id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// False when the plaintext is stored verbatim.
    pub fn is_protected(&self) -> bool {
        self.is_protected
    }

    /// True once [`dispose`](SecretContainer::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Compares two containers without forcing decryption.
    ///
    /// Lengths and fingerprints are compared first (fingerprints in
    /// constant time); plaintext is only materialized on the fingerprint
    /// collision path, into scratch buffers zeroized before returning.
    pub fn constant_time_eq(&self, other: &SecretContainer) -> Result<bool, SecretError> {
        self.ensure_live()?;
        other.ensure_live()?;

        if self.len != other.len {
            return Ok(false);
        }
        if !bool::from(self.fingerprint.ct_eq(&other.fingerprint)) {
            return Ok(false);
        }

        let own = self.reveal()?;
        let theirs = other.reveal()?;
        Ok(bool::from(own.ct_eq(&theirs)))
    }

    /// Compares against a plaintext candidate without forcing decryption.
    pub fn eq_bytes(&self, candidate: &[u8]) -> Result<bool, SecretError> {
        self.ensure_live()?;

        if self.len != candidate.len() {
            return Ok(false);
        }
        let candidate_fingerprint = fingerprint_of(candidate)?;
        if !bool::from(self.fingerprint.ct_eq(&candidate_fingerprint)) {
            return Ok(false);
        }

        let own = self.reveal()?;
        Ok(bool::from(own.ct_eq(candidate)))
    }

    /// Decrypts the secret into a fresh buffer that zeroizes itself on
    /// drop.
    pub fn to_vec(&self) -> Result<Zeroizing<Vec<u8>>, SecretError> {
        self.ensure_live()?;
        self.reveal()
    }

    /// Decrypts the secret into a caller-owned buffer of exactly
    /// [`len`](SecretContainer::len) bytes.
    pub fn copy_to(&self, dest: &mut [u8]) -> Result<(), SecretError> {
        self.ensure_live()?;
        if dest.len() != self.len {
            return Err(SecretError::LengthMismatch {
                expected: self.len,
                actual: dest.len(),
            });
        }

        let plaintext = self.reveal()?;
        dest.copy_from_slice(&plaintext);
        Ok(())
    }

    /// Zeroizes the stored ciphertext and fingerprint and poisons the
    /// container; every later operation fails with
    /// [`SecretError::Disposed`]. Dropping performs the same zeroing.
    pub fn dispose(&mut self) {
        self.protected.zeroize();
        self.protected = Vec::new();
        self.fingerprint.zeroize();
        self.len = 0;
        self.disposed = true;
    }

    fn ensure_live(&self) -> Result<(), SecretError> {
        if self.disposed {
            return Err(SecretError::Disposed);
        }
        Ok(())
    }

    fn reveal(&self) -> Result<Zeroizing<Vec<u8>>, SecretError> {
        let mut buf = Zeroizing::new(self.protected.clone());
        if self.is_protected {
            self.strategy.unprotect(self.id, &mut buf)?;
        }
        Ok(buf)
    }
}

impl core::fmt::Debug for SecretContainer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecretContainer {{ [protected] }}")
    }
}

fn fingerprint_of(data: &[u8]) -> Result<[u8; FINGERPRINT_LEN], SecretError> {
    let mut hasher = Sha256Digest::new();
    hasher.update(data)?;
    let mut fingerprint = [0u8; FINGERPRINT_LEN];
    hasher.finalize_into(&mut fingerprint)?;
    Ok(fingerprint)
}
