// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_hash::KeyedHashAlgorithm;
use ravelin_kdf::Pbkdf2DeriveBytes;
use ravelin_rand::{EntropySource, SystemEntropySource};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::cbc;
use crate::error::EnvelopeError;
use crate::header::{EnvelopeHeader, IV_LEN};

/// Default PBKDF2 iteration count for freshly built envelopes.
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Length of each per-envelope random salt in bytes.
pub const SALT_LEN: usize = 16;

const DERIVED_KEY_LEN: usize = 32;

/// Envelope encryption provider.
///
/// Stateless apart from its configuration; one provider can seal and open
/// any number of envelopes. Decryption follows the header, not the
/// provider's own configuration, so a provider built with defaults opens
/// envelopes produced under any supported iteration count and keyed-hash
/// choice.
#[derive(Debug)]
pub struct EnvelopeProvider<E: EntropySource = SystemEntropySource> {
    entropy: E,
    iterations: u32,
    algorithm: KeyedHashAlgorithm,
}

impl EnvelopeProvider<SystemEntropySource> {
    /// Builds a provider over the OS entropy source with default
    /// configuration (10 000 iterations, HMAC-SHA-256).
    pub fn new() -> Self {
        Self::with_entropy(SystemEntropySource)
    }
}

impl Default for EnvelopeProvider<SystemEntropySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> EnvelopeProvider<E> {
    /// Builds a provider over a caller-chosen entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self {
            entropy,
            iterations: DEFAULT_ITERATIONS,
            algorithm: KeyedHashAlgorithm::HmacSha256,
        }
    }

    /// Overrides the PBKDF2 iteration count for new envelopes.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Overrides the keyed-hash algorithm for new envelopes.
    pub fn algorithm(mut self, algorithm: KeyedHashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Seals `data` under `key` into a self-describing envelope.
    ///
    /// `metadata` travels in the clear but inside the envelope layout;
    /// it is not covered by the authentication tag.
    pub fn encrypt(
        &self,
        data: &[u8],
        key: &[u8],
        metadata: Option<&[u8]>,
    ) -> Result<Vec<u8>, EnvelopeError> {
        let mut salt = [0u8; SALT_LEN];
        let mut hash_salt = [0u8; SALT_LEN];
        let mut iv = [0u8; IV_LEN];
        self.entropy.fill_bytes(&mut salt)?;
        self.entropy.fill_bytes(&mut hash_salt)?;
        self.entropy.fill_bytes(&mut iv)?;

        let metadata_len = metadata.map_or(0, <[u8]>::len);
        let header = EnvelopeHeader::new(
            self.algorithm,
            metadata_len as i32,
            self.iterations as i32,
            salt.to_vec(),
            hash_salt.to_vec(),
            iv,
        );

        let cipher_key = derive_key(key, &salt, self.iterations, self.algorithm)?;
        let ciphertext = cbc::encrypt(&cipher_key, &iv, data);

        let mac_key = derive_key(key, &hash_salt, self.iterations, self.algorithm)?;
        let mut tag = self.algorithm.mac(&mac_key[..], &ciphertext);

        let mut envelope = Vec::with_capacity(
            header.encoded_len() + metadata_len + tag.len() + ciphertext.len(),
        );
        envelope.extend_from_slice(&header.encode());
        if let Some(metadata) = metadata {
            envelope.extend_from_slice(metadata);
        }
        envelope.extend_from_slice(&tag);
        envelope.extend_from_slice(&ciphertext);

        tag.zeroize();
        Ok(envelope)
    }

    /// Opens an envelope, returning the plaintext and any metadata.
    ///
    /// The tag is verified in constant time before any decryption; a
    /// mismatch fails with [`EnvelopeError::IntegrityCheckFailed`] and no
    /// plaintext is ever produced.
    pub fn decrypt(
        &self,
        envelope: &[u8],
        key: &[u8],
    ) -> Result<(Vec<u8>, Option<Vec<u8>>), EnvelopeError> {
        let header = EnvelopeHeader::decode(envelope)?;
        let mut offset = header.encoded_len();

        let metadata = if header.metadata_len() > 0 {
            let bytes = envelope
                .get(offset..offset + header.metadata_len())
                .ok_or(EnvelopeError::Truncated)?;
            offset += header.metadata_len();
            Some(bytes.to_vec())
        } else {
            None
        };

        let tag_len = header.algorithm().output_len();
        let tag = envelope
            .get(offset..offset + tag_len)
            .ok_or(EnvelopeError::Truncated)?;
        offset += tag_len;
        let ciphertext = &envelope[offset..];

        let mac_key = derive_key(key, header.hash_salt(), header.iterations(), header.algorithm())?;
        let expected = Zeroizing::new(header.algorithm().mac(&mac_key[..], ciphertext));
        if !bool::from(expected.ct_eq(tag)) {
            return Err(EnvelopeError::IntegrityCheckFailed);
        }

        let cipher_key = derive_key(key, header.salt(), header.iterations(), header.algorithm())?;
        let plaintext = cbc::decrypt(&cipher_key, header.iv(), ciphertext)?;

        Ok((plaintext, metadata))
    }
}

fn derive_key(
    key: &[u8],
    salt: &[u8],
    iterations: u32,
    algorithm: KeyedHashAlgorithm,
) -> Result<Zeroizing<[u8; DERIVED_KEY_LEN]>, EnvelopeError> {
    let mut kdf = Pbkdf2DeriveBytes::new(key, salt, iterations, algorithm)?;
    let mut derived = Zeroizing::new(kdf.derive(DERIVED_KEY_LEN)?);

    let mut out = Zeroizing::new([0u8; DERIVED_KEY_LEN]);
    out.copy_from_slice(&derived);
    derived.zeroize();
    Ok(out)
}
