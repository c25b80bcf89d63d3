// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed-hash algorithm set tests against RFC 2202 / RFC 4231 vectors.

use crate::error::HashError;
use crate::keyed::KeyedHashAlgorithm;

// =============================================================================
// Wire identifiers
// =============================================================================

#[test]
fn test_identifier_round_trip() {
    for algorithm in [
        KeyedHashAlgorithm::HmacSha1,
        KeyedHashAlgorithm::HmacSha256,
        KeyedHashAlgorithm::HmacSha384,
        KeyedHashAlgorithm::HmacSha512,
    ] {
        assert_eq!(
            KeyedHashAlgorithm::from_id(algorithm.id()),
            Ok(algorithm)
        );
    }
}

#[test]
fn test_identifiers_are_stable() {
    assert_eq!(KeyedHashAlgorithm::HmacSha1.id(), 1);
    assert_eq!(KeyedHashAlgorithm::HmacSha256.id(), 2);
    assert_eq!(KeyedHashAlgorithm::HmacSha384.id(), 3);
    assert_eq!(KeyedHashAlgorithm::HmacSha512.id(), 4);
}

#[test]
fn test_unknown_identifier_fails() {
    assert_eq!(
        KeyedHashAlgorithm::from_id(0),
        Err(HashError::UnsupportedAlgorithm(0))
    );
    assert_eq!(
        KeyedHashAlgorithm::from_id(99),
        Err(HashError::UnsupportedAlgorithm(99))
    );
    assert_eq!(
        KeyedHashAlgorithm::from_id(-1),
        Err(HashError::UnsupportedAlgorithm(-1))
    );
}

// =============================================================================
// RFC 2202 / RFC 4231 test case 1
// =============================================================================

#[test]
fn test_hmac_vectors() {
    let key = [0x0bu8; 20];
    let data = b"Hi There";

    assert_eq!(
        hex::encode(KeyedHashAlgorithm::HmacSha1.mac(&key, data)),
        "b617318655057264e28bc0b6fb378c8ef146be00"
    );
    assert_eq!(
        hex::encode(KeyedHashAlgorithm::HmacSha256.mac(&key, data)),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
    assert_eq!(
        hex::encode(KeyedHashAlgorithm::HmacSha384.mac(&key, data)),
        "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59c\
         faea9ea9076ede7f4af152e8b2fa9cb6"
    );
    assert_eq!(
        hex::encode(KeyedHashAlgorithm::HmacSha512.mac(&key, data)),
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
         daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
    );
}

#[test]
fn test_hmac_sha256_short_key() {
    // RFC 4231 test case 2
    let tag = KeyedHashAlgorithm::HmacSha256.mac(b"Jefe", b"what do ya want for nothing?");
    assert_eq!(
        hex::encode(tag),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

// =============================================================================
// Parts concatenation
// =============================================================================

#[test]
fn test_mac_parts_matches_concatenation() {
    let key = b"somekey";
    let whole = KeyedHashAlgorithm::HmacSha256.mac(key, b"header|payload|trailer");
    let parts =
        KeyedHashAlgorithm::HmacSha256.mac_parts(key, &[b"header|", b"payload|", b"trailer"]);
    assert_eq!(whole, parts);
}

#[test]
fn test_tag_lengths() {
    assert_eq!(KeyedHashAlgorithm::HmacSha1.output_len(), 20);
    assert_eq!(KeyedHashAlgorithm::HmacSha256.output_len(), 32);
    assert_eq!(KeyedHashAlgorithm::HmacSha384.output_len(), 48);
    assert_eq!(KeyedHashAlgorithm::HmacSha512.output_len(), 64);

    let key = b"k";
    for algorithm in [
        KeyedHashAlgorithm::HmacSha1,
        KeyedHashAlgorithm::HmacSha256,
        KeyedHashAlgorithm::HmacSha384,
        KeyedHashAlgorithm::HmacSha512,
    ] {
        assert_eq!(algorithm.mac(key, b"m").len(), algorithm.output_len());
    }
}
