// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-GCM sealed-box tests.

use ravelin_rand::test_utils::FixedEntropySource;

use crate::error::EnvelopeError;
use crate::sealed::{SEALED_NONCE_LEN, SEALED_TAG_LEN, SealedBox};

fn key() -> [u8; 32] {
    core::array::from_fn(|i| i as u8)
}

#[test]
fn test_round_trip() {
    let boxed = SealedBox::with_entropy(FixedEntropySource::new(1));
    let sealed = boxed.seal(b"hello world", &key()).expect("Failed to seal(..)");
    let opened = boxed.open(&sealed, &key()).expect("Failed to open(..)");
    assert_eq!(opened, b"hello world");
}

#[test]
fn test_wire_layout() {
    let boxed = SealedBox::with_entropy(FixedEntropySource::new(2));
    let sealed = boxed.seal(b"hello world", &key()).expect("Failed to seal(..)");

    assert_eq!(&sealed[0..4], &(SEALED_NONCE_LEN as i32).to_le_bytes());
    assert_eq!(&sealed[4..8], &(SEALED_TAG_LEN as i32).to_le_bytes());
    assert_eq!(
        sealed.len(),
        8 + SEALED_NONCE_LEN + SEALED_TAG_LEN + b"hello world".len()
    );
}

#[test]
fn test_open_known_container() {
    // Independently computed AES-256-GCM vector: key 00..1f, nonce 00..0b
    let nonce: Vec<u8> = (0..12u8).collect();
    let tag = hex::decode("05301c56437e2377b98ef3961c271928").expect("Failed to decode tag");
    let ciphertext = hex::decode("2f67ba77aac5b574ff2df3").expect("Failed to decode ciphertext");

    let mut sealed = Vec::new();
    sealed.extend_from_slice(&12i32.to_le_bytes());
    sealed.extend_from_slice(&16i32.to_le_bytes());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&tag);
    sealed.extend_from_slice(&ciphertext);

    let boxed = SealedBox::with_entropy(FixedEntropySource::new(3));
    let opened = boxed.open(&sealed, &key()).expect("Failed to open(..)");
    assert_eq!(opened, b"hello world");
}

#[test]
fn test_fresh_nonce_per_seal() {
    let boxed = SealedBox::with_entropy(FixedEntropySource::new(4));
    let first = boxed.seal(b"same message", &key()).expect("Failed to seal(..)");
    let second = boxed.seal(b"same message", &key()).expect("Failed to seal(..)");
    assert_ne!(first[8..8 + SEALED_NONCE_LEN], second[8..8 + SEALED_NONCE_LEN]);
}

#[test]
fn test_tampered_container_fails() {
    let boxed = SealedBox::with_entropy(FixedEntropySource::new(5));
    let sealed = boxed.seal(b"tamper target", &key()).expect("Failed to seal(..)");

    for index in 8..sealed.len() {
        let mut tampered = sealed.clone();
        tampered[index] ^= 0x01;
        assert_eq!(
            boxed.open(&tampered, &key()).err(),
            Some(EnvelopeError::IntegrityCheckFailed),
            "byte {index}",
        );
    }
}

#[test]
fn test_rejects_unexpected_lengths() {
    let boxed = SealedBox::with_entropy(FixedEntropySource::new(6));
    let sealed = boxed.seal(b"x", &key()).expect("Failed to seal(..)");

    let mut wrong = sealed.clone();
    wrong[0..4].copy_from_slice(&8i32.to_le_bytes());
    assert_eq!(
        boxed.open(&wrong, &key()).err(),
        Some(EnvelopeError::MalformedHeader)
    );

    assert_eq!(
        boxed.open(&sealed[..10], &key()).err(),
        Some(EnvelopeError::Truncated)
    );
}
