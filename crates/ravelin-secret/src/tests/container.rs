// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secret container lifecycle, equality, and disposal tests.

use std::sync::Arc;

use proptest::prelude::*;

use crate::container::SecretContainer;
use crate::context::ProtectionContext;
use crate::error::SecretError;
use crate::strategy::KeystreamProtection;

fn fixed_context() -> ProtectionContext {
    ProtectionContext::with_strategy(Arc::new(KeystreamProtection::new([0x42; 32])))
}

// =============================================================================
// Construction and retrieval
// =============================================================================

#[test]
fn test_source_buffer_is_zeroized() {
    let ctx = fixed_context();
    let mut plaintext = *b"hunter2";
    let secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");

    assert_eq!(plaintext, [0u8; 7]);
    assert_eq!(secret.len(), 7);
    assert!(secret.is_protected());
    assert!(!secret.is_disposed());
}

#[test]
fn test_to_vec_round_trip() {
    let ctx = fixed_context();
    let mut plaintext = *b"a secret worth keeping";
    let secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");

    let revealed = secret.to_vec().expect("Failed to to_vec()");
    assert_eq!(&revealed[..], b"a secret worth keeping");
}

#[test]
fn test_copy_to_round_trip() {
    let ctx = fixed_context();
    let mut plaintext = *b"copy me";
    let secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");

    let mut dest = [0u8; 7];
    secret.copy_to(&mut dest).expect("Failed to copy_to(..)");
    assert_eq!(&dest, b"copy me");
}

#[test]
fn test_copy_to_rejects_wrong_length() {
    let ctx = fixed_context();
    let mut plaintext = *b"seven!!";
    let secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");

    let mut dest = [0u8; 3];
    assert_eq!(
        secret.copy_to(&mut dest),
        Err(SecretError::LengthMismatch {
            expected: 7,
            actual: 3,
        })
    );
}

#[test]
fn test_unprotected_container() {
    let ctx = fixed_context();
    let mut plaintext = *b"exposed";
    let secret =
        SecretContainer::new_unprotected(&ctx, &mut plaintext).expect("Failed to build container");

    assert!(!secret.is_protected());
    assert_eq!(plaintext, [0u8; 7]);
    assert_eq!(&secret.to_vec().expect("Failed to to_vec()")[..], b"exposed");
}

#[test]
fn test_empty_secret() {
    let ctx = fixed_context();
    let mut plaintext = [0u8; 0];
    let secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");

    assert!(secret.is_empty());
    assert!(secret.to_vec().expect("Failed to to_vec()").is_empty());
    assert!(secret.eq_bytes(b"").expect("Failed to eq_bytes(..)"));
}

#[test]
fn test_ids_are_unique_per_context() {
    let ctx = fixed_context();
    let mut a = *b"same";
    let mut b = *b"same";
    let first = SecretContainer::new(&ctx, &mut a).expect("Failed to build container");
    let second = SecretContainer::new(&ctx, &mut b).expect("Failed to build container");
    assert_ne!(first.id(), second.id());
}

// =============================================================================
// Equality without decryption
// =============================================================================

#[test]
fn test_eq_bytes() {
    let ctx = fixed_context();
    let mut plaintext = *b"hunter2";
    let secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");

    assert!(secret.eq_bytes(b"hunter2").expect("Failed to eq_bytes(..)"));
    assert!(!secret.eq_bytes(b"hunter3").expect("Failed to eq_bytes(..)"));
    assert!(!secret.eq_bytes(b"hunter").expect("Failed to eq_bytes(..)"));
}

#[test]
fn test_containers_with_equal_plaintext_compare_equal() {
    let ctx = fixed_context();
    let mut a = *b"shared value";
    let mut b = *b"shared value";
    let first = SecretContainer::new(&ctx, &mut a).expect("Failed to build container");
    let second = SecretContainer::new(&ctx, &mut b).expect("Failed to build container");

    // Distinct ids mean distinct ciphertexts, yet they compare equal
    assert!(
        first
            .constant_time_eq(&second)
            .expect("Failed to constant_time_eq(..)")
    );
}

#[test]
fn test_containers_with_different_plaintext_compare_unequal() {
    let ctx = fixed_context();
    let mut a = *b"first value!";
    let mut b = *b"second value";
    let first = SecretContainer::new(&ctx, &mut a).expect("Failed to build container");
    let second = SecretContainer::new(&ctx, &mut b).expect("Failed to build container");

    assert!(
        !first
            .constant_time_eq(&second)
            .expect("Failed to constant_time_eq(..)")
    );
}

#[test]
fn test_protected_and_unprotected_compare_by_plaintext() {
    let ctx = fixed_context();
    let mut a = *b"same either way";
    let mut b = *b"same either way";
    let protected = SecretContainer::new(&ctx, &mut a).expect("Failed to build container");
    let verbatim =
        SecretContainer::new_unprotected(&ctx, &mut b).expect("Failed to build container");

    assert!(
        protected
            .constant_time_eq(&verbatim)
            .expect("Failed to constant_time_eq(..)")
    );
}

// =============================================================================
// Update and disposal
// =============================================================================

#[test]
fn test_update_replaces_value_and_id() {
    let ctx = fixed_context();
    let mut plaintext = *b"before";
    let mut secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");
    let old_id = secret.id();

    let mut replacement = *b"after, and longer";
    secret
        .update(&ctx, &mut replacement)
        .expect("Failed to update(..)");

    assert_ne!(secret.id(), old_id);
    assert_eq!(replacement, [0u8; 17]);
    assert_eq!(secret.len(), 17);
    assert!(secret.eq_bytes(b"after, and longer").expect("Failed to eq_bytes(..)"));
    assert!(!secret.eq_bytes(b"before").expect("Failed to eq_bytes(..)"));
}

#[test]
fn test_dispose_poisons_every_operation() {
    let ctx = fixed_context();
    let mut plaintext = *b"short-lived";
    let mut secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");
    let mut other_plaintext = *b"other";
    let other =
        SecretContainer::new(&ctx, &mut other_plaintext).expect("Failed to build container");

    secret.dispose();
    assert!(secret.is_disposed());
    assert_eq!(secret.len(), 0);

    assert_eq!(secret.to_vec().err(), Some(SecretError::Disposed));
    assert_eq!(secret.copy_to(&mut [0u8; 1]).err(), Some(SecretError::Disposed));
    assert_eq!(secret.eq_bytes(b"short-lived").err(), Some(SecretError::Disposed));
    assert_eq!(
        secret.constant_time_eq(&other).err(),
        Some(SecretError::Disposed)
    );
    assert_eq!(
        other.constant_time_eq(&secret).err(),
        Some(SecretError::Disposed)
    );

    let mut replacement = *b"no";
    assert_eq!(
        secret.update(&ctx, &mut replacement).err(),
        Some(SecretError::Disposed)
    );

    // Idempotent
    secret.dispose();
    assert!(secret.is_disposed());
}

#[test]
fn test_debug_is_redacted() {
    let ctx = fixed_context();
    let mut plaintext = *b"hidden";
    let secret = SecretContainer::new(&ctx, &mut plaintext).expect("Failed to build container");
    assert_eq!(format!("{secret:?}"), "SecretContainer { [protected] }");
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip(plaintext in proptest::collection::vec(any::<u8>(), 0..128)) {
        let ctx = fixed_context();
        let mut source = plaintext.clone();
        let secret =
            SecretContainer::new(&ctx, &mut source).expect("Failed to build container");

        prop_assert!(source.iter().all(|&b| b == 0));
        prop_assert_eq!(&secret.to_vec().expect("Failed to to_vec()")[..], &plaintext[..]);
        prop_assert!(secret.eq_bytes(&plaintext).expect("Failed to eq_bytes(..)"));
    }

    #[test]
    fn prop_equality_matches_plaintext_equality(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let ctx = fixed_context();
        let mut source_a = a.clone();
        let mut source_b = b.clone();
        let first =
            SecretContainer::new(&ctx, &mut source_a).expect("Failed to build container");
        let second =
            SecretContainer::new(&ctx, &mut source_b).expect("Failed to build container");

        prop_assert_eq!(
            first.constant_time_eq(&second).expect("Failed to constant_time_eq(..)"),
            a == b
        );
    }
}
