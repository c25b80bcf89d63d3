// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the nonce registry.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crate::error::EntropyError;
use crate::registry::NonceRegistry;
use crate::system::SystemEntropySource;

// =============================================================================
// issue()
// =============================================================================

#[test]
fn test_issue_returns_requested_length() {
    let registry = NonceRegistry::new(SystemEntropySource);
    let nonce = registry.issue(12).expect("Failed to issue(..)");
    assert_eq!(nonce.len(), 12);
}

#[test]
fn test_issue_zero_length_fails() {
    let registry = NonceRegistry::new(SystemEntropySource);
    assert_eq!(registry.issue(0), Err(EntropyError::NonceLengthZero));
}

#[test]
fn test_issued_nonces_are_pairwise_distinct() {
    let registry = NonceRegistry::new(SystemEntropySource);

    let mut seen = HashSet::new();
    for _ in 0..256 {
        let nonce = registry.issue(8).expect("Failed to issue(..)");
        assert!(seen.insert(nonce), "registry issued a duplicate nonce");
    }
    assert_eq!(registry.len().expect("Failed to len()"), 256);
}

#[test]
fn test_single_byte_nonce_space_exhausts() {
    let registry = NonceRegistry::new(SystemEntropySource);

    // 256 distinct single-byte values exist; issuing all of them must
    // succeed eventually and the 257th must fail.
    let mut issued = 0;
    loop {
        match registry.issue(1) {
            Ok(_) => issued += 1,
            Err(EntropyError::NonceSpaceExhausted(_)) => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
        assert!(issued <= 256);
    }
}

// =============================================================================
// Concurrent issuance
// =============================================================================

#[test]
fn test_concurrent_issuance_yields_distinct_nonces() {
    let registry = Arc::new(NonceRegistry::new(SystemEntropySource));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                (0..64)
                    .map(|_| registry.issue(8).expect("Failed to issue(..)"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for nonce in handle.join().expect("issuing thread panicked") {
            assert!(seen.insert(nonce), "duplicate nonce under concurrency");
        }
    }
    assert_eq!(seen.len(), 8 * 64);
}

// =============================================================================
// release() / clear()
// =============================================================================

#[test]
fn test_release_frees_entry() {
    let registry = NonceRegistry::new(SystemEntropySource);
    let nonce = registry.issue(16).expect("Failed to issue(..)");

    assert!(registry.release(&nonce, true).expect("Failed to release(..)"));
    assert!(registry.is_empty().expect("Failed to is_empty()"));

    // Releasing again reports the entry as gone
    assert!(!registry.release(&nonce, false).expect("Failed to release(..)"));
}

#[test]
fn test_clear_empties_registry() {
    let registry = NonceRegistry::new(SystemEntropySource);
    for _ in 0..16 {
        registry.issue(8).expect("Failed to issue(..)");
    }

    registry.clear(true).expect("Failed to clear(..)");
    assert!(registry.is_empty().expect("Failed to is_empty()"));
}
