// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Authenticated framing round-trip and tamper tests.

use proptest::prelude::*;

use ravelin_hash::{Blake2b, Sha256Digest};

use crate::error::StreamError;
use crate::reader::AuthenticatedReader;
use crate::writer::AuthenticatedWriter;

const FRAME_OVERHEAD: usize = 4 + 32 + 4; // sequence + SHA-256 hash + length

fn frame(payloads: &[&[u8]]) -> Vec<u8> {
    let mut writer = AuthenticatedWriter::new(Vec::new(), Sha256Digest::new());
    for payload in payloads {
        writer.write_frame(payload).expect("Failed to write_frame(..)");
    }
    writer.finish().expect("Failed to finish()")
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_round_trip() {
    let framed = frame(&[b"first chunk", b"second chunk", b"third"]);

    let mut reader = AuthenticatedReader::new(framed.as_slice(), Sha256Digest::new());
    assert_eq!(
        reader.read_frame().expect("Failed to read_frame()").as_deref(),
        Some(&b"first chunk"[..])
    );
    assert_eq!(
        reader.read_frame().expect("Failed to read_frame()").as_deref(),
        Some(&b"second chunk"[..])
    );
    assert_eq!(
        reader.read_frame().expect("Failed to read_frame()").as_deref(),
        Some(&b"third"[..])
    );
    assert_eq!(reader.read_frame().expect("Failed to read_frame()"), None);
    assert!(reader.is_done());
}

#[test]
fn test_round_trip_with_blake2b() {
    let mut writer = AuthenticatedWriter::new(
        Vec::new(),
        Blake2b::new(32).expect("Failed to build hasher"),
    );
    writer.write_frame(b"blake-framed").expect("Failed to write_frame(..)");
    let framed = writer.finish().expect("Failed to finish()");

    let mut reader = AuthenticatedReader::new(
        framed.as_slice(),
        Blake2b::new(32).expect("Failed to build hasher"),
    );
    assert_eq!(
        reader.read_to_end().expect("Failed to read_to_end()"),
        b"blake-framed"
    );
}

#[test]
fn test_empty_payload_is_a_real_frame() {
    // Hash of the empty payload is non-zero, so this is not the marker
    let framed = frame(&[b""]);

    let mut reader = AuthenticatedReader::new(framed.as_slice(), Sha256Digest::new());
    assert_eq!(
        reader.read_frame().expect("Failed to read_frame()"),
        Some(Vec::new())
    );
    assert_eq!(reader.read_frame().expect("Failed to read_frame()"), None);
}

#[test]
fn test_reads_after_marker_keep_returning_none() {
    let framed = frame(&[b"only"]);
    let mut reader = AuthenticatedReader::new(framed.as_slice(), Sha256Digest::new());
    reader.read_to_end().expect("Failed to read_to_end()");
    for _ in 0..3 {
        assert_eq!(reader.read_frame().expect("Failed to read_frame()"), None);
    }
}

#[test]
fn test_wire_layout() {
    let framed = frame(&[b"abc"]);
    assert_eq!(framed.len(), (FRAME_OVERHEAD + 3) + FRAME_OVERHEAD);

    assert_eq!(&framed[0..4], &0i32.to_le_bytes());
    assert_eq!(&framed[36..40], &3i32.to_le_bytes());
    assert_eq!(&framed[40..43], b"abc");

    // Marker: next sequence, all-zero hash, zero length
    let marker = &framed[43..];
    assert_eq!(&marker[0..4], &1i32.to_le_bytes());
    assert!(marker[4..36].iter().all(|&b| b == 0));
    assert_eq!(&marker[36..40], &0i32.to_le_bytes());
}

#[test]
fn test_frames_written_counter() {
    let mut writer = AuthenticatedWriter::new(Vec::new(), Sha256Digest::new());
    assert_eq!(writer.frames_written(), 0);
    writer.write_frame(b"a").expect("Failed to write_frame(..)");
    writer.write_frame(b"b").expect("Failed to write_frame(..)");
    assert_eq!(writer.frames_written(), 2);
}

// =============================================================================
// Corruption and reordering
// =============================================================================

#[test]
fn test_tampered_payload_is_detected() {
    let mut framed = frame(&[b"payload under test"]);
    framed[FRAME_OVERHEAD] ^= 0x01; // first payload byte

    let mut reader = AuthenticatedReader::new(framed.as_slice(), Sha256Digest::new());
    assert!(matches!(
        reader.read_frame(),
        Err(StreamError::FrameCorrupted)
    ));
}

#[test]
fn test_tampered_hash_is_detected() {
    let mut framed = frame(&[b"payload under test"]);
    framed[4] ^= 0x01; // first hash byte

    let mut reader = AuthenticatedReader::new(framed.as_slice(), Sha256Digest::new());
    assert!(matches!(
        reader.read_frame(),
        Err(StreamError::FrameCorrupted)
    ));
}

#[test]
fn test_reordered_frames_are_detected() {
    let framed = frame(&[b"aaaa", b"bbbb"]);
    let frame_len = FRAME_OVERHEAD + 4;

    // Swap the two payload frames, leaving the marker in place
    let mut swapped = Vec::new();
    swapped.extend_from_slice(&framed[frame_len..2 * frame_len]);
    swapped.extend_from_slice(&framed[..frame_len]);
    swapped.extend_from_slice(&framed[2 * frame_len..]);

    let mut reader = AuthenticatedReader::new(swapped.as_slice(), Sha256Digest::new());
    assert!(matches!(
        reader.read_frame(),
        Err(StreamError::OutOfOrder {
            expected: 0,
            found: 1,
        })
    ));
}

#[test]
fn test_missing_marker_is_truncation_not_eof() {
    let framed = frame(&[b"unterminated"]);
    let without_marker = &framed[..framed.len() - FRAME_OVERHEAD];

    let mut reader = AuthenticatedReader::new(without_marker, Sha256Digest::new());
    assert_eq!(
        reader.read_frame().expect("Failed to read_frame()").as_deref(),
        Some(&b"unterminated"[..])
    );
    assert!(matches!(reader.read_frame(), Err(StreamError::Truncated)));
}

#[test]
fn test_cut_mid_payload_is_truncation() {
    let framed = frame(&[b"a longer payload that will be cut short"]);
    let cut = &framed[..FRAME_OVERHEAD + 5];

    let mut reader = AuthenticatedReader::new(cut, Sha256Digest::new());
    assert!(matches!(reader.read_frame(), Err(StreamError::Truncated)));
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_arbitrary_chunking(
        payloads in proptest::collection::vec(
            proptest::collection::vec(any::<u8>(), 0..64),
            0..8,
        ),
    ) {
        let mut writer = AuthenticatedWriter::new(Vec::new(), Sha256Digest::new());
        for payload in &payloads {
            writer.write_frame(payload).expect("Failed to write_frame(..)");
        }
        let framed = writer.finish().expect("Failed to finish()");

        let mut reader = AuthenticatedReader::new(framed.as_slice(), Sha256Digest::new());
        let expected: Vec<u8> = payloads.concat();
        prop_assert_eq!(
            reader.read_to_end().expect("Failed to read_to_end()"),
            expected
        );
    }
}
