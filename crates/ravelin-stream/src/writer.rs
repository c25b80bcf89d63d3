// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Write;

use ravelin_hash::Digestive;

use crate::error::StreamError;

/// Frames payloads into an authenticated stream.
///
/// Every [`write_frame`](AuthenticatedWriter::write_frame) emits
/// `sequence:i32 | hash(payload) | length:i32 | payload` (integers
/// little-endian); the sequence increments per call and is never reused
/// within one instance. [`finish`](AuthenticatedWriter::finish) consumes
/// the writer, emits the end-of-stream marker, and hands the inner writer
/// back, so an unterminated or double-terminated stream cannot be
/// expressed.
pub struct AuthenticatedWriter<W: Write, D: Digestive> {
    inner: W,
    hasher: D,
    sequence: i32,
}

impl<W: Write, D: Digestive> AuthenticatedWriter<W, D> {
    /// Wraps `inner`, hashing each payload with `hasher`.
    pub fn new(inner: W, hasher: D) -> Self {
        Self {
            inner,
            hasher,
            sequence: 0,
        }
    }

    /// Emits one authenticated frame carrying `payload`.
    pub fn write_frame(&mut self, payload: &[u8]) -> Result<(), StreamError> {
        if i32::try_from(payload.len()).is_err() {
            return Err(StreamError::PayloadTooLarge(payload.len()));
        }

        self.hasher.reset();
        self.hasher.update(payload)?;
        let mut hash = vec![0u8; self.hasher.output_len()];
        self.hasher.finalize_into(&mut hash)?;

        self.inner.write_all(&self.sequence.to_le_bytes())?;
        self.inner.write_all(&hash)?;
        self.inner.write_all(&(payload.len() as i32).to_le_bytes())?;
        self.inner.write_all(payload)?;

        self.sequence += 1;
        Ok(())
    }

    /// Emits the end-of-stream marker and returns the inner writer.
    pub fn finish(mut self) -> Result<W, StreamError> {
        let zero_hash = vec![0u8; self.hasher.output_len()];
        self.inner.write_all(&self.sequence.to_le_bytes())?;
        self.inner.write_all(&zero_hash)?;
        self.inner.write_all(&0i32.to_le_bytes())?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Frames written so far.
    pub fn frames_written(&self) -> i32 {
        self.sequence
    }
}
