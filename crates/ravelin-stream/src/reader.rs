// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Read;

use ravelin_hash::Digestive;
use subtle::ConstantTimeEq;

use crate::error::StreamError;

/// Reads and verifies an authenticated frame stream.
///
/// Frames must arrive in sequence order; each payload digest is
/// recomputed and compared in constant time. After the end-of-stream
/// marker, [`read_frame`](AuthenticatedReader::read_frame) keeps
/// returning `Ok(None)`.
pub struct AuthenticatedReader<R: Read, D: Digestive> {
    inner: R,
    hasher: D,
    sequence: i32,
    done: bool,
}

impl<R: Read, D: Digestive> AuthenticatedReader<R, D> {
    /// Wraps `inner`; `hasher` must match the writer's choice.
    pub fn new(inner: R, hasher: D) -> Self {
        Self {
            inner,
            hasher,
            sequence: 0,
            done: false,
        }
    }

    /// Reads the next frame's payload, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Fails on out-of-order frames, digest mismatches, and a stream that
    /// ends before the end-of-stream marker. A failed stream is not
    /// resumable.
    pub fn read_frame(&mut self) -> Result<Option<Vec<u8>>, StreamError> {
        if self.done {
            return Ok(None);
        }

        let sequence = self.read_i32()?;
        if sequence != self.sequence {
            return Err(StreamError::OutOfOrder {
                expected: self.sequence,
                found: sequence,
            });
        }

        let mut hash = vec![0u8; self.hasher.output_len()];
        self.read_exact(&mut hash)?;
        let length = self.read_i32()?;

        if length == 0 && hash.iter().all(|&b| b == 0) {
            self.done = true;
            return Ok(None);
        }
        if length < 0 {
            return Err(StreamError::MalformedFrame(length));
        }

        let mut payload = vec![0u8; length as usize];
        self.read_exact(&mut payload)?;

        self.hasher.reset();
        self.hasher.update(&payload)?;
        let mut computed = vec![0u8; self.hasher.output_len()];
        self.hasher.finalize_into(&mut computed)?;
        if !bool::from(computed.ct_eq(&hash)) {
            return Err(StreamError::FrameCorrupted);
        }

        self.sequence += 1;
        Ok(Some(payload))
    }

    /// Reads every remaining frame and concatenates the payloads.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>, StreamError> {
        let mut out = Vec::new();
        while let Some(payload) = self.read_frame()? {
            out.extend_from_slice(&payload);
        }
        Ok(out)
    }

    /// True once the end-of-stream marker has been consumed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Unwraps the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        self.inner.read_exact(buf).map_err(|err| {
            if err.kind() == std::io::ErrorKind::UnexpectedEof {
                StreamError::Truncated
            } else {
                StreamError::Io(err)
            }
        })
    }

    fn read_i32(&mut self) -> Result<i32, StreamError> {
        let mut bytes = [0u8; 4];
        self.read_exact(&mut bytes)?;
        Ok(i32::from_le_bytes(bytes))
    }
}
