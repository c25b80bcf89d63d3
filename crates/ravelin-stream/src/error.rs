// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ravelin_hash::HashError;
use thiserror::Error;

/// Authenticated stream errors.
#[derive(Error, Debug)]
pub enum StreamError {
    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The frame hasher failed.
    #[error(transparent)]
    Hash(#[from] HashError),

    /// A frame arrived with the wrong sequence number.
    #[error("frame {found} out of order, expected {expected}")]
    OutOfOrder {
        /// The sequence number the reader was waiting for.
        expected: i32,
        /// The sequence number found on the wire.
        found: i32,
    },

    /// The payload digest did not match the frame's hash.
    #[error("frame hash mismatch")]
    FrameCorrupted,

    /// The underlying stream ended inside a frame, before the
    /// end-of-stream marker.
    #[error("stream truncated mid-frame")]
    Truncated,

    /// A frame declared a negative payload length.
    #[error("malformed frame length {0}")]
    MalformedFrame(i32),

    /// The payload does not fit the frame length field.
    #[error("payload of {0} bytes exceeds the frame limit")]
    PayloadTooLarge(usize),
}
