// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # ravelin_stream
//!
//! Framed authenticated byte streams.
//!
//! Each write call becomes one frame carrying a sequence number, a digest
//! of the payload, and the payload itself. The reader verifies frame
//! order and recomputes each digest, so reordering, corruption, and
//! mid-stream truncation all surface as errors instead of silently
//! yielding wrong bytes. A zero-hash, zero-length frame marks the
//! authenticated end of stream.
//!
//! Framing is generic over any [`Digestive`](ravelin_hash::Digestive)
//! hasher; the digest length on the wire follows the hasher's output
//! length.
//!
//! ## Example
//!
//! ```rust
//! use ravelin_hash::Sha256Digest;
//! use ravelin_stream::{AuthenticatedReader, AuthenticatedWriter};
//!
//! let mut writer = AuthenticatedWriter::new(Vec::new(), Sha256Digest::new());
//! writer.write_frame(b"first chunk").expect("Failed to write_frame(..)");
//! writer.write_frame(b"second chunk").expect("Failed to write_frame(..)");
//! let framed = writer.finish().expect("Failed to finish()");
//!
//! let mut reader =
//!     AuthenticatedReader::new(framed.as_slice(), Sha256Digest::new());
//! assert_eq!(
//!     reader.read_frame().expect("Failed to read_frame()").as_deref(),
//!     Some(&b"first chunk"[..])
//! );
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod reader;
mod writer;

pub use error::StreamError;
pub use reader::AuthenticatedReader;
pub use writer::AuthenticatedWriter;
