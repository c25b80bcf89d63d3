// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use sha2::digest::Output;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use crate::error::HashError;
use crate::traits::Digestive;

macro_rules! sha_digestive {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $len:expr) => {
        $(#[$meta])*
        pub struct $name {
            inner: $inner,
            finalized: bool,
        }

        impl $name {
            /// Builds a fresh hasher.
            pub fn new() -> Self {
                Self {
                    inner: <$inner as Digest>::new(),
                    finalized: false,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Digestive for $name {
            fn update(&mut self, data: &[u8]) -> Result<(), HashError> {
                if self.finalized {
                    return Err(HashError::Finalized);
                }
                Digest::update(&mut self.inner, data);
                Ok(())
            }

            fn finalize_into(&mut self, out: &mut [u8]) -> Result<(), HashError> {
                if self.finalized {
                    return Err(HashError::Finalized);
                }
                if out.len() != $len {
                    return Err(HashError::OutputBufferMismatch {
                        expected: $len,
                        actual: out.len(),
                    });
                }
                let mut digest = Output::<$inner>::default();
                Digest::finalize_into_reset(&mut self.inner, &mut digest);
                out.copy_from_slice(&digest);
                digest.as_mut_slice().zeroize();
                self.finalized = true;
                Ok(())
            }

            fn reset(&mut self) {
                Digest::reset(&mut self.inner);
                self.finalized = false;
            }

            fn output_len(&self) -> usize {
                $len
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), " {{ [protected] }}"))
            }
        }
    };
}

sha_digestive!(
    /// SHA-256 behind the [`Digestive`] seam, 32-byte digest.
    Sha256Digest,
    Sha256,
    32
);

sha_digestive!(
    /// SHA-384 behind the [`Digestive`] seam, 48-byte digest.
    Sha384Digest,
    Sha384,
    48
);

sha_digestive!(
    /// SHA-512 behind the [`Digestive`] seam, 64-byte digest.
    Sha512Digest,
    Sha512,
    64
);
