// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic and fault-injecting entropy sources for tests.

mod fixed_entropy_source;
mod mock_entropy_source;

pub use fixed_entropy_source::FixedEntropySource;
pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
