// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use ravelin_rand::SystemEntropySource;

use crate::error::SecretError;
use crate::strategy::{KeystreamProtection, ProtectionStrategy};

static GLOBAL: OnceLock<ProtectionContext> = OnceLock::new();

/// Holds the active protection strategy and the container id counter.
///
/// Contexts are explicit, passable objects; nothing forces the use of
/// the process-wide default from [`global`](ProtectionContext::global).
/// The strategy is created lazily on first use, so building a context
/// never touches the OS entropy source.
#[derive(Default)]
pub struct ProtectionContext {
    strategy: Mutex<Option<Arc<dyn ProtectionStrategy>>>,
    next_id: AtomicU64,
}

impl core::fmt::Debug for ProtectionContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ProtectionContext {{ next_id: {} }}",
            self.next_id.load(Ordering::Relaxed)
        )
    }
}

impl ProtectionContext {
    /// Builds an empty context; the strategy is created on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context around an explicit strategy.
    pub fn with_strategy(strategy: Arc<dyn ProtectionStrategy>) -> Self {
        Self {
            strategy: Mutex::new(Some(strategy)),
            next_id: AtomicU64::new(0),
        }
    }

    /// The process-wide default context.
    pub fn global() -> &'static ProtectionContext {
        GLOBAL.get_or_init(ProtectionContext::new)
    }

    /// Draws a fresh process-unique container id.
    pub(crate) fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// The active strategy, creating a random-keyed
    /// [`KeystreamProtection`] on first use.
    pub fn strategy(&self) -> Result<Arc<dyn ProtectionStrategy>, SecretError> {
        let mut guard = self
            .strategy
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(strategy) = guard.as_ref() {
            return Ok(Arc::clone(strategy));
        }
        let fresh: Arc<dyn ProtectionStrategy> =
            Arc::new(KeystreamProtection::random(&SystemEntropySource)?);
        *guard = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    /// Replaces the active strategy.
    ///
    /// This is an administrative action. Containers capture their
    /// strategy at creation, so rotation only affects containers built
    /// afterwards; callers must not rotate while containers created under
    /// the old strategy are still expected to interoperate with new ones.
    pub fn rotate(&self, strategy: Arc<dyn ProtectionStrategy>) {
        let mut guard = self
            .strategy
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(strategy);
    }
}
