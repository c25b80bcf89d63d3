// Copyright (c) 2025-2026 Ravelin Contributors
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod container;
