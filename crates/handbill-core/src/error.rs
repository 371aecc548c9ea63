// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Handbill.
//
// Every failure a call site can observe arrives through the call's future.
// Nothing on the dispatch path panics or escapes synchronously.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum HandbillError {
    /// The requested method has no matching native function and the bridge
    /// is configured with `UnknownMethodPolicy::Reject`.
    #[error("no native method named {0:?}")]
    UnknownMethod(String),

    /// The native function failed. Carries the host's error message.
    #[error("native call failed: {0}")]
    Host(String),

    /// A legacy response envelope carried an `error` key.
    #[error("{0}")]
    ErrorResponse(String),

    /// JSON (de)serialization failed inside a host implementation.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, HandbillError>;
