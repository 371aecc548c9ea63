// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge protocol configuration.

use serde::{Deserialize, Serialize};

/// What `Bridge::call` does when the host exposes no function under the
/// requested name.
///
/// The two shipped generations of the page-side SDK disagree here: one fails
/// the call, the other quietly yields nothing. `Reject` is the default;
/// embedders that need the older behaviour opt into `ResolveNull`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownMethodPolicy {
    /// Fail the call with `HandbillError::UnknownMethod`.
    Reject,
    /// Resolve with `Value::Null`, as if the host returned no value.
    ResolveNull,
}

/// Per-bridge protocol settings.
///
/// The defaults are the canonical protocol: unknown methods reject, and
/// string results are probed for the legacy response envelope before the
/// tag-prefix scheme applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Behaviour for method names the host does not provide.
    pub unknown_method: UnknownMethodPolicy,
    /// Probe string results for the legacy `{"result": …}` / `{"error": …}`
    /// envelope. Structure wins over tag prefixes when both could apply, so
    /// hosts on the current protocol should return tagged strings only.
    pub legacy_envelopes: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            unknown_method: UnknownMethodPolicy::Reject,
            legacy_envelopes: true,
        }
    }
}
