// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transport-level types shared across the bridge crates.

/// The bridge value model: `Null | Bool | Number | String | Array | Object`.
///
/// `serde_json::Value` is exactly the tagged union the protocol marshals.
/// Functions are unrepresentable, so the "functions are not transmissible"
/// rule of the wire convention holds by construction.
pub use serde_json::Value;

/// One argument as it crosses the string-only native boundary.
///
/// `None` is the null sentinel. Strings travel untagged and unescaped; every
/// other value becomes a `"__<type>__"`-prefixed string (see the codec in
/// `handbill-bridge`).
pub type TransportArg = Option<String>;
