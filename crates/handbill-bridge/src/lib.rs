// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Handbill — the WebView bridge proper: the marshalling codec for the
// string-only native boundary, the native host contract, and the dynamic
// dispatch layer page script talks to.

pub mod codec;
pub mod dispatch;
pub mod envelope;
pub mod host;

pub use dispatch::{Bridge, DISMISS_DELAY};
pub use envelope::ResponseEnvelope;
pub use host::{HostRegistry, NativeHost};
