// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Handbill — declarative wiring: common bridge operations usable from
// message markup alone, without page script.

pub mod document;
pub mod markers;
pub mod pass;

pub use document::{ElementId, PageElement, PageSnapshot, ReadyState};
pub use markers::{Invocation, Marker, WIRING_ORDER};
pub use pass::{Wiring, WiringBinding};
