// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Handbill — value model, errors, and configuration shared across the
// bridge crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BridgeConfig, UnknownMethodPolicy};
pub use error::HandbillError;
pub use types::{TransportArg, Value};
