// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Legacy response envelope.
//
// The previous bridge generation wrapped every result in a JSON object with
// a `result` key (success) or an `error` key (failure) instead of tagging
// serialized structures. Decoding probes for this shape before applying the
// tag scheme so hosts of either generation keep working.

use handbill_core::error::{HandbillError, Result};
use handbill_core::types::Value;

/// A decoded legacy envelope: success payload or failure message.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    Result(Value),
    Error(String),
}

impl ResponseEnvelope {
    /// Probe a raw result string for the envelope shape.
    ///
    /// Returns `None` unless the string parses as a JSON object carrying a
    /// `result` or `error` key; plain strings, tagged payloads, and any
    /// other JSON fall through to the tag scheme. When both keys are
    /// present, `error` wins.
    pub fn probe(raw: &str) -> Option<Self> {
        let Ok(Value::Object(mut map)) = serde_json::from_str::<Value>(raw) else {
            return None;
        };
        if let Some(error) = map.remove("error") {
            let message = match error {
                Value::String(s) => s,
                other => other.to_string(),
            };
            return Some(Self::Error(message));
        }
        map.remove("result").map(Self::Result)
    }

    /// Convert into the call outcome the envelope describes.
    pub fn into_result(self) -> Result<Value> {
        match self {
            Self::Result(value) => Ok(value),
            Self::Error(message) => Err(HandbillError::ErrorResponse(message)),
        }
    }
}
