// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Marshalling codec for the string-only native boundary.
//
// Arguments leave the page as plain strings (untagged) or as
// `"__<type>__"`-prefixed strings; results come back as nothing, a plain
// string, or a tagged serialized structure. Decoding is the left inverse of
// encoding for every representable value.

use handbill_core::error::Result;
use handbill_core::types::{TransportArg, Value};
use tracing::warn;

use crate::envelope::ResponseEnvelope;

/// Tag prefix for numeric arguments.
pub const NUMBER_ARG_PREFIX: &str = "__number__";
/// Tag prefix for boolean arguments.
pub const BOOLEAN_ARG_PREFIX: &str = "__boolean__";
/// Tag prefix for structured arguments. Arrays share the object tag on the
/// argument path (the page runtime types both as "object"); the payload
/// disambiguates.
pub const OBJECT_ARG_PREFIX: &str = "__object__";

/// Tag prefix for array-valued results.
pub const ARRAY_RESULT_PREFIX: &str = "__array__";
/// Tag prefix for object-valued results.
pub const OBJECT_RESULT_PREFIX: &str = "__object__";

/// Encode one value for transport.
///
/// Strings pass through untagged and unescaped so native string parameters
/// receive them as-is. Everything else is tagged. The value model admits no
/// cycles and serializes totally, so encoding never fails.
pub fn encode_value(value: &Value) -> TransportArg {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(format!("{BOOLEAN_ARG_PREFIX}{b}")),
        Value::Number(n) => Some(format!("{NUMBER_ARG_PREFIX}{n}")),
        composite => Some(format!("{OBJECT_ARG_PREFIX}{composite}")),
    }
}

/// Encode an argument list. Length and order are preserved.
pub fn encode_args(args: &[Value]) -> Vec<TransportArg> {
    args.iter().map(encode_value).collect()
}

/// Decode one transport argument on the receiving (host) side.
///
/// Total: a tagged payload that fails to parse degrades to `Null`, and any
/// untagged string passes through literally. A literal string that itself
/// begins with a tag prefix is indistinguishable from an encoded value, so
/// tags win; host functions that expect plain strings should use the raw
/// argument directly instead of this helper.
pub fn decode_arg(arg: &TransportArg) -> Value {
    let Some(raw) = arg else {
        return Value::Null;
    };
    if let Some(payload) = raw.strip_prefix(BOOLEAN_ARG_PREFIX) {
        return Value::Bool(payload == "true");
    }
    if let Some(payload) = raw.strip_prefix(NUMBER_ARG_PREFIX) {
        return match serde_json::from_str::<serde_json::Number>(payload) {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Null,
        };
    }
    if let Some(payload) = raw.strip_prefix(OBJECT_ARG_PREFIX) {
        return serde_json::from_str(payload).unwrap_or(Value::Null);
    }
    Value::String(raw.clone())
}

/// Decode a raw native result into the value the caller's future settles
/// with.
///
/// `legacy_envelopes` enables the structured `{"result"}` / `{"error"}`
/// probe used by the previous bridge generation; structure wins over tag
/// prefixes. A tagged payload that fails to parse is logged and returned as
/// the untouched string; this path never fails the call.
pub fn decode_result(raw: Value, legacy_envelopes: bool) -> Result<Value> {
    let text = match raw {
        Value::String(s) => s,
        // Null, numbers, booleans, and structured passthrough come back
        // unchanged.
        other => return Ok(other),
    };
    if legacy_envelopes {
        if let Some(envelope) = ResponseEnvelope::probe(&text) {
            return envelope.into_result();
        }
    }
    for prefix in [ARRAY_RESULT_PREFIX, OBJECT_RESULT_PREFIX] {
        if let Some(payload) = text.strip_prefix(prefix) {
            return match serde_json::from_str::<Value>(payload) {
                Ok(parsed) => Ok(parsed),
                Err(err) => {
                    warn!(error = %err, prefix, "malformed tagged result payload, returning raw string");
                    Ok(Value::String(text))
                }
            };
        }
    }
    Ok(Value::String(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trip_representative_values() {
        let values = [
            json!(null),
            json!(true),
            json!(false),
            json!(42),
            json!(-7),
            json!(3.5),
            json!("plain"),
            json!([1, "two", {"three": 3}]),
            json!({"nested": {"deep": [true, null, 0.5]}}),
            json!({}),
            json!([]),
        ];
        for value in values {
            assert_eq!(decode_arg(&encode_value(&value)), value);
        }
    }

    #[test]
    fn encode_empty_list_is_empty() {
        assert!(encode_args(&[]).is_empty());
    }

    #[test]
    fn encode_preserves_length_and_order() {
        let args = [json!("a"), json!(null), json!(1), json!(["b"])];
        let encoded = encode_args(&args);
        assert_eq!(encoded.len(), args.len());
        assert_eq!(encoded[0], Some("a".to_string()));
        assert_eq!(encoded[1], None);
        assert_eq!(encoded[2], Some("__number__1".to_string()));
        assert_eq!(encoded[3], Some("__object__[\"b\"]".to_string()));
    }

    #[test]
    fn strings_pass_through_untagged() {
        assert_eq!(
            encode_value(&json!("hello \"world\"")),
            Some("hello \"world\"".to_string())
        );
    }

    #[test]
    fn booleans_and_numbers_are_tagged() {
        assert_eq!(encode_value(&json!(true)), Some("__boolean__true".to_string()));
        assert_eq!(encode_value(&json!(false)), Some("__boolean__false".to_string()));
        assert_eq!(encode_value(&json!(42)), Some("__number__42".to_string()));
        assert_eq!(encode_value(&json!(2.5)), Some("__number__2.5".to_string()));
    }

    #[test]
    fn objects_and_arrays_share_the_object_tag() {
        assert_eq!(
            encode_value(&json!({"x": 1})),
            Some("__object__{\"x\":1}".to_string())
        );
        assert_eq!(
            encode_value(&json!([1, 2, 3])),
            Some("__object__[1,2,3]".to_string())
        );
    }

    #[test]
    fn decode_arg_degrades_bad_payloads_to_null() {
        assert_eq!(decode_arg(&Some("__number__abc".to_string())), json!(null));
        assert_eq!(decode_arg(&Some("__object__{oops".to_string())), json!(null));
    }

    #[test]
    fn decode_result_parses_tagged_structures() {
        let object = decode_result(json!("__object__{\"x\":1}"), true).unwrap();
        assert_eq!(object, json!({"x": 1}));

        let array = decode_result(json!("__array__[1,2,3]"), true).unwrap();
        assert_eq!(array, json!([1, 2, 3]));
    }

    #[test]
    fn decode_result_passes_plain_values_through() {
        assert_eq!(decode_result(json!("plain"), true).unwrap(), json!("plain"));
        assert_eq!(decode_result(json!(null), true).unwrap(), json!(null));
        assert_eq!(decode_result(json!(7), true).unwrap(), json!(7));
        assert_eq!(decode_result(json!(true), true).unwrap(), json!(true));
    }

    #[test]
    fn malformed_tagged_result_degrades_to_raw_string() {
        let raw = "__object__{not json";
        let decoded = decode_result(json!(raw), true).unwrap();
        assert_eq!(decoded, json!(raw));
    }

    #[test]
    fn envelope_probe_wins_over_tag_scheme() {
        let decoded = decode_result(json!("{\"result\": [1, 2]}"), true).unwrap();
        assert_eq!(decoded, json!([1, 2]));

        // With the probe disabled the same string is just a string.
        let decoded = decode_result(json!("{\"result\": [1, 2]}"), false).unwrap();
        assert_eq!(decoded, json!("{\"result\": [1, 2]}"));
    }

    #[test]
    fn envelope_error_fails_the_decode() {
        let err = decode_result(json!("{\"error\": \"denied\"}"), true).unwrap_err();
        assert_eq!(err.to_string(), "denied");
    }
}
