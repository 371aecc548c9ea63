// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native host contract.
//
// The host is an opaque object exposing string-keyed synchronous functions;
// the bridge never enumerates it ahead of time. `HostRegistry` is the
// concrete implementation embedders populate with closures.

use std::collections::HashMap;

use handbill_core::error::{HandbillError, Result};
use handbill_core::types::{TransportArg, Value};

/// A synchronous native function reachable from page script.
///
/// Receives transport-encoded arguments and returns a raw result (`Null`,
/// a plain or tagged string, or a passthrough primitive). An `Err` models a
/// thrown native exception.
pub type HostFn = Box<dyn Fn(&[TransportArg]) -> Result<Value> + Send + Sync>;

/// The native side of the bridge.
pub trait NativeHost: Send + Sync {
    /// Whether the host exposes a callable under this name.
    fn provides(&self, method: &str) -> bool;

    /// Invoke a host function with transport-encoded arguments.
    ///
    /// Synchronous: the result (or error) is produced before this returns.
    /// The dispatch layer converts an `Err` into a failed call, never a
    /// panic.
    fn invoke(&self, method: &str, args: &[TransportArg]) -> Result<Value>;
}

/// String-keyed function table implementing `NativeHost`.
#[derive(Default)]
pub struct HostRegistry {
    methods: HashMap<String, HostFn>,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a native function under the name page script will call.
    /// Replaces any previous function with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&[TransportArg]) -> Result<Value> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(func));
    }

    /// Names of all registered functions, sorted. For diagnostics.
    pub fn method_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl NativeHost for HostRegistry {
    fn provides(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    fn invoke(&self, method: &str, args: &[TransportArg]) -> Result<Value> {
        match self.methods.get(method) {
            Some(func) => func(args),
            None => Err(HandbillError::UnknownMethod(method.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_provides_and_invokes() {
        let mut registry = HostRegistry::new();
        registry.register("ping", |_args| Ok(Value::String("pong".to_string())));

        assert!(registry.provides("ping"));
        assert!(!registry.provides("pong"));
        assert_eq!(
            registry.invoke("ping", &[]).unwrap(),
            Value::String("pong".to_string())
        );
    }

    #[test]
    fn registry_rejects_missing_methods() {
        let registry = HostRegistry::new();
        let err = registry.invoke("nope", &[]).unwrap_err();
        assert!(matches!(err, HandbillError::UnknownMethod(name) if name == "nope"));
    }

    #[test]
    fn registration_replaces_and_lists() {
        let mut registry = HostRegistry::new();
        registry.register("greet", |_| Ok(Value::String("hi".to_string())));
        registry.register("greet", |_| Ok(Value::String("hello".to_string())));
        registry.register("bye", |_| Ok(Value::Null));

        assert_eq!(registry.method_names(), vec!["bye", "greet"]);
        assert_eq!(
            registry.invoke("greet", &[]).unwrap(),
            Value::String("hello".to_string())
        );
    }
}
