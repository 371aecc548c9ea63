// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dynamic dispatch over the native host.
//
// Any method name resolves to a call: an override table handles the few
// operations whose calling convention needs reshaping, everything else takes
// the generic encode → invoke → decode path. The bridge keeps no state
// between calls; each is an independent request/response exchange, and the
// host object is the only shared resource.

use std::sync::Arc;
use std::time::Duration;

use handbill_core::config::{BridgeConfig, UnknownMethodPolicy};
use handbill_core::error::{HandbillError, Result};
use handbill_core::types::Value;
use serde_json::Map;
use tracing::{debug, warn};

use crate::codec;
use crate::host::NativeHost;

/// Pause inserted before the native `dismiss`, giving a departing CSS
/// animation time to start before the message view is torn down.
pub const DISMISS_DELAY: Duration = Duration::from_millis(10);

/// Operations whose calling convention is reshaped before the host sees
/// them. Everything not listed here takes the generic path.
enum Override {
    /// Variadic strings and/or a single array flatten into one flat array
    /// argument (`addTag` / `removeTag`).
    TagUnion,
    /// Invocation is delayed by `DISMISS_DELAY` (`dismiss`).
    DelayedDismiss,
}

fn override_for(method: &str) -> Option<Override> {
    match method {
        "addTag" | "removeTag" => Some(Override::TagUnion),
        "dismiss" => Some(Override::DelayedDismiss),
        _ => None,
    }
}

/// The page-facing bridge object.
///
/// Cheap to clone; all clones share one host. Construct one per document and
/// hand it to the wiring pass explicitly; there is no ambient singleton.
#[derive(Clone)]
pub struct Bridge {
    host: Arc<dyn NativeHost>,
    config: BridgeConfig,
}

impl Bridge {
    pub fn new(host: Arc<dyn NativeHost>, config: BridgeConfig) -> Self {
        Self { host, config }
    }

    /// Bridge with the canonical protocol settings.
    pub fn with_defaults(host: Arc<dyn NativeHost>) -> Self {
        Self::new(host, BridgeConfig::default())
    }

    /// Invoke `method` on the native host with the given arguments.
    ///
    /// The host runs synchronously inside the call, but every outcome
    /// (result, missing method, native failure) settles the returned
    /// future, so call sites see one asynchronous contract regardless of
    /// the underlying call's real synchrony.
    pub async fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        match override_for(method) {
            Some(Override::TagUnion) => {
                let tags = flatten_tags(args);
                self.forward(method, &[tags])
            }
            Some(Override::DelayedDismiss) => {
                tokio::time::sleep(DISMISS_DELAY).await;
                self.forward(method, args)
            }
            None => self.forward(method, args),
        }
    }

    /// The generic encode → invoke → decode path.
    fn forward(&self, method: &str, args: &[Value]) -> Result<Value> {
        if !self.host.provides(method) {
            return match self.config.unknown_method {
                UnknownMethodPolicy::Reject => {
                    warn!(method, "call to unknown native method");
                    Err(HandbillError::UnknownMethod(method.to_string()))
                }
                UnknownMethodPolicy::ResolveNull => Ok(Value::Null),
            };
        }
        let encoded = codec::encode_args(args);
        debug!(method, argc = encoded.len(), "invoking native method");
        let raw = self.host.invoke(method, &encoded)?;
        codec::decode_result(raw, self.config.legacy_envelopes)
    }

    /// Invoke a void method and discard the decoded result.
    async fn void(&self, method: &str, args: &[Value]) -> Result<()> {
        self.call(method, args).await.map(|_| ())
    }

    /// Invoke a niladic string getter. An empty string means the host had
    /// no value, matching the native side's fallback convention.
    async fn string_result(&self, method: &str) -> Result<Option<String>> {
        let value = self.call(method, &[]).await?;
        Ok(match value {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    // -- Tags ---------------------------------------------------------------

    /// Attach tags to the installation. Accepts the same shapes as the
    /// dynamic `addTag` call: strings and/or one array, flattened one level.
    pub async fn add_tag(&self, tags: &[Value]) -> Result<()> {
        self.void("addTag", tags).await
    }

    /// Remove tags from the installation.
    pub async fn remove_tag(&self, tags: &[Value]) -> Result<()> {
        self.void("removeTag", tags).await
    }

    /// Remove every tag from the installation.
    pub async fn remove_all_tags(&self) -> Result<()> {
        self.void("removeAllTags", &[]).await
    }

    /// Whether the installation carries the given tag.
    pub async fn has_tag(&self, tag: &str) -> Result<bool> {
        let value = self.call("hasTag", &[Value::String(tag.to_string())]).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// All tags on the installation. Non-string entries are skipped.
    pub async fn get_tags(&self) -> Result<Vec<String>> {
        let value = self.call("getTags", &[]).await?;
        let Value::Array(items) = value else {
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect())
    }

    // -- Properties ---------------------------------------------------------

    /// A single custom property value.
    pub async fn get_property_value(&self, field: &str) -> Result<Value> {
        self.call("getPropertyValue", &[Value::String(field.to_string())])
            .await
    }

    /// All values of a multi-valued custom property.
    pub async fn get_property_values(&self, field: &str) -> Result<Vec<Value>> {
        let value = self
            .call("getPropertyValues", &[Value::String(field.to_string())])
            .await?;
        Ok(match value {
            Value::Array(items) => items,
            _ => Vec::new(),
        })
    }

    /// Add a value to a multi-valued custom property.
    pub async fn add_property(&self, field: &str, value: &Value) -> Result<()> {
        self.void(
            "addProperty",
            &[Value::String(field.to_string()), value.clone()],
        )
        .await
    }

    /// Remove a value from a multi-valued custom property.
    pub async fn remove_property(&self, field: &str, value: &Value) -> Result<()> {
        self.void(
            "removeProperty",
            &[Value::String(field.to_string()), value.clone()],
        )
        .await
    }

    /// Set (or replace) a custom property.
    pub async fn set_property(&self, field: &str, value: &Value) -> Result<()> {
        self.void(
            "setProperty",
            &[Value::String(field.to_string()), value.clone()],
        )
        .await
    }

    /// Remove a custom property entirely.
    pub async fn unset_property(&self, field: &str) -> Result<()> {
        self.void("unsetProperty", &[Value::String(field.to_string())])
            .await
    }

    /// Merge a set of custom properties into the installation.
    pub async fn put_properties(&self, properties: &Map<String, Value>) -> Result<()> {
        self.void("putProperties", &[Value::Object(properties.clone())])
            .await
    }

    /// The installation's full custom property object.
    pub async fn get_properties(&self) -> Result<Map<String, Value>> {
        let value = self.call("getProperties", &[]).await?;
        Ok(match value {
            Value::Object(map) => map,
            _ => Map::new(),
        })
    }

    // -- Events -------------------------------------------------------------

    /// Record a click on a labelled message button.
    pub async fn track_click(&self, button_label: &str) -> Result<()> {
        self.void("trackClick", &[Value::String(button_label.to_string())])
            .await
    }

    /// Track a custom event.
    pub async fn track_event(&self, event_type: &str) -> Result<()> {
        self.void("trackEvent", &[Value::String(event_type.to_string())])
            .await
    }

    /// Track a custom event with structured attributes.
    pub async fn track_event_with_attributes(
        &self,
        event_type: &str,
        attributes: &Map<String, Value>,
    ) -> Result<()> {
        self.void(
            "trackEvent",
            &[
                Value::String(event_type.to_string()),
                Value::Object(attributes.clone()),
            ],
        )
        .await
    }

    // -- Subscription -------------------------------------------------------

    pub async fn subscribe_to_notifications(&self) -> Result<()> {
        self.void("subscribeToNotifications", &[]).await
    }

    pub async fn unsubscribe_from_notifications(&self) -> Result<()> {
        self.void("unsubscribeFromNotifications", &[]).await
    }

    pub async fn is_subscribed_to_notifications(&self) -> Result<bool> {
        let value = self.call("isSubscribedToNotifications", &[]).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    // -- Installation identity ----------------------------------------------

    pub async fn user_id(&self) -> Result<Option<String>> {
        self.string_result("getUserId").await
    }

    pub async fn installation_id(&self) -> Result<Option<String>> {
        self.string_result("getInstallationId").await
    }

    pub async fn country(&self) -> Result<Option<String>> {
        self.string_result("getCountry").await
    }

    pub async fn currency(&self) -> Result<Option<String>> {
        self.string_result("getCurrency").await
    }

    pub async fn locale(&self) -> Result<Option<String>> {
        self.string_result("getLocale").await
    }

    pub async fn time_zone(&self) -> Result<Option<String>> {
        self.string_result("getTimeZone").await
    }

    // -- View control -------------------------------------------------------

    /// Close the message view. Waits `DISMISS_DELAY` before the native call
    /// so a departing animation can start first.
    pub async fn dismiss(&self) -> Result<()> {
        self.void("dismiss", &[]).await
    }

    /// Open a URL in the device browser.
    pub async fn open_external_url(&self, url: &str) -> Result<()> {
        self.void("openExternalUrl", &[Value::String(url.to_string())])
            .await
    }

    /// Follow an application deep link.
    pub async fn open_deep_link(&self, url: &str) -> Result<()> {
        self.void("openDeepLink", &[Value::String(url.to_string())])
            .await
    }

    /// Ask the OS for location permission.
    pub async fn trigger_location_prompt(&self) -> Result<()> {
        self.void("triggerLocationPrompt", &[]).await
    }

    /// Open the platform's app rating flow.
    pub async fn open_app_rating(&self) -> Result<()> {
        self.void("openAppRating", &[]).await
    }
}

/// Normalise a tag argument list into a single flat array.
///
/// A single array argument supplies the list; otherwise the variadic
/// arguments are the list. Arrays nested one level deep are expanded;
/// anything deeper is kept as-is.
fn flatten_tags(args: &[Value]) -> Value {
    let list: Vec<Value> = match args {
        [Value::Array(items)] => items.clone(),
        other => other.to_vec(),
    };
    let mut flat = Vec::with_capacity(list.len());
    for item in list {
        match item {
            Value::Array(items) => flat.extend(items),
            other => flat.push(other),
        }
    }
    Value::Array(flat)
}
