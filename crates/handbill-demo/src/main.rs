// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Handbill — sample host and wired page, end to end.
//
// Builds an in-memory native host standing in for the real SDK, drives the
// bridge the way page script would, then wires a canned in-app message and
// simulates the clicks a user could make.

use std::sync::{Arc, Mutex};

use handbill_bridge::codec;
use handbill_bridge::{Bridge, HostRegistry};
use handbill_core::types::Value;
use handbill_wiring::{PageElement, PageSnapshot, ReadyState, Wiring};
use serde_json::json;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("handbill demo starting");

    let host = Arc::new(demo_host());
    tracing::info!(methods = ?host.method_names(), "native host ready");
    let bridge = Bridge::with_defaults(host);

    // Dynamic dispatch, exactly as page script would use it.
    let tags = bridge.call("getTags", &[]).await;
    tracing::info!(?tags, "getTags before");

    let added = bridge.add_tag(&[json!("vip"), json!(["beta", "mobile"])]).await;
    tracing::info!(?added, "addTag");

    let tags = bridge.get_tags().await;
    tracing::info!(?tags, "getTags after");

    let missing = bridge.call("notAMethod", &[]).await;
    tracing::info!(?missing, "unknown method outcome");

    // A canned in-app message: one button clears and re-tags, another
    // dismisses the view.
    let mut page = PageSnapshot::new(ReadyState::Loading);
    let offer = page.push_element(PageElement::with_attributes([
        ("data-handbill-button-label", "accept-offer"),
        ("data-handbill-remove-all-tags", ""),
        ("data-handbill-add-tag", "offer-2026"),
    ]));
    let close = page.push_element(PageElement::with_attributes([
        ("data-handbill-dismiss", ""),
    ]));

    let mut wiring = Wiring::new(bridge.clone());
    wiring.install(&page); // still loading, the pass stays armed
    page.set_complete();
    wiring.page_loaded(&page); // fires exactly once

    for outcome in wiring.click(offer).await {
        tracing::info!(?outcome, "offer click");
    }
    for outcome in wiring.click(close).await {
        tracing::info!(?outcome, "close click");
    }

    let tags = bridge.get_tags().await;
    tracing::info!(?tags, "getTags at exit");

    tracing::info!("handbill demo finished");
}

/// In-memory stand-in for the native SDK object. The tag store is the only
/// state, and it lives on the host side; the bridge itself carries none.
fn demo_host() -> HostRegistry {
    let tags = Arc::new(Mutex::new(vec!["early-adopter".to_string()]));
    let mut registry = HostRegistry::new();

    {
        let tags = Arc::clone(&tags);
        registry.register("getTags", move |_args| {
            let list = tags.lock().expect("tag store poisoned");
            let encoded = serde_json::to_string(&*list)?;
            Ok(Value::String(format!("__array__{encoded}")))
        });
    }
    {
        let tags = Arc::clone(&tags);
        registry.register("addTag", move |args| {
            let mut list = tags.lock().expect("tag store poisoned");
            if let Value::Array(items) = codec::decode_arg(args.first().unwrap_or(&None)) {
                for item in items {
                    if let Value::String(tag) = item {
                        if !list.contains(&tag) {
                            list.push(tag);
                        }
                    }
                }
            }
            Ok(Value::Null)
        });
    }
    {
        let tags = Arc::clone(&tags);
        registry.register("removeAllTags", move |_args| {
            tags.lock().expect("tag store poisoned").clear();
            Ok(Value::Null)
        });
    }
    registry.register("trackClick", |args| {
        tracing::info!(label = ?args.first(), "host: click tracked");
        Ok(Value::Null)
    });
    registry.register("dismiss", |_args| {
        tracing::info!("host: message view dismissed");
        Ok(Value::Null)
    });

    registry
}
