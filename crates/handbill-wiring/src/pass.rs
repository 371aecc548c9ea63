// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The one-shot wiring pass.
//
// Scans a loaded document for marker attributes and records, per element,
// the bridge invocations a click performs, in marker priority order. The
// pass runs once per document: attaching to a still-loading page arms it,
// the load notification fires it, and later notifications are no-ops.

use handbill_bridge::Bridge;
use handbill_core::error::Result;
use handbill_core::types::Value;
use tracing::{debug, info};

use crate::document::{ElementId, PageSnapshot, ReadyState};
use crate::markers::{Invocation, Marker, WIRING_ORDER};

/// One element-to-invocation association discovered by the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringBinding {
    pub element: ElementId,
    pub marker: Marker,
    /// The attribute's raw value, passed verbatim where the marker takes
    /// one. Parameterless markers ignore it.
    pub argument: String,
}

/// Declarative wiring for one document.
///
/// Holds no state beyond the bindings themselves; all call outcomes flow
/// through the bridge unmodified.
pub struct Wiring {
    bridge: Bridge,
    bindings: Vec<WiringBinding>,
    wired: bool,
}

impl Wiring {
    /// A pass bound to a bridge instance. Scans nothing until installed.
    pub fn new(bridge: Bridge) -> Self {
        Self {
            bridge,
            bindings: Vec::new(),
            wired: false,
        }
    }

    /// Attach to a document: scan immediately if it is already fully
    /// loaded, otherwise arm the pass for `page_loaded`.
    pub fn install(&mut self, page: &PageSnapshot) {
        if self.wired {
            return;
        }
        if page.ready_state() == ReadyState::Complete {
            self.scan(page);
        }
    }

    /// The document's load event. A second notification is a no-op.
    pub fn page_loaded(&mut self, page: &PageSnapshot) {
        if self.wired {
            return;
        }
        self.scan(page);
    }

    /// Discard all bindings and scan again, e.g. after the embedder swapped
    /// the document's content.
    pub fn rewire(&mut self, page: &PageSnapshot) {
        self.bindings.clear();
        self.wired = false;
        self.scan(page);
    }

    /// Whether the pass has run for the current document.
    pub fn wired(&self) -> bool {
        self.wired
    }

    /// Marker-major scan: for each marker in priority order, every element
    /// carrying its attribute gains a binding. An element with several
    /// markers therefore fires them in priority order on a single click.
    fn scan(&mut self, page: &PageSnapshot) {
        for marker in WIRING_ORDER {
            for (id, element) in page.elements() {
                if let Some(value) = element.attribute(marker.attribute()) {
                    self.bindings.push(WiringBinding {
                        element: id,
                        marker,
                        argument: value.to_string(),
                    });
                }
            }
        }
        self.wired = true;
        info!(bindings = self.bindings.len(), "wiring pass complete");
    }

    /// All bindings for an element, in firing order.
    pub fn bindings_for(
        &self,
        element: ElementId,
    ) -> impl Iterator<Item = &WiringBinding> {
        self.bindings.iter().filter(move |b| b.element == element)
    }

    /// Route a click on an element: run each of its bindings in declared
    /// order and collect the outcomes. The pass adds no error handling of
    /// its own; failures come back exactly as the bridge produced them.
    pub async fn click(&self, element: ElementId) -> Vec<Result<Value>> {
        let mut outcomes = Vec::new();
        for binding in self.bindings_for(element) {
            debug!(element, marker = ?binding.marker, "dispatching wired click");
            outcomes.push(self.invoke(binding).await);
        }
        outcomes
    }

    async fn invoke(&self, binding: &WiringBinding) -> Result<Value> {
        match binding.marker.invocation() {
            Invocation::Parameterless(method) => self.bridge.call(method, &[]).await,
            Invocation::WithValue(method) => {
                self.bridge
                    .call(method, &[Value::String(binding.argument.clone())])
                    .await
            }
            Invocation::Dynamic => self.bridge.call(&binding.argument, &[]).await,
        }
    }
}
