//! Assembled gate runtime.
//!
//! Compiled once from validated config, then shared immutable. Message hooks
//! are registered on the builder, before the engine freezes, keeping every
//! evaluation a pure function of (rule, viewer).

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use viewgate_core::error::Result;
use viewgate_core::{DenySelector, MessageCatalog, RuleEngine, ViewerIdentity};

use crate::config::GateConfig;
use crate::content::marker::{parse_document, MarkerTable};
use crate::content::render::render_nodes;
use crate::listing;
use crate::store::{ContentId, FlagStore};

/// Gate runtime: engine + marker table + flag-store handle.
pub struct Gate {
    engine: RuleEngine,
    markers: MarkerTable,
    store: Arc<dyn FlagStore>,
}

impl Gate {
    /// Assemble directly, with no message hooks.
    pub fn new(cfg: GateConfig, store: Arc<dyn FlagStore>) -> Result<Self> {
        Ok(Self::builder(cfg, store)?.build())
    }

    /// Start assembly; hooks may be registered before `build` freezes the
    /// engine.
    pub fn builder(cfg: GateConfig, store: Arc<dyn FlagStore>) -> Result<GateBuilder> {
        cfg.validate()?;

        let mut catalog = MessageCatalog::new();
        for (key, message) in &cfg.messages {
            // validate() already guaranteed the key parses
            if let Some(selector) = DenySelector::from_key(key) {
                catalog.set_base(selector, message.clone());
            }
        }

        let markers = MarkerTable::with_remaps(&cfg.markers);

        Ok(GateBuilder {
            catalog,
            markers,
            store,
        })
    }

    /// Render `input` for `viewer`: each gated body appears unchanged on
    /// allow, its denial message on deny.
    pub fn render(&self, input: &str, viewer: &ViewerIdentity) -> String {
        let nodes = parse_document(input, &self.markers);
        render_nodes(&nodes, &self.engine, viewer)
    }

    /// Content ids to exclude from a listing query for this viewer.
    pub fn excluded_ids(&self, viewer_authenticated: bool) -> BTreeSet<ContentId> {
        listing::excluded_ids(self.store.as_ref(), viewer_authenticated)
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn store(&self) -> &dyn FlagStore {
        self.store.as_ref()
    }
}

/// Collects message hooks between config compilation and engine freeze.
pub struct GateBuilder {
    catalog: MessageCatalog,
    markers: MarkerTable,
    store: Arc<dyn FlagStore>,
}

impl GateBuilder {
    /// Append an override hook for `selector`; hooks run in registration
    /// order.
    pub fn message_hook<F>(mut self, selector: DenySelector, hook: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.catalog.register_hook(selector, hook);
        self
    }

    pub fn build(self) -> Gate {
        info!(catalog = ?self.catalog, "gate assembled");
        Gate {
            engine: RuleEngine::new(self.catalog),
            markers: self.markers,
            store: self.store,
        }
    }
}
