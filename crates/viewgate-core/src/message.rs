//! Denial-message catalog: per-selector base messages plus override hooks.
//!
//! Hosts customize denial text two ways: replace the base message wholesale
//! (config), or register hooks that rewrite it. Hooks run in registration
//! order, each receiving and returning the message string.

use std::collections::HashMap;
use std::fmt;

use crate::decision::DenySelector;

type Hook = Box<dyn Fn(String) -> String + Send + Sync>;

/// Per-selector message table. Populated during gate assembly, then handed to
/// the engine and never mutated again.
#[derive(Default)]
pub struct MessageCatalog {
    base: HashMap<DenySelector, String>,
    hooks: HashMap<DenySelector, Vec<Hook>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the base message for `selector`.
    pub fn set_base(&mut self, selector: DenySelector, message: impl Into<String>) {
        self.base.insert(selector, message.into());
    }

    /// Append an override hook for `selector`.
    pub fn register_hook<F>(&mut self, selector: DenySelector, hook: F)
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.hooks.entry(selector).or_default().push(Box::new(hook));
    }

    /// Resolve the user-visible message for `selector`: base message (config
    /// override or builtin default) folded through the hook chain.
    pub fn resolve(&self, selector: DenySelector) -> String {
        let base = self
            .base
            .get(&selector)
            .cloned()
            .unwrap_or_else(|| selector.default_message().to_string());
        match self.hooks.get(&selector) {
            Some(hooks) => hooks.iter().fold(base, |msg, hook| hook(msg)),
            None => base,
        }
    }
}

impl fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: usize = self.hooks.values().map(Vec::len).sum();
        f.debug_struct("MessageCatalog")
            .field("base_overrides", &self.base.len())
            .field("hooks", &hooks)
            .finish()
    }
}
