//! Per-content visibility-flag boundary.
//!
//! The flag marks an item "show only to logged-in viewers". It is persisted
//! by the host; this crate only defines the contract and a reference
//! in-memory store. Absence of the flag means `false` (visible to everyone),
//! normalized at the read path so nothing downstream branches on
//! missing-vs-false.

pub mod memory;

pub use memory::MemoryFlagStore;

use std::collections::BTreeSet;

use viewgate_core::error::Result;

/// Opaque content-item identifier.
pub type ContentId = String;

/// Host-side persistence of the per-content flag.
pub trait FlagStore: Send + Sync {
    /// Raw flag value, `None` if never set for this item.
    fn flag(&self, content_id: &str) -> Option<bool>;

    /// Set or clear the flag (editing path). Implementations surface
    /// persistence failures here rather than swallowing them.
    fn set_flag(&self, content_id: &str, restricted: bool) -> Result<()>;

    /// Ids of all items whose flag is currently `true`.
    fn flagged_ids(&self) -> BTreeSet<ContentId>;
}

/// Normalized read: an absent flag is visible-to-everyone.
pub fn is_restricted(store: &dyn FlagStore, content_id: &str) -> bool {
    store.flag(content_id).unwrap_or(false)
}
