use std::collections::BTreeSet;

use dashmap::DashMap;

use viewgate_core::error::Result;

use super::{ContentId, FlagStore};

/// In-memory reference store. Concurrent host threads may read while the
/// editing path writes.
#[derive(Default)]
pub struct MemoryFlagStore {
    flags: DashMap<ContentId, bool>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self {
            flags: DashMap::new(),
        }
    }
}

impl FlagStore for MemoryFlagStore {
    fn flag(&self, content_id: &str) -> Option<bool> {
        self.flags.get(content_id).map(|v| *v)
    }

    fn set_flag(&self, content_id: &str, restricted: bool) -> Result<()> {
        self.flags.insert(content_id.to_string(), restricted);
        Ok(())
    }

    fn flagged_ids(&self) -> BTreeSet<ContentId> {
        self.flags
            .iter()
            .filter(|e| *e.value())
            .map(|e| e.key().clone())
            .collect()
    }
}
