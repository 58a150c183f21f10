//! Listing exclusion for unauthenticated viewers.

use std::collections::BTreeSet;

use crate::store::{ContentId, FlagStore};

/// Content ids to exclude from a listing query for this viewer.
///
/// Authenticated viewers see every item; unauthenticated viewers lose the
/// items flagged "logged-in only". The result is always a concrete set, so
/// the caller can apply it as a `not in` predicate without a null branch.
pub fn excluded_ids(store: &dyn FlagStore, viewer_authenticated: bool) -> BTreeSet<ContentId> {
    if viewer_authenticated {
        return BTreeSet::new();
    }
    store.flagged_ids()
}
