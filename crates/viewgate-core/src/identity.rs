//! Viewer identity snapshot.
//!
//! Supplied fresh by the host for every evaluation; never mutated here. There
//! is no ambient current-viewer lookup anywhere in the gate: every call
//! takes the snapshot explicitly.

use std::collections::BTreeSet;

use serde::Deserialize;

/// Snapshot of the requesting viewer.
///
/// Roles, id, and login name are opaque strings owned by the host's own
/// account system; the gate only ever compares them for exact equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerIdentity {
    /// Whether the host authenticated this viewer.
    #[serde(default)]
    pub authenticated: bool,
    /// Opaque user identifier, absent for anonymous viewers.
    #[serde(default)]
    pub id: Option<String>,
    /// Login name, absent for anonymous viewers.
    #[serde(default)]
    pub login: Option<String>,
    /// Role names held by the viewer (possibly empty).
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl ViewerIdentity {
    /// Snapshot for an anonymous visitor.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Snapshot for an authenticated user. Numeric host ids are accepted and
    /// compared as strings.
    pub fn authenticated(id: impl ToString) -> Self {
        Self {
            authenticated: true,
            id: Some(id.to_string()),
            login: None,
            roles: BTreeSet::new(),
        }
    }

    /// Attach the viewer's login name.
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Attach the viewer's role set.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }
}
