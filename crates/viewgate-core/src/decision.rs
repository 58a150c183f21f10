//! Evaluation outcomes and denial-message selectors.

/// Stable keys identifying which denial message applies.
///
/// The string forms are part of the host-facing API: config overrides and
/// message hooks are keyed by them. The three identity-based rule kinds reuse
/// `LoginRequired` when the viewer is anonymous, so hosts can customize the
/// "log in first" text separately from the per-kind mismatch texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenySelector {
    /// Viewer must log in to see the content.
    LoginRequired,
    /// Content is only shown to logged-out visitors.
    LogoutRequired,
    /// Viewer is logged in but holds none of the required roles.
    RoleMismatch,
    /// Viewer is logged in but their id is not listed.
    IdMismatch,
    /// Viewer is logged in but their login name is not listed.
    LoginMismatch,
}

impl DenySelector {
    /// All selectors, in table order.
    pub const ALL: [DenySelector; 5] = [
        DenySelector::LoginRequired,
        DenySelector::LogoutRequired,
        DenySelector::RoleMismatch,
        DenySelector::IdMismatch,
        DenySelector::LoginMismatch,
    ];

    /// Stable string key (config override keys, hook registration).
    pub fn as_str(self) -> &'static str {
        match self {
            DenySelector::LoginRequired => "logged-in-required",
            DenySelector::LogoutRequired => "logged-out-required",
            DenySelector::RoleMismatch => "role-mismatch",
            DenySelector::IdMismatch => "id-mismatch",
            DenySelector::LoginMismatch => "login-mismatch",
        }
    }

    /// Parse a stable string key back into its selector.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == key)
    }

    /// Builtin fallback message, used when no config override is present.
    pub fn default_message(self) -> &'static str {
        match self {
            DenySelector::LoginRequired => {
                "You don't have access to this content, please log in to view it."
            }
            DenySelector::LogoutRequired => "Only logged-out visitors can view this content.",
            DenySelector::RoleMismatch => "You don't have access to this content for your role.",
            DenySelector::IdMismatch | DenySelector::LoginMismatch => {
                "You don't have access to this content, please contact an administrator."
            }
        }
    }
}

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Show the wrapped content unchanged.
    Allow,
    /// Hide the wrapped content and substitute `message`.
    Deny {
        selector: DenySelector,
        message: String,
    },
}

impl Decision {
    pub fn allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}
