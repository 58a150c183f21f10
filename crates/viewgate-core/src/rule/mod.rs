//! Visibility rule descriptors and their evaluation.
//!
//! A rule is parsed once from a content marker (kind + raw argument string)
//! and is immutable thereafter. Evaluation is total: malformed arguments
//! yield a token list that matches nothing, which denies instead of erroring.

pub mod args;
pub mod engine;

pub use engine::{verdict, RuleEngine};

use serde::Deserialize;

/// The five mutually exclusive access predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Viewer must be authenticated.
    LoggedIn,
    /// Viewer must not be authenticated.
    LoggedOut,
    /// Viewer must hold at least one of the listed roles.
    AnyRole,
    /// Viewer's id must be one of the listed ids.
    UserId,
    /// Viewer's login name must be one of the listed names.
    LoginName,
}

impl RuleKind {
    /// Whether this kind carries an argument list. The logged-in/out kinds
    /// ignore arguments entirely.
    pub fn takes_args(self) -> bool {
        !matches!(self, RuleKind::LoggedIn | RuleKind::LoggedOut)
    }
}

/// A parsed visibility rule: kind plus its (possibly empty) argument list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    pub kind: RuleKind,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Rule {
    /// Rule with no arguments.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
        }
    }

    /// Build a rule from a marker's raw argument string (`"#a|b"` form).
    pub fn from_marker_args(kind: RuleKind, raw_args: &str) -> Self {
        let args = if kind.takes_args() {
            args::parse_argument_list(raw_args)
        } else {
            Vec::new()
        };
        Self { kind, args }
    }
}
