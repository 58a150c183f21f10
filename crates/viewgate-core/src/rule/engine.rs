//! Rule evaluation: pure verdicts plus catalog-resolved denial messages.

use tracing::debug;

use crate::decision::{Decision, DenySelector};
use crate::identity::ViewerIdentity;
use crate::message::MessageCatalog;

use super::{Rule, RuleKind};

/// Pure allow/deny verdict for `rule` against `viewer`.
///
/// Membership tests are exact string equality. An empty argument list on an
/// identity-based kind can match nothing, so it denies even for an
/// authenticated viewer; an authenticated viewer missing an id or login
/// fails the corresponding membership test the same way.
pub fn verdict(rule: &Rule, viewer: &ViewerIdentity) -> Result<(), DenySelector> {
    match rule.kind {
        RuleKind::LoggedIn => {
            if viewer.authenticated {
                Ok(())
            } else {
                Err(DenySelector::LoginRequired)
            }
        }
        RuleKind::LoggedOut => {
            if viewer.authenticated {
                Err(DenySelector::LogoutRequired)
            } else {
                Ok(())
            }
        }
        RuleKind::AnyRole => {
            if !viewer.authenticated {
                return Err(DenySelector::LoginRequired);
            }
            if rule.args.iter().any(|r| viewer.roles.contains(r.as_str())) {
                Ok(())
            } else {
                Err(DenySelector::RoleMismatch)
            }
        }
        RuleKind::UserId => {
            if !viewer.authenticated {
                return Err(DenySelector::LoginRequired);
            }
            match &viewer.id {
                Some(id) if rule.args.iter().any(|a| a == id) => Ok(()),
                _ => Err(DenySelector::IdMismatch),
            }
        }
        RuleKind::LoginName => {
            if !viewer.authenticated {
                return Err(DenySelector::LoginRequired);
            }
            match &viewer.login {
                Some(login) if rule.args.iter().any(|a| a == login) => Ok(()),
                _ => Err(DenySelector::LoginMismatch),
            }
        }
    }
}

/// Evaluator with its message catalog.
/// Construct once during gate assembly, then share immutable.
#[derive(Debug)]
pub struct RuleEngine {
    catalog: MessageCatalog,
}

impl RuleEngine {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Evaluate `rule` for `viewer`, resolving the denial message on deny.
    pub fn evaluate(&self, rule: &Rule, viewer: &ViewerIdentity) -> Decision {
        match verdict(rule, viewer) {
            Ok(()) => {
                debug!(kind = ?rule.kind, "visibility rule allowed");
                Decision::Allow
            }
            Err(selector) => {
                debug!(kind = ?rule.kind, selector = selector.as_str(), "visibility rule denied");
                Decision::Deny {
                    selector,
                    message: self.catalog.resolve(selector),
                }
            }
        }
    }
}
