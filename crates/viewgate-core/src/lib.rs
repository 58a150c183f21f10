//! viewgate core: host-agnostic visibility rules, decisions, and messages.
//!
//! This crate defines the rule descriptors, the viewer-identity snapshot, the
//! evaluator, and the denial-message catalog shared by host integrations. It
//! intentionally carries no I/O or host-platform dependencies so it can be
//! embedded in any rendering or query pipeline.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Rule evaluation is total: malformed rule arguments and incomplete viewer
//! snapshots degrade to a deny decision, never an error. The only fallible
//! paths are the collaborator boundaries (config, storage) and those surface
//! as `GateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod error;
pub mod identity;
pub mod message;
pub mod rule;

/// Shared result type.
pub use error::{GateError, Result};

pub use decision::{Decision, DenySelector};
pub use identity::ViewerIdentity;
pub use message::MessageCatalog;
pub use rule::{Rule, RuleEngine, RuleKind};
