//! Inline marker parsing and render substitution.
//!
//! The host's content parser produces an explicit AST (`ContentNode`); the
//! evaluator consumes the gated nodes structurally, never by string scanning.
//! Parsing is panic-free and total: malformed markers are emitted as literal
//! text instead of erroring, so hostile or sloppy content can never take the
//! render path down.

pub mod marker;
pub mod render;

pub use marker::{parse_document, ContentNode, MarkerTable};
pub use render::render_nodes;
