//! Render pass: substitute gated bodies or their denial messages.

use viewgate_core::{Decision, RuleEngine, ViewerIdentity};

use super::marker::ContentNode;

/// Render parsed nodes for `viewer`. Gated bodies appear unchanged on allow;
/// on deny the resolved message takes their place.
pub fn render_nodes(nodes: &[ContentNode], engine: &RuleEngine, viewer: &ViewerIdentity) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            ContentNode::Text(text) => out.push_str(text),
            ContentNode::Gated { rule, body } => match engine.evaluate(rule, viewer) {
                Decision::Allow => out.push_str(body),
                Decision::Deny { message, .. } => out.push_str(&message),
            },
        }
    }
    out
}
