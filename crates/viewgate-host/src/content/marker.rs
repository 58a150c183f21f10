//! Marker scanning.
//!
//! Markers follow the shortcode grammar `[name]body[/name]`, with an optional
//! argument string after the name: `[name #a|b]body[/name]`. Same-name
//! markers do not nest; the first closing tag wins and the body is kept as
//! raw text.

use std::collections::HashMap;

use tracing::warn;

use viewgate_core::rule::{Rule, RuleKind};

/// Default marker names, one per rule kind.
pub const DEFAULT_MARKERS: [(&str, RuleKind); 5] = [
    ("require_login", RuleKind::LoggedIn),
    ("require_logout", RuleKind::LoggedOut),
    ("require_role", RuleKind::AnyRole),
    ("require_user_id", RuleKind::UserId),
    ("require_login_name", RuleKind::LoginName),
];

/// Marker-name lookup, compiled once from the defaults plus config remaps.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    entries: Vec<(String, RuleKind)>,
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::defaults()
    }
}

impl MarkerTable {
    /// The builtin marker names.
    pub fn defaults() -> Self {
        Self::with_remaps(&HashMap::new())
    }

    /// Apply config remaps (default name -> custom name). Unknown keys and
    /// colliding names are rejected by config validation before this runs.
    pub fn with_remaps(remaps: &HashMap<String, String>) -> Self {
        let entries = DEFAULT_MARKERS
            .iter()
            .map(|(name, kind)| {
                let final_name = remaps
                    .get(*name)
                    .cloned()
                    .unwrap_or_else(|| (*name).to_string());
                (final_name, *kind)
            })
            .collect();
        Self { entries }
    }

    pub fn kind_of(&self, name: &str) -> Option<RuleKind> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, kind)| *kind)
    }
}

/// One node of parsed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// Literal text, passed through untouched.
    Text(String),
    /// A marker-wrapped body gated by `rule`.
    Gated { rule: Rule, body: String },
}

/// Split `input` into literal text and gated nodes.
///
/// Total over all inputs: unknown marker names, stray brackets, stray closing
/// tags, and unclosed markers all come back as literal text.
pub fn parse_document(input: &str, markers: &MarkerTable) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut rest = input;

    while let Some(open) = rest.find('[') {
        let (before, from_bracket) = rest.split_at(open);
        match scan_marker(from_bracket, markers) {
            Some((node, consumed)) => {
                text.push_str(before);
                if !text.is_empty() {
                    nodes.push(ContentNode::Text(std::mem::take(&mut text)));
                }
                nodes.push(node);
                rest = &from_bracket[consumed..];
            }
            None => {
                // Not a marker here: keep the bracket literally and move on.
                text.push_str(before);
                text.push('[');
                rest = &from_bracket[1..];
            }
        }
    }

    text.push_str(rest);
    if !text.is_empty() {
        nodes.push(ContentNode::Text(text));
    }
    nodes
}

/// Try to read one complete marker at the start of `s` (which begins with
/// `[`). Returns the gated node and the byte length consumed.
fn scan_marker(s: &str, markers: &MarkerTable) -> Option<(ContentNode, usize)> {
    let close = s.find(']')?;
    let tag = &s[1..close];
    if tag.starts_with('/') {
        // Stray closing tag with no opener; leave it in the text.
        return None;
    }

    let (name, raw_args) = match tag.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (tag, ""),
    };
    let kind = markers.kind_of(name)?;

    let body_start = close + 1;
    let end_tag = format!("[/{name}]");
    let Some(body_len) = s[body_start..].find(&end_tag) else {
        warn!(marker = name, "marker has no closing tag, leaving as text");
        return None;
    };

    let body = &s[body_start..body_start + body_len];
    let rule = Rule::from_marker_args(kind, raw_args);
    let consumed = body_start + body_len + end_tag.len();

    Some((
        ContentNode::Gated {
            rule,
            body: body.to_string(),
        },
        consumed,
    ))
}
