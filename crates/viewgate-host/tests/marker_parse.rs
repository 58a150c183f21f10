//! Marker scanner tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use viewgate_core::rule::RuleKind;
use viewgate_host::content::{parse_document, ContentNode, MarkerTable};

fn table() -> MarkerTable {
    MarkerTable::defaults()
}

#[test]
fn plain_text_passes_through() {
    let nodes = parse_document("no markers here", &table());
    assert_eq!(nodes, vec![ContentNode::Text("no markers here".into())]);
}

#[test]
fn empty_input_yields_no_nodes() {
    assert!(parse_document("", &table()).is_empty());
}

#[test]
fn gated_node_with_args() {
    let nodes = parse_document(
        "[require_role #author|administrator]secret[/require_role]",
        &table(),
    );
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        ContentNode::Gated { rule, body } => {
            assert_eq!(rule.kind, RuleKind::AnyRole);
            assert_eq!(rule.args, vec!["author", "administrator"]);
            assert_eq!(body, "secret");
        }
        other => panic!("expected gated node, got {other:?}"),
    }
}

#[test]
fn argument_less_marker() {
    let nodes = parse_document("[require_login]members[/require_login]", &table());
    match &nodes[0] {
        ContentNode::Gated { rule, body } => {
            assert_eq!(rule.kind, RuleKind::LoggedIn);
            assert!(rule.args.is_empty());
            assert_eq!(body, "members");
        }
        other => panic!("expected gated node, got {other:?}"),
    }
}

#[test]
fn mixed_document_splits_into_text_and_gated() {
    let nodes = parse_document(
        "intro [require_login]hidden[/require_login] outro",
        &table(),
    );
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0], ContentNode::Text("intro ".into()));
    assert!(matches!(nodes[1], ContentNode::Gated { .. }));
    assert_eq!(nodes[2], ContentNode::Text(" outro".into()));
}

#[test]
fn unknown_marker_is_literal_text() {
    let input = "[gallery]pics[/gallery]";
    let nodes = parse_document(input, &table());
    assert_eq!(nodes, vec![ContentNode::Text(input.into())]);
}

#[test]
fn unclosed_marker_is_literal_text() {
    let input = "[require_login]never closed";
    let nodes = parse_document(input, &table());
    assert_eq!(nodes, vec![ContentNode::Text(input.into())]);
}

#[test]
fn stray_closing_tag_is_literal_text() {
    let input = "text [/require_login] more";
    let nodes = parse_document(input, &table());
    assert_eq!(nodes, vec![ContentNode::Text(input.into())]);
}

#[test]
fn stray_brackets_are_literal_text() {
    let input = "a [ b ] c [[require_login]x[/require_login]";
    let nodes = parse_document(input, &table());
    // The doubled bracket keeps the first '[' literal; the marker after it
    // still parses.
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0], ContentNode::Text("a [ b ] c [".into()));
    assert!(matches!(nodes[1], ContentNode::Gated { .. }));
}

#[test]
fn same_name_markers_do_not_nest() {
    let nodes = parse_document(
        "[require_login]outer [require_login]inner[/require_login] tail[/require_login]",
        &table(),
    );
    // First closing tag wins; the remainder re-parses as text.
    match &nodes[0] {
        ContentNode::Gated { body, .. } => assert_eq!(body, "outer [require_login]inner"),
        other => panic!("expected gated node, got {other:?}"),
    }
    assert_eq!(nodes[1], ContentNode::Text(" tail[/require_login]".into()));
}

#[test]
fn consecutive_markers_parse_independently() {
    let nodes = parse_document(
        "[require_login]a[/require_login][require_logout]b[/require_logout]",
        &table(),
    );
    assert_eq!(nodes.len(), 2);
    assert!(matches!(
        &nodes[0],
        ContentNode::Gated { rule, .. } if rule.kind == RuleKind::LoggedIn
    ));
    assert!(matches!(
        &nodes[1],
        ContentNode::Gated { rule, .. } if rule.kind == RuleKind::LoggedOut
    ));
}

#[test]
fn remapped_marker_name_is_recognized() {
    let mut remaps = HashMap::new();
    remaps.insert("require_role".to_string(), "role_is".to_string());
    let table = MarkerTable::with_remaps(&remaps);

    let nodes = parse_document("[role_is #editor]x[/role_is]", &table);
    assert!(matches!(
        &nodes[0],
        ContentNode::Gated { rule, .. } if rule.kind == RuleKind::AnyRole
    ));

    // The default name no longer matches once remapped.
    let input = "[require_role #editor]x[/require_role]";
    assert_eq!(
        parse_document(input, &table),
        vec![ContentNode::Text(input.into())]
    );
}
