//! Argument-list parsing tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use viewgate_core::rule::args::parse_argument_list;

#[test]
fn strips_marker_and_splits() {
    assert_eq!(
        parse_argument_list("#author|administrator"),
        vec!["author", "administrator"]
    );
}

#[test]
fn empty_input_yields_empty_list() {
    assert_eq!(parse_argument_list(""), Vec::<String>::new());
    assert_eq!(parse_argument_list("#"), Vec::<String>::new());
}

#[test]
fn tokens_are_trimmed_and_empty_tokens_dropped() {
    assert_eq!(
        parse_argument_list("# author | admin |"),
        vec!["author", "admin"]
    );
    assert_eq!(parse_argument_list("a||b"), vec!["a", "b"]);
}

#[test]
fn marker_character_is_optional() {
    assert_eq!(parse_argument_list("123|456"), vec!["123", "456"]);
}

#[test]
fn only_leading_marker_is_stripped() {
    // A '#' inside a token is part of the token.
    assert_eq!(parse_argument_list("#a#b|c"), vec!["a#b", "c"]);
}
