//! Marker argument-list parsing.
//!
//! Shared by the three identity-based rule kinds. The raw argument string
//! carries a single leading `#` which is stripped; the remainder splits on
//! `|` into trimmed tokens, dropping empty ones. Parsing is deterministic and
//! total; malformed input yields tokens that match nothing.

/// Parse a raw marker argument string into its token list.
///
/// `"#author|administrator"` → `["author", "administrator"]`; `""` → `[]`.
pub fn parse_argument_list(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    raw.split('|')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
