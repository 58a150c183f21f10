//! Shared loader for rule-evaluation vector files.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use serde::Deserialize;
use viewgate_core::{Rule, ViewerIdentity};

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub rule: Rule,
    pub viewer: ViewerIdentity,
    pub expect: Expect,
}

#[derive(Debug, Deserialize)]
pub struct Expect {
    pub allow: bool,
    /// Stable selector key, present iff `allow` is false.
    #[serde(default)]
    pub selector: Option<String>,
}
