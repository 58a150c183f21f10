use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use viewgate_core::error::{GateError, Result};
use viewgate_core::DenySelector;

use crate::content::marker::DEFAULT_MARKERS;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    pub version: u32,

    /// Selector key -> replacement base denial message.
    #[serde(default)]
    pub messages: HashMap<String, String>,

    /// Default marker name -> custom marker name.
    #[serde(default)]
    pub markers: HashMap<String, String>,
}

impl GateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GateError::UnsupportedVersion);
        }

        for (key, msg) in &self.messages {
            if DenySelector::from_key(key).is_none() {
                return Err(GateError::InvalidConfig(format!(
                    "unknown message selector: {key}"
                )));
            }
            if msg.trim().is_empty() {
                return Err(GateError::InvalidConfig(format!(
                    "message for {key} must not be empty"
                )));
            }
        }

        for key in self.markers.keys() {
            if !DEFAULT_MARKERS.iter().any(|(name, _)| name == key) {
                return Err(GateError::InvalidConfig(format!(
                    "unknown marker key: {key}"
                )));
            }
        }
        for name in self.markers.values() {
            if name.is_empty()
                || name.contains(|c: char| {
                    c.is_whitespace() || matches!(c, '[' | ']' | '/' | '#')
                })
            {
                return Err(GateError::InvalidConfig(format!(
                    "invalid marker name: {name:?}"
                )));
            }
        }

        // Marker names must stay distinct after remapping.
        let mut finals = BTreeSet::new();
        for (name, _) in DEFAULT_MARKERS {
            let final_name = self.markers.get(name).map(String::as_str).unwrap_or(name);
            if !finals.insert(final_name) {
                return Err(GateError::InvalidConfig(format!(
                    "duplicate marker name: {final_name}"
                )));
            }
        }

        Ok(())
    }
}
