use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-interface entry of the `[interfaces]` table.
///
/// A table is a set of `"WAN CIDR" = "LAN CIDR"` pairs and every value in
/// it must be a string. Non-table entries still load and are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum InterfaceSection {
    Views(toml::Table),
    Ignored(toml::Value),
}

impl InterfaceSection {
    /// WAN → LAN pairs in WAN order, or `None` when the entry is not a
    /// mapping or is empty.
    pub fn views(&self) -> Result<Option<BTreeMap<&str, &str>>, ConfigError> {
        let InterfaceSection::Views(table) = self else {
            return Ok(None);
        };
        if table.is_empty() {
            return Ok(None);
        }

        table
            .iter()
            .map(|(wan, lan)| match lan.as_str() {
                Some(lan) => Ok((wan.as_str(), lan)),
                None => Err(ConfigError::Validation(format!(
                    "LAN network for '{}' must be a CIDR string, found {}",
                    wan,
                    lan.type_str()
                ))),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Some)
    }
}
