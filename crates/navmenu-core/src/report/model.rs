use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::menu::model::MenuSection;

/// Top-level navmenu report.
///
/// This is the stable JSON output of the CLI. It must remain
/// deterministic for identical configuration bytes and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuReport {
    pub schema_version: String,
    pub tool: ToolInfo,
    /// `None` when no configuration was supplied.
    pub input: Option<InputInfo>,
    pub location: String,
    pub menus: Vec<MenuSection>,
}

impl MenuReport {
    pub fn new(
        tool: ToolInfo,
        input: Option<InputInfo>,
        location: String,
        menus: Vec<MenuSection>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            input,
            location,
            menus,
        }
    }

    pub fn link_count(&self) -> usize {
        self.menus.iter().map(|m| m.links.len()).sum()
    }
}

/// Tool metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// Configuration document bound to this report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    pub path: Option<String>,
    pub configuration_id: Option<String>,
    pub size_bytes: u64,
    pub hash: InputHash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputHash {
    pub algorithm: String,
    pub value: String,
}
