use serde::{Deserialize, Serialize};

pub const RESOURCE_TYPE: &str = "UserConfiguration";

/// Per-user settings record defining custom navigation menus.
///
/// Field names follow the JSON resource layout (`resourceType`, `menu`,
/// `link`). Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<MenuDefinition>>,
}

/// A titled group of links as stored in the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Vec<LinkEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl UserConfiguration {
    /// Configuration-defined sections, or an empty slice when absent.
    pub fn sections(&self) -> &[MenuDefinition] {
        self.menu.as_deref().unwrap_or_default()
    }
}

impl MenuDefinition {
    pub fn new(title: impl Into<String>, links: Vec<LinkEntry>) -> Self {
        Self {
            title: Some(title.into()),
            link: Some(links),
        }
    }

    pub fn links(&self) -> &[LinkEntry] {
        self.link.as_deref().unwrap_or_default()
    }
}

impl LinkEntry {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            target: Some(target.into()),
        }
    }
}
