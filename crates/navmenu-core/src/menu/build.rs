//! Configuration-to-menu mapping.
//!
//! Output layout is fixed:
//!
//!   [ "Edit Configuration Page", ...configuration sections, "Settings" ]
//!
//! Configuration sections keep their source order. Nothing here can fail;
//! absent configuration, menu lists, ids or link fields all degrade to
//! empty values.

use tracing::debug;

use crate::config::model::{LinkEntry, MenuDefinition, UserConfiguration};
use crate::icon::resolve::{Icon, resolve_with};
use crate::icon::set::{DefaultIconSet, IconSet, IconToken};
use crate::location::Location;
use crate::menu::model::{MenuLink, MenuSection};
use crate::options::BuildOptions;

pub const EDIT_SECTION_TITLE: &str = "Edit Configuration Page";
pub const BOOKMARK_LABEL: &str = "Bookmark Page";
pub const SETTINGS_SECTION_TITLE: &str = "Settings";
pub const SECURITY_LABEL: &str = "Security";
pub const SECURITY_HREF: &str = "/security";

/// Build the menu with the default icon set and options.
pub fn build(config: Option<&UserConfiguration>, location: &Location) -> Vec<MenuSection> {
    build_with(config, location, &DefaultIconSet, &BuildOptions::default())
}

pub fn build_with(
    config: Option<&UserConfiguration>,
    location: &Location,
    icons: &impl IconSet,
    opts: &BuildOptions,
) -> Vec<MenuSection> {
    let configured = config.map(UserConfiguration::sections).unwrap_or_default();

    let mut menus = Vec::with_capacity(configured.len() + 2);
    menus.push(edit_section(config.and_then(|c| c.id.as_deref()), location));
    menus.extend(configured.iter().map(|s| section(s, icons, opts)));
    menus.push(settings_section());

    debug!(
        configured = configured.len(),
        total = menus.len(),
        "built navigation menu"
    );
    menus
}

/// Href of the bookmark link for the given configuration id and location.
pub fn bookmark_href(config_id: Option<&str>, location: &Location) -> String {
    let edit_path = match config_id {
        Some(id) => format!("{id}/edit"),
        None => "new".to_string(),
    };
    format!(
        "/UserConfiguration/{edit_path}?bookmark={}",
        location.pathname
    )
}

fn edit_section(config_id: Option<&str>, location: &Location) -> MenuSection {
    MenuSection {
        title: EDIT_SECTION_TITLE.to_string(),
        links: vec![MenuLink {
            label: BOOKMARK_LABEL.to_string(),
            href: bookmark_href(config_id, location),
            icon: Some(Icon::glyph(IconToken::Plus)),
        }],
    }
}

fn settings_section() -> MenuSection {
    MenuSection {
        title: SETTINGS_SECTION_TITLE.to_string(),
        links: vec![MenuLink {
            label: SECURITY_LABEL.to_string(),
            href: SECURITY_HREF.to_string(),
            icon: Some(Icon::glyph(IconToken::Lock)),
        }],
    }
}

fn section(def: &MenuDefinition, icons: &impl IconSet, opts: &BuildOptions) -> MenuSection {
    MenuSection {
        title: def.title.clone().unwrap_or_default(),
        links: def.links().iter().map(|l| link(l, icons, opts)).collect(),
    }
}

// A link without a target keeps an empty href rather than being dropped.
fn link(entry: &LinkEntry, icons: &impl IconSet, opts: &BuildOptions) -> MenuLink {
    let target = entry.target.as_deref().unwrap_or_default();
    MenuLink {
        label: entry.name.clone().unwrap_or_default(),
        href: target.to_string(),
        icon: Some(resolve_with(target, icons, opts)),
    }
}
