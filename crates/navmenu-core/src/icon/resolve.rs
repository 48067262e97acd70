//! Link-target to icon resolution.
//!
//! A target is resolved against a fixed base authority so that relative
//! paths, query strings and absolute URLs all parse the same way. The
//! first path segment names a resource type, which the icon set maps to a
//! glyph. Anything that does not parse, or does not match, becomes a blank
//! placeholder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::icon::set::{DefaultIconSet, IconSet, IconToken};
use crate::options::BuildOptions;

/// Icon slot of a menu link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Icon {
    Glyph { name: IconToken },
    Blank { width: u32 },
}

impl Icon {
    pub fn glyph(name: IconToken) -> Self {
        Icon::Glyph { name }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Icon::Blank { .. })
    }
}

/// First path segment of `target` once resolved against `opts.base_url`.
///
/// Returns `None` when the target cannot be parsed as a URL reference or
/// has no path segments (e.g. `mailto:` links).
pub fn first_segment(target: &str, opts: &BuildOptions) -> Option<String> {
    let url = match opts.base_url.join(target) {
        Ok(url) => url,
        Err(e) => {
            debug!(link_target = target, error = %e, "link target is not a URL; using blank icon");
            return None;
        }
    };

    url.path_segments()?.next().map(str::to_string)
}

/// Resolve a link target with the default icon set and options.
pub fn resolve(target: &str) -> Icon {
    resolve_with(target, &DefaultIconSet, &BuildOptions::default())
}

pub fn resolve_with(target: &str, icons: &impl IconSet, opts: &BuildOptions) -> Icon {
    first_segment(target, opts)
        .and_then(|segment| icons.lookup(&segment))
        .map(Icon::glyph)
        .unwrap_or(Icon::Blank {
            width: opts.blank_width,
        })
}
