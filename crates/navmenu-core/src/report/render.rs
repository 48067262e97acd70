use crate::TOOL_NAME;
use crate::icon::resolve::Icon;
use crate::report::model::MenuReport;

pub fn render_text(report: &MenuReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", TOOL_NAME, report.tool.version));
    if let Some(input) = &report.input {
        out.push_str(&format!(
            "Configuration: {} ({} bytes)\n",
            input.configuration_id.as_deref().unwrap_or("<no id>"),
            input.size_bytes
        ));
    }
    out.push_str(&format!("Location: {}\n", report.location));
    for menu in &report.menus {
        out.push_str(&format!("{}\n", menu.title));
        for link in &menu.links {
            let icon = match link.icon {
                Some(Icon::Glyph { name }) => name.as_str(),
                Some(Icon::Blank { .. }) | None => "-",
            };
            out.push_str(&format!("  [{}] {} -> {}\n", icon, link.label, link.href));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::menu::build::build;
    use crate::report::model::ToolInfo;

    #[test]
    fn renders_sections_and_links() {
        let loc = Location::from_path("/Patient/1");
        let report = MenuReport::new(
            ToolInfo {
                name: "navmenu".into(),
                version: "0.1.0".into(),
                commit: None,
            },
            None,
            loc.to_string(),
            build(None, &loc),
        );

        let text = render_text(&report);
        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "navmenu 0.1.0",
                "Location: /Patient/1",
                "Edit Configuration Page",
                "  [plus] Bookmark Page -> /UserConfiguration/new?bookmark=/Patient/1",
                "Settings",
                "  [lock] Security -> /security",
            ]
        );
    }
}
