use serde::{Deserialize, Serialize};

/// Glyphs the rendering side is expected to provide.
///
/// Serialized names match the icon library's kebab-case glyph names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconToken {
    Star,
    Id,
    Building,
    Receipt,
    ReportMedical,
    Forms,
    BrandAsana,
    LockAccess,
    Webhook,
    Packages,
    Microscope,
    Plus,
    Lock,
}

impl IconToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconToken::Star => "star",
            IconToken::Id => "id",
            IconToken::Building => "building",
            IconToken::Receipt => "receipt",
            IconToken::ReportMedical => "report-medical",
            IconToken::Forms => "forms",
            IconToken::BrandAsana => "brand-asana",
            IconToken::LockAccess => "lock-access",
            IconToken::Webhook => "webhook",
            IconToken::Packages => "packages",
            IconToken::Microscope => "microscope",
            IconToken::Plus => "plus",
            IconToken::Lock => "lock",
        }
    }
}

impl std::fmt::Display for IconToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of glyphs for resource-type path segments.
pub trait IconSet {
    /// Glyph for the given first path segment, if the set has one.
    fn lookup(&self, resource_type: &str) -> Option<IconToken>;
}

/// Resource types (and the `admin` / `batch` pseudo-types) with a glyph.
pub const RESOURCE_ICONS: &[(&str, IconToken)] = &[
    ("Patient", IconToken::Star),
    ("Practitioner", IconToken::Id),
    ("Organization", IconToken::Building),
    ("ServiceRequest", IconToken::Receipt),
    ("DiagnosticReport", IconToken::ReportMedical),
    ("Questionnaire", IconToken::Forms),
    ("admin", IconToken::BrandAsana),
    ("AccessPolicy", IconToken::LockAccess),
    ("Subscription", IconToken::Webhook),
    ("batch", IconToken::Packages),
    ("Observation", IconToken::Microscope),
];

/// The fixed resource-type table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIconSet;

impl IconSet for DefaultIconSet {
    fn lookup(&self, resource_type: &str) -> Option<IconToken> {
        // Case-sensitive: "patient" is not "Patient".
        RESOURCE_ICONS
            .iter()
            .find(|(key, _)| *key == resource_type)
            .map(|(_, token)| *token)
    }
}
