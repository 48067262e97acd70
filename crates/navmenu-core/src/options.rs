use url::Url;

/// Authority used to turn relative link targets into parseable URLs.
/// Only the path of the joined URL is ever inspected.
pub const DEFAULT_BASE_URL: &str = "https://app.medplum.com";

/// Width of the blank placeholder shown for links without an icon.
pub const DEFAULT_BLANK_WIDTH: u32 = 30;

/// Knobs for menu construction.
///
/// These do not change which sections are produced, only how link
/// targets are parsed and how a missing icon is padded.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub base_url: Url,
    pub blank_width: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
            blank_width: DEFAULT_BLANK_WIDTH,
        }
    }
}
