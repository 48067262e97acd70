use thiserror::Error;

/// Input validation failures at the edges of the builder.
///
/// Menu construction itself never fails; these only come from reading a
/// configuration document or parsing a location string.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("expected resourceType \"UserConfiguration\", found \"{0}\"")]
    WrongResourceType(String),

    #[error("invalid location \"{input}\": {source}")]
    InvalidLocation {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
