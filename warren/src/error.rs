use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarrenError {
    #[error(
        "Cannot resolve the resource type of relationship field `{field}` (related type: {})",
        .related_type.as_deref().unwrap_or("undeclared")
    )]
    ResourceTypeResolution { field: String, related_type: Option<String> },
    #[error("The hyperlink `{url}` of field `{field}` does not match any detail path of the related type")]
    UnresolvableHyperlink { field: String, url: String },
    #[error("Field `{field}` is declared as a to-one relationship but holds a list")]
    CardinalityMismatch { field: String },
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid JSON document")]
    Json(#[from] serde_json::Error),
    #[error("Invalid settings")]
    Config(#[from] config::ConfigError),
    #[error("Unhandled")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl WarrenError {
    pub fn unresolved_type(field: &str, related_type: Option<&str>) -> Self {
        WarrenError::ResourceTypeResolution {
            field: field.into(),
            related_type: related_type.map(ToString::to_string),
        }
    }
}

from_external_error!(http::uri::InvalidUri);
