use crate::model::pagination::EnvelopeStyle;
use crate::query::page::Paginator;
use crate::render::RequestContext;
use crate::Result;

/// Deployment settings, read once at startup
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Absolute API root, e.g. `http://localhost:8000/api/`
    pub base_url: String,
    #[serde(default = "default_page_query_param")]
    pub page_query_param: String,
    #[serde(default)]
    pub envelope: EnvelopeStyle,
}

fn default_page_query_param() -> String { "page".into() }

impl Settings {
    /// Reads `path` and then the `WARREN_*` environment variables, which take precedence
    pub fn from_file(path: &str) -> Result<Self> {
        let mut settings = config::Config::default();
        settings
            .merge(config::File::with_name(path))?
            .merge(config::Environment::with_prefix("WARREN"))?;
        Ok(settings.try_into()?)
    }

    pub fn request_context(&self) -> Result<RequestContext> { RequestContext::new(&self.base_url) }

    pub fn paginator(&self) -> Paginator { Paginator::new(&self.page_query_param, self.envelope) }
}
