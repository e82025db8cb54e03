use crate::model::Meta;
use crate::Result;
use std::collections::HashMap;
use std::str::FromStr;

pub type Links = HashMap<String, Link>;

impl FromStr for Link {
    type Err = http::uri::InvalidUri;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> { Ok(Link::Raw(s.parse()?)) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Link {
    #[serde(with = "http_serde::uri")]
    Raw(http::Uri),
    Object {
        #[serde(with = "http_serde::uri")]
        href: http::Uri,
        #[serde(default)]
        meta: Meta,
    },
}

impl Link {
    /// Joins `path` onto `base` the way a browser resolves a relative reference
    pub fn new(base: &url::Url, path: &str) -> Result<Link> {
        let joined = base.join(path)?;
        Ok(joined.as_str().parse::<Link>()?)
    }

    pub fn href(&self) -> &http::Uri {
        match self {
            Link::Raw(raw) => raw,
            Link::Object { href, .. } => href,
        }
    }
}
