use crate::model::document::Document;
use crate::model::link::Link;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Pagination links, `prev` and `next` are `null` at the boundaries
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginationLinks {
    pub first: Link,
    pub last: Link,
    pub prev: Option<Link>,
    pub next: Option<Link>,
}

/// Where the page items are placed inside a paginated envelope
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStyle {
    /// `{"data": [...], "links": {...}}`
    Document,
    /// `{"results": [...], "links": {...}}`
    Results,
}

impl Default for EnvelopeStyle {
    fn default() -> Self { EnvelopeStyle::Document }
}

impl EnvelopeStyle {
    fn data_key(self) -> &'static str {
        match self {
            EnvelopeStyle::Document => "data",
            EnvelopeStyle::Results => "results",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDocument {
    pub document: Document,
    pub links: PaginationLinks,
    pub style: EnvelopeStyle,
}

impl Serialize for PaginatedDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PaginatedDocument", 4)?;
        self.document.serialize_members(&mut state, self.style.data_key())?;
        if self.document.links.is_empty() {
            state.serialize_field("links", &self.links)?;
        } else {
            let mut links = serde_json::to_value(&self.document.links)
                .map_err(serde::ser::Error::custom)?;
            if let (Some(links), serde_json::Value::Object(pages)) = (
                links.as_object_mut(),
                serde_json::to_value(&self.links).map_err(serde::ser::Error::custom)?,
            ) {
                links.extend(pages);
            }
            state.serialize_field("links", &links)?;
        }
        state.end()
    }
}
