use crate::model::link::Links;
use crate::model::resource::{Resource, ResourceIdentifier, Resources};
use crate::model::Meta;
use indexmap::IndexMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Related resources of a compound document, in the order they were first seen
pub type Included = IndexMap<ResourceIdentifier, Resource>;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PrimaryDataItem {
    Single(Box<Resource>),
    Multiple(Resources),
    /// A serialized value that is not shaped like a resource, passed through untouched
    Raw(Value),
}

/// The top-level JSON:API `document`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub data: Option<PrimaryDataItem>,
    pub included: Included,
    pub links: Links,
    pub meta: Meta,
}

impl Document {
    pub fn single_resource(resource: Resource, included: Included) -> Self {
        Self {
            data: Some(PrimaryDataItem::Single(Box::new(resource))),
            included,
            ..Default::default()
        }
    }

    pub fn multiple_resources(resources: Vec<Resource>, included: Included) -> Self {
        Self { data: Some(PrimaryDataItem::Multiple(resources)), included, ..Default::default() }
    }

    pub fn raw(value: Value) -> Self {
        Self { data: Some(PrimaryDataItem::Raw(value)), ..Default::default() }
    }

    pub fn into_single(self) -> Result<(Box<Resource>, Included), Self> {
        if let Some(PrimaryDataItem::Single(resource)) = self.data {
            Ok((resource, self.included))
        } else {
            Err(self)
        }
    }

    pub fn into_multiple(self) -> Result<(Vec<Resource>, Included), Self> {
        if let Some(PrimaryDataItem::Multiple(resources)) = self.data {
            Ok((resources, self.included))
        } else {
            Err(self)
        }
    }

    /// Serializes the members shared by a plain and a paginated document, `data` under `data_key`
    pub(crate) fn serialize_members<S: SerializeStruct>(
        &self, state: &mut S, data_key: &'static str,
    ) -> Result<(), S::Error> {
        match self.data {
            Some(ref data) => state.serialize_field(data_key, data)?,
            None => state.serialize_field(data_key, &Value::Null)?,
        }
        if !self.included.is_empty() {
            state.serialize_field("included", &self.included.values().collect::<Vec<&Resource>>())?;
        }
        if !self.meta.is_empty() {
            state.serialize_field("meta", &self.meta)?;
        }
        Ok(())
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Document", 4)?;
        self.serialize_members(&mut state, "data")?;
        if !self.links.is_empty() {
            state.serialize_field("links", &self.links)?;
        }
        state.end()
    }
}
