use crate::model::resource::{IdentifierData, ResourceIdentifier};
use crate::model::Meta;
use std::collections::{BTreeMap, HashMap};

pub type Relationships = BTreeMap<String, Relationship>;

/// Relationship with another object
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Relationship {
    pub data: IdentifierData,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(default)]
    pub meta: Meta,
}

impl Relationship {
    pub fn to_one(id: Option<ResourceIdentifier>) -> Self {
        Self { data: IdentifierData::Single(id), ..Default::default() }
    }

    pub fn to_many(ids: Vec<ResourceIdentifier>) -> Self {
        Self { data: IdentifierData::Multiple(ids), ..Default::default() }
    }
}
