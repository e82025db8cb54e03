use crate::model::link::Links;
use crate::model::relationship::Relationships;
use crate::model::{Id, Meta};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

pub type ResourceIdentifiers = Vec<ResourceIdentifier>;
pub type Resources = Vec<Resource>;

lazy_static! {
    static ref INVALID_ATTR_FIELDS: HashSet<&'static str> =
        HashSet::from_iter(vec!["relationships", "links", "type", "id"]);
}

/// Attribute members of a resource object, kept in the order they were inserted
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Attributes(Map<String, Value>);

impl From<Map<String, Value>> for Attributes {
    fn from(mut map: Map<String, Value>) -> Self {
        for &f in &INVALID_ATTR_FIELDS as &HashSet<&str> {
            map.remove(f);
        }
        Self(map)
    }
}

impl From<Attributes> for Map<String, Value> {
    fn from(attributes: Attributes) -> Self { attributes.0 }
}

impl Attributes {
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> { self.0.iter() }

    /// Returns `None` without inserting when `key` is reserved by the resource object itself
    pub fn insert(&mut self, key: impl ToString, value: Value) -> Option<Value> {
        let key = key.to_string();
        if INVALID_ATTR_FIELDS.contains(&key.as_str()) {
            warn!("Attribute `{}` collides with a resource object member and is dropped", key);
            None
        } else {
            self.0.insert(key, value)
        }
    }
}

/// Valid Resource Identifier (can be None)
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum IdentifierData {
    Single(Option<ResourceIdentifier>),
    Multiple(ResourceIdentifiers),
}

impl IdentifierData {
    pub fn data(&self) -> Vec<ResourceIdentifier> {
        match self {
            IdentifierData::Single(Some(data)) => vec![data.clone()],
            IdentifierData::Single(None) => Default::default(),
            IdentifierData::Multiple(data) => data.clone(),
        }
    }

    /// The empty linkage of a relationship with the given cardinality
    pub fn empty(many: bool) -> Self {
        if many {
            IdentifierData::Multiple(Default::default())
        } else {
            IdentifierData::Single(None)
        }
    }
}

impl Default for IdentifierData {
    fn default() -> Self { IdentifierData::Single(None) }
}

/// Resource Identifier
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
}

impl ResourceIdentifier {
    pub fn new(ty: impl ToString, id: impl ToString) -> Self {
        Self { ty: ty.to_string(), id: id.to_string() }
    }
}

/// JSON-API Resource
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Resource {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(default)]
    pub relationships: Relationships,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(default)]
    pub links: Links,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(default)]
    pub meta: Meta,
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool { self.ty == other.ty && self.id == other.id }
}

impl Eq for Resource {}

impl Hash for Resource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.hash(state);
        self.id.hash(state);
    }
}

impl Resource {
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier { ty: self.ty.clone(), id: self.id.clone() }
    }
}
