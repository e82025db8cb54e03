pub mod document;
pub mod link;
pub mod pagination;
pub mod relationship;
pub mod resource;

use serde_json::Value;
use std::collections::HashMap;

/// Meta-data object, can contain any data
pub type Meta = HashMap<String, Value>;
pub type Id = String;
