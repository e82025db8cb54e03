use crate::error::WarrenError;
use crate::render::{stringify_id, RequestContext};
use crate::schema::{Field, FieldKind, ReferenceKind, Registry, Schema};
use crate::{Result, JSON_API_HEADER};
use serde_json::{Map, Value};
use std::sync::Arc;

/// The flat attribute/relationship-merged mapping a serializer expects
pub type FlatFields = Map<String, Value>;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Parsed {
    Single(FlatFields),
    Multiple(Vec<FlatFields>),
}

impl Parsed {
    pub fn into_single(self) -> Option<FlatFields> {
        if let Parsed::Single(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn into_multiple(self) -> Option<Vec<FlatFields>> {
        if let Parsed::Multiple(items) = self {
            Some(items)
        } else {
            None
        }
    }
}

/// Flattens an inbound JSON:API document into the shape of a schema
#[derive(Debug, Clone)]
pub struct JsonApiParser {
    registry: Arc<Registry>,
}

impl JsonApiParser {
    pub fn new(registry: Arc<Registry>) -> Self { Self { registry } }

    pub fn media_type(&self) -> &'static str { JSON_API_HEADER }

    /// An empty body is an empty resource
    pub fn parse_slice(
        &self, body: &[u8], schema: &Schema, ctx: &RequestContext,
    ) -> Result<Parsed> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Parsed::Single(Default::default()));
        }
        let document: Value = serde_json::from_slice(body)?;
        self.parse(&document, schema, ctx)
    }

    /// A document without `data` yields an empty resource
    pub fn parse(&self, document: &Value, schema: &Schema, ctx: &RequestContext) -> Result<Parsed> {
        match document.get("data") {
            Some(Value::Array(items)) => {
                debug!("Parsing {} `{}` resources", items.len(), schema.ty());
                items
                    .iter()
                    .map(|item| self.convert_resource(item, schema, ctx))
                    .collect::<Result<Vec<FlatFields>>>()
                    .map(Parsed::Multiple)
            },
            Some(item) => {
                debug!("Parsing a single `{}` resource", schema.ty());
                self.convert_resource(item, schema, ctx).map(Parsed::Single)
            },
            None => {
                debug!("Document without `data`, parsing it as an empty `{}`", schema.ty());
                Ok(Parsed::Single(Default::default()))
            },
        }
    }

    fn convert_resource(
        &self, item: &Value, schema: &Schema, ctx: &RequestContext,
    ) -> Result<FlatFields> {
        let item = match item.as_object() {
            Some(item) => item,
            None => return Ok(Default::default()),
        };
        let empty = Map::new();
        let attributes = item.get("attributes").and_then(Value::as_object).unwrap_or(&empty);
        let relationships = item.get("relationships").and_then(Value::as_object).unwrap_or(&empty);

        let mut resource: FlatFields = item
            .iter()
            .filter(|(key, _)| key.as_str() != "attributes" && key.as_str() != "relationships")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        for field in schema.fields() {
            if let Some(value) = attributes.get(&field.name) {
                resource.insert(field.name.clone(), value.clone());
            } else if let Some(relationship) = relationships.get(&field.name) {
                let value = self.resolve_relationship(field, relationship, ctx)?;
                resource.insert(field.name.clone(), value);
            }
        }

        Ok(resource)
    }

    fn resolve_relationship(
        &self, field: &Field, relationship: &Value, ctx: &RequestContext,
    ) -> Result<Value> {
        let linkage = relationship.get("data").unwrap_or(&Value::Null);
        match field.kind {
            FieldKind::Relationship { kind: ReferenceKind::Hyperlink, many, .. } => {
                let related = self.registry.resolve(field)?;
                if many {
                    let urls = linkage_ids(linkage)
                        .into_iter()
                        .map(|id| hyperlink(related, id, ctx))
                        .collect::<Result<Vec<Value>>>()?;
                    Ok(Value::Array(urls))
                } else {
                    match single_id(field, linkage)? {
                        Some(id) => hyperlink(related, id, ctx),
                        None => Ok(Value::Null),
                    }
                }
            },
            FieldKind::Relationship { kind: ReferenceKind::Identifier, many: true, .. } => {
                Ok(Value::Array(linkage_ids(linkage).into_iter().cloned().collect()))
            },
            FieldKind::Relationship { kind: ReferenceKind::Identifier, many: false, .. } => {
                Ok(single_id(field, linkage)?.cloned().unwrap_or(Value::Null))
            },
            _ => Ok(relationship.clone()),
        }
    }
}

/// Ids of a to-many linkage, in order; `null` or an absent linkage has none
fn linkage_ids(linkage: &Value) -> Vec<&Value> {
    match linkage {
        Value::Array(identifiers) => identifiers
            .iter()
            .filter_map(|identifier| identifier.get("id"))
            .filter(|id| !id.is_null())
            .collect(),
        Value::Object(_) => linkage.get("id").filter(|id| !id.is_null()).into_iter().collect(),
        _ => vec![],
    }
}

fn single_id<'a>(field: &Field, linkage: &'a Value) -> Result<Option<&'a Value>> {
    if linkage.is_array() {
        return Err(WarrenError::CardinalityMismatch { field: field.name.clone() });
    }
    Ok(linkage.get("id").filter(|id| !id.is_null()))
}

/// The absolute detail URL of the related resource with `id`
fn hyperlink(related: &Schema, id: &Value, ctx: &RequestContext) -> Result<Value> {
    match stringify_id(id) {
        Some(id) => Ok(Value::String(ctx.detail_url(related, &id)?.to_string())),
        None => Ok(Value::Null),
    }
}
