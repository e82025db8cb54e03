use crate::error::WarrenError;
use crate::model::document::{Document, Included, PrimaryDataItem};
use crate::model::link::{Link, Links};
use crate::model::relationship::{Relationship, Relationships};
use crate::model::resource::{Attributes, IdentifierData, Resource, ResourceIdentifier};
use crate::schema::{Field, ReferenceKind, Registry, Schema};
use crate::{Result, JSON_API_HEADER};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Request-scoped data shared by the renderer and the parser
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    base_url: url::Url,
}

impl RequestContext {
    /// `base_url` is the absolute API root of the current request, e.g. `http://testserver/`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = base_url.parse::<url::Url>()?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &url::Url { &self.base_url }

    pub fn detail_url(&self, schema: &Schema, id: &str) -> Result<url::Url> {
        Ok(self.base_url.join(&schema.path().render(id))?)
    }

    pub fn detail_link(&self, schema: &Schema, id: &str) -> Result<Link> {
        Link::new(&self.base_url, &schema.path().render(id))
    }
}

/// Turns the serialized form of one or many model instances into a JSON:API document
#[derive(Debug, Clone)]
pub struct JsonApiRenderer {
    registry: Arc<Registry>,
}

impl JsonApiRenderer {
    pub fn new(registry: Arc<Registry>) -> Self { Self { registry } }

    pub fn media_type(&self) -> &'static str { JSON_API_HEADER }

    pub fn registry(&self) -> &Registry { &self.registry }

    /// `serialized` is either one object or an array of objects shaped by `schema`.
    /// Anything else is passed through as the raw primary data.
    pub fn render(
        &self, serialized: &Value, schema: &Schema, ctx: &RequestContext,
    ) -> Result<Document> {
        self.check_schema(schema)?;

        let mut included = Included::default();
        let document = match serialized {
            Value::Object(item) => {
                debug!("Rendering a single `{}` resource", schema.ty());
                match self.to_resource(item, schema, ctx, Some(&mut included))? {
                    Some(resource) => Document::single_resource(resource, included),
                    None => {
                        warn!("Serialized `{}` has no id, passing it through", schema.ty());
                        Document::raw(serialized.clone())
                    },
                }
            },
            Value::Array(items) => {
                debug!("Rendering {} `{}` resources", items.len(), schema.ty());
                let mut resources = Vec::with_capacity(items.len());
                for item in items {
                    let resource = match item {
                        Value::Object(item) => self.to_resource(item, schema, ctx, Some(&mut included))?,
                        _ => None,
                    };
                    match resource {
                        Some(resource) => resources.push(resource),
                        None => {
                            warn!("Serialized `{}` list holds a non-resource item, passing it through", schema.ty());
                            return Ok(Document::raw(serialized.clone()));
                        },
                    }
                }
                Document::multiple_resources(resources, included)
            },
            _ => Document::raw(serialized.clone()),
        };

        Ok(dedup_primary(document))
    }

    /// Every linkage field of `schema` must point to a registered type
    fn check_schema(&self, schema: &Schema) -> Result<()> {
        for field in schema.relationships().filter(|f| f.is_linkage()) {
            self.registry.resolve(field)?;
        }
        Ok(())
    }

    /// `included` is `None` when rendering an included resource, keeping inclusion one level deep
    fn to_resource(
        &self, item: &Map<String, Value>, schema: &Schema, ctx: &RequestContext,
        mut included: Option<&mut Included>,
    ) -> Result<Option<Resource>> {
        let id = match resource_id(item, schema) {
            Some(id) => id,
            None => return Ok(None),
        };

        let mut attributes = Attributes::default();
        let mut relationships = Relationships::new();
        let mut self_link = None;

        for (key, value) in item {
            if key == schema.id_field() {
                continue;
            }
            if Some(key.as_str()) == schema.url_field() {
                self_link = value.as_str().and_then(|url| url.parse::<Link>().ok());
                continue;
            }
            match schema.field(key) {
                Some(field) if field.is_linkage() => {
                    let related = self.registry.resolve(field)?;
                    let relationship =
                        self.to_relationship(field, related, value, ctx, included.as_deref_mut())?;
                    relationships.insert(key.clone(), relationship);
                },
                _ => {
                    attributes.insert(key, value.clone());
                },
            }
        }

        // Primary resources carry every declared linkage, included ones only what was nested
        if included.is_some() {
            for field in schema.relationships().filter(|f| f.is_linkage()) {
                relationships.entry(field.name.clone()).or_insert_with(|| Relationship {
                    data: IdentifierData::empty(field.is_many()),
                    ..Default::default()
                });
            }
        }

        let self_link = match self_link {
            Some(link) => link,
            None => ctx.detail_link(schema, &id)?,
        };
        let mut links = Links::new();
        links.insert("self".into(), self_link);

        Ok(Some(Resource {
            ty: schema.ty().to_string(),
            id,
            attributes,
            relationships,
            links,
            ..Default::default()
        }))
    }

    fn to_relationship(
        &self, field: &Field, related: &Schema, value: &Value, ctx: &RequestContext,
        mut included: Option<&mut Included>,
    ) -> Result<Relationship> {
        if field.is_many() {
            let values: Vec<&Value> = match value {
                Value::Null => vec![],
                Value::Array(values) => values.iter().collect(),
                other => vec![other],
            };
            let mut ids = Vec::with_capacity(values.len());
            for value in values {
                if let Some(id) =
                    self.to_identifier(field, related, value, ctx, included.as_deref_mut())?
                {
                    ids.push(id);
                }
            }
            Ok(Relationship::to_many(ids))
        } else if value.is_array() {
            Err(WarrenError::CardinalityMismatch { field: field.name.clone() })
        } else {
            Ok(Relationship::to_one(self.to_identifier(field, related, value, ctx, included)?))
        }
    }

    fn to_identifier(
        &self, field: &Field, related: &Schema, value: &Value, ctx: &RequestContext,
        included: Option<&mut Included>,
    ) -> Result<Option<ResourceIdentifier>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(nested) => {
                let id = match resource_id(nested, related) {
                    Some(id) => id,
                    None => {
                        warn!("Nested `{}` of field `{}` has no id, skipping it", related.ty(), field.name);
                        return Ok(None);
                    },
                };
                let identifier = ResourceIdentifier::new(related.ty(), &id);
                if let Some(included) = included {
                    if included.contains_key(&identifier) {
                        trace!("`{}/{}` is already included", identifier.ty, identifier.id);
                    } else if let Some(resource) = self.to_resource(nested, related, ctx, None)? {
                        included.insert(identifier.clone(), resource);
                    }
                }
                Ok(Some(identifier))
            },
            Value::String(url) if field.reference_kind() == Some(ReferenceKind::Hyperlink) => {
                match related.path().extract_id(url) {
                    Some(id) => Ok(Some(ResourceIdentifier::new(related.ty(), id))),
                    None => Err(WarrenError::UnresolvableHyperlink {
                        field: field.name.clone(),
                        url: url.clone(),
                    }),
                }
            },
            other => match stringify_id(other) {
                Some(id) => Ok(Some(ResourceIdentifier::new(related.ty(), id))),
                None => {
                    warn!("Field `{}` holds `{}`, which is not an identifier", field.name, other);
                    Ok(None)
                },
            },
        }
    }
}

/// Numeric ids are rendered as strings
pub(crate) fn stringify_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// The id member, or the id recovered from the url member
fn resource_id(item: &Map<String, Value>, schema: &Schema) -> Option<String> {
    item.get(schema.id_field()).and_then(stringify_id).or_else(|| {
        schema
            .url_field()
            .and_then(|url_field| item.get(url_field))
            .and_then(Value::as_str)
            .and_then(|url| schema.path().extract_id(url))
    })
}

/// A related resource that is also primary data is not repeated in `included`
fn dedup_primary(mut document: Document) -> Document {
    let primary: HashSet<ResourceIdentifier> = match &document.data {
        Some(PrimaryDataItem::Single(resource)) => Some(resource.identifier()).into_iter().collect(),
        Some(PrimaryDataItem::Multiple(resources)) => {
            resources.iter().map(Resource::identifier).collect()
        },
        _ => HashSet::new(),
    };
    document.included.retain(|id, _| !primary.contains(id));
    document
}
