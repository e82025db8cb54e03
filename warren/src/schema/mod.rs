//! Declared fields of every resource type.
//!
//! A [`Schema`] is built once per resource type (by hand through [`Schema::builder`] or by
//! `#[derive(ResourceSchema)]`) and then only read. The [`Registry`] collects the schemas so
//! relationship fields can find the schema of the resource they point to.

pub mod inflect;
pub mod path;

use crate::error::WarrenError;
use crate::schema::path::DetailPath;
use crate::Result;
use std::collections::HashMap;

/// How a relationship field references the related resource in the serialized representation
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReferenceKind {
    /// The primary key of the related resource
    Identifier,
    /// The detail URL of the related resource
    Hyperlink,
    /// A custom representation passed through untouched
    Opaque,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FieldKind {
    Attribute,
    Relationship { related_type: Option<String>, kind: ReferenceKind, many: bool },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn attribute(name: impl ToString) -> Self {
        Self { name: name.to_string(), kind: FieldKind::Attribute }
    }

    pub fn relationship(
        name: impl ToString, related_type: impl ToString, kind: ReferenceKind, many: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Relationship {
                related_type: Some(related_type.to_string()),
                kind,
                many,
            },
        }
    }

    pub fn to_one(name: impl ToString, related_type: impl ToString) -> Self {
        Self::relationship(name, related_type, ReferenceKind::Identifier, false)
    }

    pub fn to_many(name: impl ToString, related_type: impl ToString) -> Self {
        Self::relationship(name, related_type, ReferenceKind::Identifier, true)
    }

    pub fn hyperlinked_to_one(name: impl ToString, related_type: impl ToString) -> Self {
        Self::relationship(name, related_type, ReferenceKind::Hyperlink, false)
    }

    pub fn hyperlinked_to_many(name: impl ToString, related_type: impl ToString) -> Self {
        Self::relationship(name, related_type, ReferenceKind::Hyperlink, true)
    }

    pub fn opaque(name: impl ToString, many: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Relationship { related_type: None, kind: ReferenceKind::Opaque, many },
        }
    }

    pub fn is_relationship(&self) -> bool { matches!(self.kind, FieldKind::Relationship { .. }) }

    /// `true` only for relationships rendered as JSON:API linkage
    pub fn is_linkage(&self) -> bool {
        matches!(self.reference_kind(), Some(ReferenceKind::Identifier) | Some(ReferenceKind::Hyperlink))
    }

    pub fn is_many(&self) -> bool {
        matches!(self.kind, FieldKind::Relationship { many: true, .. })
    }

    pub fn reference_kind(&self) -> Option<ReferenceKind> {
        match self.kind {
            FieldKind::Relationship { kind, .. } => Some(kind),
            FieldKind::Attribute => None,
        }
    }

    pub fn related_type(&self) -> Option<&str> {
        match self.kind {
            FieldKind::Relationship { ref related_type, .. } => related_type.as_deref(),
            FieldKind::Attribute => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    ty: String,
    id_field: String,
    url_field: Option<String>,
    path: DetailPath,
    fields: Vec<Field>,
}

impl Schema {
    pub fn builder(ty: impl ToString) -> SchemaBuilder {
        let ty = ty.to_string();
        SchemaBuilder {
            path: DetailPath::for_type(&ty),
            ty,
            id_field: "id".into(),
            url_field: Some("url".into()),
            fields: Default::default(),
        }
    }

    /// Starts a schema whose type is derived from a model name, `Person` becomes `people`
    pub fn for_model(model_name: &str) -> SchemaBuilder {
        Self::builder(inflect::resource_type(model_name))
    }

    pub fn ty(&self) -> &str { &self.ty }

    pub fn id_field(&self) -> &str { &self.id_field }

    pub fn url_field(&self) -> Option<&str> { self.url_field.as_deref() }

    pub fn path(&self) -> &DetailPath { &self.path }

    pub fn fields(&self) -> &[Field] { &self.fields }

    pub fn field(&self, name: &str) -> Option<&Field> { self.fields.iter().find(|f| f.name == name) }

    pub fn attributes(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_relationship())
    }

    pub fn relationships(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relationship())
    }
}

#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    ty: String,
    id_field: String,
    url_field: Option<String>,
    path: DetailPath,
    fields: Vec<Field>,
}

impl SchemaBuilder {
    pub fn id_field(mut self, id_field: impl ToString) -> Self {
        self.id_field = id_field.to_string();
        self
    }

    pub fn url_field(mut self, url_field: Option<&str>) -> Self {
        self.url_field = url_field.map(ToString::to_string);
        self
    }

    pub fn path(mut self, template: &str) -> Self {
        self.path = DetailPath::new(template);
        self
    }

    /// Declares a field, replacing an earlier declaration with the same name
    pub fn field(mut self, field: Field) -> Self {
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == field.name) {
            *existing = field;
        } else {
            self.fields.push(field);
        }
        self
    }

    pub fn attribute(self, name: impl ToString) -> Self { self.field(Field::attribute(name)) }

    pub fn build(self) -> Schema {
        let SchemaBuilder { ty, id_field, url_field, path, fields } = self;
        Schema { ty, id_field, url_field, path, fields }
    }
}

/// Implemented by `#[derive(ResourceSchema)]`
pub trait HasSchema {
    fn schema() -> Schema;
}

/// Every schema known to the application, keyed by resource type
#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemas: HashMap<String, Schema>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder { RegistryBuilder::default() }

    pub fn get(&self, ty: &str) -> Option<&Schema> { self.schemas.get(ty) }

    pub fn len(&self) -> usize { self.schemas.len() }

    pub fn is_empty(&self) -> bool { self.schemas.is_empty() }

    /// The schema of the resource a relationship field points to
    pub fn resolve(&self, field: &Field) -> Result<&Schema> {
        match field.related_type() {
            Some(ty) => self
                .schemas
                .get(ty)
                .ok_or_else(|| WarrenError::unresolved_type(&field.name, Some(ty))),
            None => Err(WarrenError::unresolved_type(&field.name, None)),
        }
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    schemas: HashMap<String, Schema>,
}

impl RegistryBuilder {
    pub fn register(mut self, schema: Schema) -> Self {
        if self.schemas.contains_key(schema.ty()) {
            warn!("Schema of type `{}` is registered twice, the later one wins", schema.ty());
        }
        self.schemas.insert(schema.ty().to_string(), schema);
        self
    }

    pub fn register_model<T: HasSchema>(self) -> Self { self.register(T::schema()) }

    pub fn build(self) -> Registry { Registry { schemas: self.schemas } }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Schema {
        Schema::for_model("Person")
            .attribute("name")
            .field(Field::hyperlinked_to_one("favorite_post", "posts"))
            .field(Field::hyperlinked_to_many("liked_comments", "comments"))
            .field(Field::opaque("tags", true))
            .build()
    }

    #[test]
    fn classify_fields_test() {
        let schema = person();
        assert_eq!(schema.ty(), "people");
        assert_eq!(schema.attributes().map(|f| f.name.as_str()).collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(schema.relationships().count(), 3);

        let favorite_post = schema.field("favorite_post").unwrap();
        assert!(favorite_post.is_linkage());
        assert!(!favorite_post.is_many());
        assert_eq!(favorite_post.related_type(), Some("posts"));

        let tags = schema.field("tags").unwrap();
        assert!(tags.is_relationship());
        assert!(!tags.is_linkage());
        assert_eq!(tags.reference_kind(), Some(ReferenceKind::Opaque));
        assert_eq!(tags.related_type(), None);
    }

    #[test]
    fn redeclared_field_replaces_test() {
        let schema = Schema::builder("posts")
            .attribute("author")
            .field(Field::to_one("author", "people"))
            .build();
        assert_eq!(schema.fields().len(), 1);
        assert!(schema.field("author").unwrap().is_relationship());
    }

    #[test]
    fn resolve_related_schema_test() {
        let registry = Registry::builder()
            .register(person())
            .register(Schema::builder("posts").attribute("title").build())
            .build();
        let schema = registry.get("people").unwrap();

        let post = registry.resolve(schema.field("favorite_post").unwrap()).unwrap();
        assert_eq!(post.ty(), "posts");

        let err = registry.resolve(schema.field("liked_comments").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            WarrenError::ResourceTypeResolution { ref related_type, .. }
                if related_type.as_deref() == Some("comments")
        ));

        let err = registry.resolve(schema.field("tags").unwrap()).unwrap_err();
        assert!(matches!(err, WarrenError::ResourceTypeResolution { related_type: None, .. }));
    }
}
