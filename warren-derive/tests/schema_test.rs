mod common;

use common::{Author, Comment, Page, Person, Post};
use serde_json::json;
use std::sync::Arc;
use warren::schema::{Field, HasSchema, ReferenceKind, Registry};
use warren::{JsonApiRenderer, RequestContext};

#[test]
fn derive_type_from_model_name_test() {
    let schema = Person::schema();
    assert_eq!(schema.ty(), "people");
    assert_eq!(schema.id_field(), "id");
    assert_eq!(schema.path().to_string(), "people/{id}/");
    assert_eq!(
        schema.fields(),
        &[
            Field::attribute("name"),
            Field::hyperlinked_to_one("favorite_post", "posts"),
            Field::hyperlinked_to_many("liked_comments", "comments"),
        ][..]
    );
}

#[test]
fn skipped_field_test() {
    let schema = Post::schema();
    assert_eq!(schema.ty(), "posts");
    assert!(schema.field("draft").is_none());
    assert_eq!(schema.field("author"), Some(&Field::to_one("author", "people")));
}

#[test]
fn decorated_id_and_path_test() {
    let schema = Comment::schema();
    assert_eq!(schema.id_field(), "uuid");
    assert!(schema.field("uuid").is_none());
    assert_eq!(schema.path().render("c1"), "blog/comments/c1");
    let tags = schema.field("tags").unwrap();
    assert_eq!(tags.reference_kind(), Some(ReferenceKind::Opaque));
    assert!(tags.is_many());
}

#[test]
fn generic_model_test() {
    let schema = Page::<u64>::schema();
    assert_eq!(schema.ty(), "pages");
    assert_eq!(schema.field("type"), Some(&Field::attribute("type")));
    assert_eq!(schema.field("items"), Some(&Field::to_many("items", "items")));
}

#[test]
fn serde_renamed_fields_test() {
    let schema = Author::schema();
    assert_eq!(schema.id_field(), "pk");
    assert_eq!(
        schema.fields(),
        &[
            Field::attribute("displayName"),
            Field::to_one("favoritePost", "posts"),
            Field::to_many("comments", "comments"),
        ][..]
    );

    let registry = Registry::builder()
        .register_model::<Author>()
        .register_model::<Post>()
        .register_model::<Comment>()
        .build();
    let renderer = JsonApiRenderer::new(Arc::new(registry));
    let ctx = RequestContext::new("http://testserver/").unwrap();

    let author =
        Author { id: 7, display_name: "a".into(), favorite_post: Some(2), liked_comments: vec![3] };
    let doc = renderer
        .render(&serde_json::to_value(&author).unwrap(), &Author::schema(), &ctx)
        .unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["data"]["id"], json!("7"));
    assert_eq!(value["data"]["attributes"], json!({"displayName": "a"}));
    assert_eq!(
        value["data"]["relationships"],
        json!({
            "favoritePost": {"data": {"type": "posts", "id": "2"}},
            "comments": {"data": [{"type": "comments", "id": "3"}]}
        })
    );
}

#[test]
fn render_derived_model_test() {
    let registry = Registry::builder()
        .register_model::<Person>()
        .register_model::<Post>()
        .register_model::<Comment>()
        .build();
    let renderer = JsonApiRenderer::new(Arc::new(registry));
    let ctx = RequestContext::new("http://testserver/").unwrap();

    let post = Post { id: 2, title: "hello".into(), author: Some(1), draft: true };
    let doc = renderer
        .render(&serde_json::to_value(&post).unwrap(), &Post::schema(), &ctx)
        .unwrap();
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "data": {
                "type": "posts",
                "id": "2",
                "attributes": {"title": "hello"},
                "relationships": {"author": {"data": {"type": "people", "id": "1"}}},
                "links": {"self": "http://testserver/posts/2/"}
            }
        })
    );
}
