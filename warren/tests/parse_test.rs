mod common;

use common::{ctx, parser, Person, PkPerson, Post};
use serde_json::{json, Value};
use warren::schema::{HasSchema, Schema};
use warren::Parsed;

fn parse_single(document: Value, schema: &Schema) -> Value {
    let parsed = parser().parse(&document, schema, &ctx()).unwrap();
    Value::Object(parsed.into_single().unwrap())
}

#[test]
fn update_attribute_test() {
    let _ = env_logger::try_init();

    let document = json!({"data": {"attributes": {"name": "new test"}}});
    assert_eq!(parse_single(document, &Person::schema()), json!({"name": "new test"}));
}

#[test]
fn update_to_one_link_test() {
    let _ = env_logger::try_init();

    let document = json!({
        "data": {
            "attributes": {"name": "test"},
            "relationships": {"favorite_post": {"data": {"type": "posts", "id": "2"}}}
        }
    });
    assert_eq!(
        parse_single(document, &Person::schema()),
        json!({"name": "test", "favorite_post": "http://testserver/posts/2/"})
    );
}

#[test]
fn update_to_many_link_test() {
    let _ = env_logger::try_init();

    let document = json!({
        "data": {
            "attributes": {"name": "test"},
            "relationships": {
                "favorite_post": {"data": null},
                "liked_comments": {"data": [
                    {"type": "comments", "id": "1"},
                    {"type": "comments", "id": "2"}
                ]}
            }
        }
    });
    assert_eq!(
        parse_single(document, &Person::schema()),
        json!({
            "name": "test",
            "favorite_post": null,
            "liked_comments": ["http://testserver/comments/1/", "http://testserver/comments/2/"]
        })
    );
}

#[test]
fn update_pk_links_test() {
    let _ = env_logger::try_init();

    let document = json!({
        "data": {
            "relationships": {
                "favorite_post": {"data": {"type": "posts", "id": "2"}},
                "liked_comments": {"data": [
                    {"type": "comments", "id": "1"},
                    {"type": "comments", "id": "2"}
                ]}
            }
        }
    });
    assert_eq!(
        parse_single(document, &PkPerson::schema()),
        json!({"favorite_post": "2", "liked_comments": ["1", "2"]})
    );

    let cleared = json!({
        "data": {"relationships": {"favorite_post": {"data": null}, "liked_comments": {"data": []}}}
    });
    assert_eq!(
        parse_single(cleared, &PkPerson::schema()),
        json!({"favorite_post": null, "liked_comments": []})
    );
}

#[test]
fn partial_update_test() {
    let _ = env_logger::try_init();

    let document = json!({"data": {"type": "people", "id": "1", "attributes": {"name": "renamed"}}});
    let parsed = parse_single(document, &Person::schema());
    assert_eq!(parsed, json!({"type": "people", "id": "1", "name": "renamed"}));
    assert!(parsed.get("favorite_post").is_none());
    assert!(parsed.get("liked_comments").is_none());
}

#[test]
fn create_person_test() {
    let _ = env_logger::try_init();

    let parsed = parser()
        .parse_slice(br#"{"data": {"name": "Jason Api"}}"#, &Person::schema(), &ctx())
        .unwrap();
    assert_eq!(parsed, Parsed::Single(json!({"name": "Jason Api"}).as_object().unwrap().clone()));
}

#[test]
fn create_post_test() {
    let _ = env_logger::try_init();

    let document = json!({
        "data": {
            "type": "posts",
            "attributes": {"title": "This is the title"},
            "relationships": {"author": {"data": {"id": 1}}, "comments": {"data": []}}
        }
    });
    assert_eq!(
        parse_single(document, &Post::schema()),
        json!({"type": "posts", "title": "This is the title", "author": 1, "comments": []})
    );
}

#[test]
fn opaque_relationship_passes_through_test() {
    let _ = env_logger::try_init();

    let schema = Schema::builder("people")
        .attribute("name")
        .field(warren::schema::Field::opaque("tags", true))
        .build();
    let tags = json!({"data": [{"type": "tags", "id": "a"}], "meta": {"count": 1}});
    let document = json!({"data": {"relationships": {"tags": tags.clone()}}});
    assert_eq!(parse_single(document, &schema), json!({"tags": tags}));
}

#[test]
fn parse_list_test() {
    let _ = env_logger::try_init();

    let document = json!({
        "data": [
            {"attributes": {"name": "a"}},
            {"attributes": {"name": "b"}, "relationships": {"favorite_post": {"data": {"id": 5}}}}
        ]
    });
    let parsed = parser().parse(&document, &Person::schema(), &ctx()).unwrap();
    let items: Vec<Value> = parsed.into_multiple().unwrap().into_iter().map(Value::Object).collect();
    assert_eq!(
        items,
        vec![
            json!({"name": "a"}),
            json!({"name": "b", "favorite_post": "http://testserver/posts/5/"})
        ]
    );
}

#[test]
fn missing_data_is_empty_test() {
    let _ = env_logger::try_init();

    assert_eq!(parse_single(json!({}), &Person::schema()), json!({}));
    let parsed = parser().parse_slice(b"", &Person::schema(), &ctx()).unwrap();
    assert_eq!(parsed, Parsed::Single(Default::default()));
}
