use serde_derive::Serialize;
use serde_json::Value;
use std::sync::Arc;
use warren::schema::Registry;
use warren::{JsonApiParser, JsonApiRenderer, RequestContext};
use warren_derive::ResourceSchema;

#[derive(ResourceSchema, Serialize, Clone)]
pub struct Person {
    pub id: u64,
    pub name: String,
    #[schema(to_one = "posts", hyperlink)]
    pub favorite_post: Option<String>,
    #[schema(to_many = "comments", hyperlink)]
    pub liked_comments: Vec<String>,
}

/// `Person` referencing its related resources by primary key
#[derive(ResourceSchema, Serialize, Clone)]
#[schema(type = "people")]
pub struct PkPerson {
    pub id: u64,
    pub name: String,
    #[schema(to_one = "posts")]
    pub favorite_post: Option<u64>,
    #[schema(to_many = "comments")]
    pub liked_comments: Vec<u64>,
}

#[derive(ResourceSchema, Serialize, Clone)]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[schema(to_one = "people")]
    pub author: Value,
    #[schema(to_many = "comments")]
    pub comments: Value,
}

#[derive(ResourceSchema, Serialize, Clone)]
pub struct Comment {
    pub id: u64,
    pub body: String,
    #[schema(to_one = "posts")]
    pub post: Value,
}

pub fn registry() -> Arc<Registry> {
    Arc::new(
        Registry::builder()
            .register_model::<Person>()
            .register_model::<Post>()
            .register_model::<Comment>()
            .build(),
    )
}

pub fn renderer() -> JsonApiRenderer { JsonApiRenderer::new(registry()) }

pub fn parser() -> JsonApiParser { JsonApiParser::new(registry()) }

pub fn ctx() -> RequestContext { RequestContext::new("http://testserver/").unwrap() }
