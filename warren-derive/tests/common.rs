use serde::Serialize;
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

#[derive(ResourceSchema, Serialize, Clone)]
#[schema(type = "posts")]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[schema(to_one = "people")]
    pub author: Option<u64>,
    #[schema(skip)]
    #[serde(skip)]
    pub draft: bool,
}

#[derive(ResourceSchema, Serialize, Clone)]
#[schema(type = "comments", path = "blog/comments/{id}")]
pub struct Comment {
    #[schema(id)]
    pub uuid: String,
    pub body: String,
    #[schema(to_one = "posts")]
    pub post: u64,
    #[schema(opaque, many)]
    pub tags: Vec<String>,
}

#[derive(ResourceSchema, Serialize, Clone)]
#[schema(type = "pages")]
pub struct Page<T: Serialize> {
    pub id: String,
    pub r#type: String,
    #[schema(to_many = "items")]
    pub items: Vec<T>,
}

#[derive(ResourceSchema, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
#[schema(type = "authors")]
pub struct Author {
    #[serde(rename = "pk")]
    pub id: u64,
    pub display_name: String,
    #[schema(to_one = "posts")]
    pub favorite_post: Option<u64>,
    #[serde(rename(serialize = "comments"))]
    #[schema(to_many = "comments")]
    pub liked_comments: Vec<u64>,
}
