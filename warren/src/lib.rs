#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[macro_use]
mod macros;

use crate::error::WarrenError;

pub type Result<T> = std::result::Result<T, WarrenError>;
pub const JSON_API_HEADER: &str = "application/vnd.api+json";

pub mod error;
pub mod model;
pub mod parse;
pub mod query;
pub mod render;
pub mod schema;
pub mod settings;

pub use crate::parse::{JsonApiParser, Parsed};
pub use crate::render::{JsonApiRenderer, RequestContext};
pub use crate::schema::{HasSchema, Registry, Schema};
