#[derive(Error, Debug)]
pub enum SchemaDecoratorError {
    #[error(
        "`ResourceSchema` macro can only be used on Named Structs, optionally decorated like \
         `#[schema(type = \"foo_type\")]`"
    )]
    InvalidSchemaType,
    #[error("Duplicated Id fields detected")]
    DuplicatedId,
    #[error("No Id field found, name the field `id` or decorate it with `#[schema(id)]`")]
    MissingId,
    #[error("Invalid unit decorator {0}, the valid ones: [id, skip, opaque, hyperlink, many]")]
    InvalidUnitDecorator(String),
    #[error(
        "Invalid parameterized decorator {0}, the valid ones: [to_one = \"foo_type\", to_many = \
         \"foo_type\"]"
    )]
    InvalidParamDecorator(String),
    #[error("Invalid struct decorator {0}, the valid ones: [type = \"foo_type\", path = \"foo/{{id}}/\"]")]
    InvalidStructDecorator(String),
    #[error("`{0}` decorator cannot be combined with `to_one` or `to_many`")]
    ConflictingDecorator(String),
    #[error("`{0}` decorator can only be used together with `{1}`")]
    DanglingDecorator(String, String),
    #[error(
        "Unknown serde rename rule {0}, the valid ones: [lowercase, UPPERCASE, PascalCase, \
         camelCase, snake_case, SCREAMING_SNAKE_CASE, kebab-case, SCREAMING-KEBAB-CASE]"
    )]
    InvalidRenameRule(String),
    #[error("Decorators should be written as `#[schema(...)]`")]
    InvalidDecoratorFormat,
}
