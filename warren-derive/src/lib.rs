extern crate proc_macro;
#[macro_use]
extern crate thiserror;
#[macro_use]
extern crate lazy_static;

mod error;
mod field;
mod serde_attr;

use crate::error::SchemaDecoratorError;
use crate::field::{get_field_type, FieldType};
use crate::serde_attr::{get_rename, get_rename_all};
use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::DeriveInput;

/// `type` and `path` of `#[schema(...)]` on the struct
type SchemaDecl = (Option<String>, Option<String>);

/// Declares the JSON:API schema of a serde model.
///
/// ```ignore
/// #[derive(ResourceSchema, Serialize)]
/// #[schema(type = "people")]
/// pub struct Person {
///     pub id: u64,
///     pub name: String,
///     #[schema(to_one = "posts", hyperlink)]
///     pub favorite_post: Option<String>,
///     #[schema(to_many = "comments", hyperlink)]
///     pub liked_comments: Vec<String>,
/// }
/// ```
#[proc_macro_derive(ResourceSchema, attributes(schema))]
pub fn derive(input: TokenStream) -> TokenStream {
    inner_derive(input).unwrap_or_else(|err| err.to_compile_error()).into()
}

fn inner_derive(input: TokenStream) -> syn::Result<proc_macro2::TokenStream> {
    let ast: DeriveInput = syn::parse(input)?;
    let decorated_struct: &syn::Ident = &ast.ident;
    let (schema_type, path) = get_schema_decl(&ast)?;
    let (id, fields) = get_fields(&ast)?;

    let builder = match schema_type {
        Some(schema_type) => quote! { warren::schema::Schema::builder(#schema_type) },
        None => {
            let model_name = decorated_struct.unraw().to_string();
            quote! { warren::schema::Schema::for_model(#model_name) }
        },
    };
    let path = path.map(|path| quote! { .path(#path) });
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics warren::schema::HasSchema for #decorated_struct #ty_generics #where_clause {
            fn schema() -> warren::schema::Schema {
                #builder
                    .id_field(#id)
                    #path
                    #( .field(#fields) )*
                    .build()
            }
        }
    })
}

pub(crate) fn get_meta(attrs: &[syn::Attribute]) -> syn::Result<Vec<syn::Meta>> {
    attrs.iter().filter(|a| a.path.is_ident("schema")).map(syn::Attribute::parse_meta).collect()
}

fn get_schema_decl(ast: &syn::DeriveInput) -> syn::Result<SchemaDecl> {
    let mut schema_type = None;
    let mut path = None;

    for meta in get_meta(&ast.attrs)? {
        let nested = match meta {
            syn::Meta::List(syn::MetaList { nested, .. }) => nested,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    SchemaDecoratorError::InvalidDecoratorFormat,
                ))
            },
        };
        for nested_meta in nested {
            match nested_meta {
                syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
                    ref path,
                    lit: syn::Lit::Str(ref lit_str),
                    ..
                })) if path.is_ident("type") => schema_type = Some(lit_str.value()),
                syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
                    path: ref meta_path,
                    lit: syn::Lit::Str(ref lit_str),
                    ..
                })) if meta_path.is_ident("path") => path = Some(lit_str.value()),
                other => {
                    use quote::ToTokens;
                    return Err(syn::Error::new_spanned(
                        &other,
                        SchemaDecoratorError::InvalidStructDecorator(
                            other.to_token_stream().to_string(),
                        ),
                    ));
                },
            }
        }
    }

    Ok((schema_type, path))
}

/// The serialized name of the id field and the declarations of the other fields
fn get_fields(ast: &syn::DeriveInput) -> syn::Result<(String, Vec<proc_macro2::TokenStream>)> {
    let named = match ast.data {
        syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(syn::FieldsNamed { ref named, .. }),
            ..
        }) => named,
        _ => return Err(syn::Error::new_spanned(ast, SchemaDecoratorError::InvalidSchemaType)),
    };

    let rename_all = get_rename_all(&ast.attrs)?;
    let mut id = None;
    let mut declared = vec![];
    for n in named {
        let ident = match n.ident.as_ref() {
            Some(ident) => ident.unraw().to_string(),
            None => return Err(syn::Error::new_spanned(n, SchemaDecoratorError::InvalidSchemaType)),
        };
        // Schemas name fields the way serde serializes them
        let name = match (get_rename(&n.attrs), rename_all) {
            (Some(renamed), _) => renamed,
            (None, Some(rule)) => rule.apply(&ident),
            (None, None) => ident.clone(),
        };
        match get_field_type(n)? {
            FieldType::Id if id.is_none() => id = Some(name),
            FieldType::Id => {
                return Err(syn::Error::new_spanned(n, SchemaDecoratorError::DuplicatedId))
            },
            FieldType::Skip => {},
            field_type => declared.push((ident, name, field_type)),
        }
    }

    // An undecorated `id` field is the id when no other field is decorated
    let id = match id {
        Some(id) => id,
        None => match declared
            .iter()
            .position(|(ident, _, ty)| ident == "id" && *ty == FieldType::Plain)
        {
            Some(pos) => declared.remove(pos).1,
            None => return Err(syn::Error::new_spanned(&ast.ident, SchemaDecoratorError::MissingId)),
        },
    };

    let fields = declared
        .into_iter()
        .map(|(_, name, field_type)| match field_type {
            FieldType::Opaque { many } => quote! { warren::schema::Field::opaque(#name, #many) },
            FieldType::Relationship { related_type, many, hyperlink } => {
                let kind = if hyperlink {
                    quote! { warren::schema::ReferenceKind::Hyperlink }
                } else {
                    quote! { warren::schema::ReferenceKind::Identifier }
                };
                quote! { warren::schema::Field::relationship(#name, #related_type, #kind, #many) }
            },
            _ => quote! { warren::schema::Field::attribute(#name) },
        })
        .collect();

    Ok((id, fields))
}
