use crate::error::SchemaDecoratorError;
use crate::get_meta;
use quote::ToTokens;

lazy_static! {
    static ref VALID_UNIT_DECORATORS: Vec<&'static str> =
        vec!["id", "skip", "opaque", "hyperlink", "many"];
    // Unit decorators which make no sense on a relationship
    static ref NON_RELATIONSHIP_DECORATORS: Vec<&'static str> = vec!["id", "skip", "opaque"];
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum FieldType {
    Id,
    Skip,
    Plain,
    Opaque { many: bool },
    Relationship { related_type: String, many: bool, hyperlink: bool },
}

fn decorator_name(path: &syn::Path) -> String { path.segments.to_token_stream().to_string() }

pub(crate) fn get_field_type(item: &syn::Field) -> syn::Result<FieldType> {
    let mut units: Vec<String> = vec![];
    let mut to_one = None;
    let mut to_many = None;

    for meta in get_meta(&item.attrs)? {
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
                syn::NestedMeta::Meta(syn::Meta::Path(ref path)) => {
                    let name = decorator_name(path);
                    if !VALID_UNIT_DECORATORS.iter().any(|d| *d == name) {
                        return Err(syn::Error::new_spanned(
                            path,
                            SchemaDecoratorError::InvalidUnitDecorator(name),
                        ));
                    }
                    units.push(name);
                },
                syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
                    ref path,
                    lit: syn::Lit::Str(ref lit_str),
                    ..
                })) if path.is_ident("to_one") => to_one = Some(lit_str.value()),
                syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
                    ref path,
                    lit: syn::Lit::Str(ref lit_str),
                    ..
                })) if path.is_ident("to_many") => to_many = Some(lit_str.value()),
                other => {
                    return Err(syn::Error::new_spanned(
                        &other,
                        SchemaDecoratorError::InvalidParamDecorator(
                            other.to_token_stream().to_string(),
                        ),
                    ))
                },
            }
        }
    }

    let has = |unit: &str| units.iter().any(|u| u == unit);
    let related = match (to_one, to_many) {
        (Some(_), Some(_)) => {
            return Err(syn::Error::new_spanned(
                item,
                SchemaDecoratorError::ConflictingDecorator("to_one".into()),
            ))
        },
        (Some(related_type), None) => Some((related_type, false)),
        (None, Some(related_type)) => Some((related_type, true)),
        (None, None) => None,
    };

    if let Some((related_type, many)) = related {
        if let Some(unit) = NON_RELATIONSHIP_DECORATORS.iter().find(|d| has(**d)) {
            return Err(syn::Error::new_spanned(
                item,
                SchemaDecoratorError::ConflictingDecorator(unit.to_string()),
            ));
        }
        return Ok(FieldType::Relationship { related_type, many, hyperlink: has("hyperlink") });
    }

    if has("hyperlink") {
        return Err(syn::Error::new_spanned(
            item,
            SchemaDecoratorError::DanglingDecorator("hyperlink".into(), "to_one/to_many".into()),
        ));
    }
    if has("many") && !has("opaque") {
        return Err(syn::Error::new_spanned(
            item,
            SchemaDecoratorError::DanglingDecorator("many".into(), "opaque".into()),
        ));
    }

    if has("id") {
        Ok(FieldType::Id)
    } else if has("skip") {
        Ok(FieldType::Skip)
    } else if has("opaque") {
        Ok(FieldType::Opaque { many: has("many") })
    } else {
        Ok(FieldType::Plain)
    }
}
