use crate::error::SchemaDecoratorError;

/// The `rename_all` rules of serde, applied to snake_case field names
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn from_rule(rule: &str) -> Option<Self> {
        match rule {
            "lowercase" => Some(RenameRule::Lower),
            "UPPERCASE" => Some(RenameRule::Upper),
            "PascalCase" => Some(RenameRule::Pascal),
            "camelCase" => Some(RenameRule::Camel),
            "snake_case" => Some(RenameRule::Snake),
            "SCREAMING_SNAKE_CASE" => Some(RenameRule::ScreamingSnake),
            "kebab-case" => Some(RenameRule::Kebab),
            "SCREAMING-KEBAB-CASE" => Some(RenameRule::ScreamingKebab),
            _ => None,
        }
    }

    pub(crate) fn apply(self, field: &str) -> String {
        match self {
            RenameRule::Lower | RenameRule::Snake => field.to_string(),
            RenameRule::Upper | RenameRule::ScreamingSnake => field.to_ascii_uppercase(),
            RenameRule::Pascal => {
                let mut pascal = String::with_capacity(field.len());
                let mut capitalize = true;
                for ch in field.chars() {
                    if ch == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(ch.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(ch);
                    }
                }
                pascal
            },
            RenameRule::Camel => {
                let pascal = RenameRule::Pascal.apply(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            },
            RenameRule::Kebab => field.replace('_', "-"),
            RenameRule::ScreamingKebab => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

/// Everything inside `#[serde(...)]`, attributes serde itself would reject are left to serde
fn serde_nested(attrs: &[syn::Attribute]) -> Vec<syn::NestedMeta> {
    attrs
        .iter()
        .filter(|a| a.path.is_ident("serde"))
        .filter_map(|a| a.parse_meta().ok())
        .filter_map(|meta| match meta {
            syn::Meta::List(syn::MetaList { nested, .. }) => Some(nested),
            _ => None,
        })
        .flatten()
        .collect()
}

/// The serializing side of `key = "..."` or `key(serialize = "...")`
fn serialize_value(nested: &syn::NestedMeta, key: &str) -> Option<syn::LitStr> {
    match nested {
        syn::NestedMeta::Meta(syn::Meta::NameValue(syn::MetaNameValue {
            path,
            lit: syn::Lit::Str(lit_str),
            ..
        })) if path.is_ident(key) => Some(lit_str.clone()),
        syn::NestedMeta::Meta(syn::Meta::List(syn::MetaList { path, nested, .. }))
            if path.is_ident(key) =>
        {
            nested.iter().find_map(|n| serialize_value(n, "serialize"))
        },
        _ => None,
    }
}

pub(crate) fn get_rename_all(attrs: &[syn::Attribute]) -> syn::Result<Option<RenameRule>> {
    match serde_nested(attrs).iter().find_map(|n| serialize_value(n, "rename_all")) {
        Some(lit_str) => match RenameRule::from_rule(&lit_str.value()) {
            Some(rule) => Ok(Some(rule)),
            None => Err(syn::Error::new_spanned(
                &lit_str,
                SchemaDecoratorError::InvalidRenameRule(lit_str.value()),
            )),
        },
        None => Ok(None),
    }
}

pub(crate) fn get_rename(attrs: &[syn::Attribute]) -> Option<String> {
    serde_nested(attrs).iter().find_map(|n| serialize_value(n, "rename")).map(|lit_str| lit_str.value())
}
