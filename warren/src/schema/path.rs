use percent_encoding::percent_decode_str;

const ID_PLACEHOLDER: &str = "{id}";

/// The canonical detail path of a resource type, relative to the API root, e.g. `people/{id}/`
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DetailPath {
    prefix: String,
    suffix: String,
}

impl DetailPath {
    /// A template without `{id}` is treated as the collection path, `people` means `people/{id}/`
    pub fn new(template: &str) -> Self {
        let template = template.trim_start_matches('/');
        match template.find(ID_PLACEHOLDER) {
            Some(pos) => Self {
                prefix: template[.. pos].to_string(),
                suffix: template[pos + ID_PLACEHOLDER.len() ..].to_string(),
            },
            None if template.is_empty() => Self { prefix: "".into(), suffix: "/".into() },
            None => Self {
                prefix: format!("{}/", template.trim_end_matches('/')),
                suffix: "/".into(),
            },
        }
    }

    pub fn for_type(ty: &str) -> Self { Self::new(ty) }

    pub fn render(&self, id: &str) -> String { format!("{}{}{}", self.prefix, id, self.suffix) }

    /// Recovers the id from an absolute or relative detail URL; the path may be mounted below
    /// any number of leading segments
    pub fn extract_id(&self, url: &str) -> Option<String> {
        let path = match url.parse::<url::Url>() {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => url.split(|c| c == '?' || c == '#').next().unwrap_or_default().to_string(),
        };
        let rest = path.strip_suffix(self.suffix.as_str())?;
        let (mount, id) = if self.prefix.is_empty() {
            rest.rsplit_once('/').unwrap_or(("", rest))
        } else {
            let pos = rest.rfind(self.prefix.as_str())?;
            (&rest[.. pos], &rest[pos + self.prefix.len() ..])
        };
        if id.is_empty() || id.contains('/') {
            return None;
        }
        if !self.prefix.is_empty() && !(mount.is_empty() || mount.ends_with('/')) {
            return None;
        }
        percent_decode_str(id).decode_utf8().ok().map(|id| id.into_owned())
    }
}

impl ToString for DetailPath {
    fn to_string(&self) -> String { self.render(ID_PLACEHOLDER) }
}
