use regex::Regex;

lazy_static! {
    static ref IRREGULARS: Vec<(&'static str, &'static str)> = vec![
        ("person", "people"),
        ("child", "children"),
        ("mouse", "mice"),
        ("goose", "geese"),
        ("foot", "feet"),
        ("tooth", "teeth"),
    ];
    static ref UNCOUNTABLES: Vec<&'static str> = vec![
        "equipment", "information", "rice", "money", "species", "series", "fish", "sheep", "news",
    ];
    // First match wins
    static ref PLURAL_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(quiz)$").unwrap(), "${1}zes"),
        (Regex::new(r"(matr|vert|ind)(?:ix|ex)$").unwrap(), "${1}ices"),
        (Regex::new(r"(octop|vir)us$").unwrap(), "${1}i"),
        (Regex::new(r"(alias|status)$").unwrap(), "${1}es"),
        (Regex::new(r"(bu)s$").unwrap(), "${1}ses"),
        (Regex::new(r"(buffal|tomat|potat)o$").unwrap(), "${1}oes"),
        (Regex::new(r"([ti])um$").unwrap(), "${1}a"),
        (Regex::new(r"(ax|test)is$").unwrap(), "${1}es"),
        (Regex::new(r"sis$").unwrap(), "ses"),
        (Regex::new(r"(hive)$").unwrap(), "${1}s"),
        (Regex::new(r"(?:([^f])fe|([lr])f)$").unwrap(), "${1}${2}ves"),
        (Regex::new(r"([^aeiouy]|qu)y$").unwrap(), "${1}ies"),
        (Regex::new(r"(x|ch|ss|sh)$").unwrap(), "${1}es"),
        (Regex::new(r"s$").unwrap(), "s"),
        (Regex::new(r"$").unwrap(), "s"),
    ];
}

/// English plural of a lower-case word
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLES.iter().any(|u| *u == word) {
        return word.to_string();
    }
    for (singular, plural) in IRREGULARS.iter() {
        if word.ends_with(singular) {
            return format!("{}{}", &word[.. word.len() - singular.len()], plural);
        }
    }
    for (rule, replacement) in PLURAL_RULES.iter() {
        if rule.is_match(word) {
            return rule.replace(word, *replacement).into_owned();
        }
    }
    word.to_string()
}

/// The resource type of a model: the lower-cased plural of its name
pub fn resource_type(model_name: &str) -> String { pluralize(&model_name.to_lowercase()) }
