pub mod page;

use crate::Result;
use itertools::Itertools;

/// Sets `key` to `value` in the query of `url`, dropping its other values.
/// The rewritten query is ordered by key, values of the same key keep their order.
pub fn replace_query_param(url: &str, key: &str, value: impl ToString) -> Result<String> {
    let value = value.to_string();
    rewrite_query(url, key, Some(value.as_str()))
}

/// Removes every value of `key` from the query of `url`
pub fn remove_query_param(url: &str, key: &str) -> Result<String> { rewrite_query(url, key, None) }

fn rewrite_query(url: &str, key: &str, value: Option<&str>) -> Result<String> {
    let mut url = url.parse::<url::Url>()?;
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .chain(value.map(|v| (key.to_string(), v.to_string())))
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect();

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    Ok(url.to_string())
}
