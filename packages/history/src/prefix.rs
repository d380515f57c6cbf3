/// Remove `prefix` from the front of `path`.
///
/// The prefix only matches whole segments: `/react-katas` is stripped from `/react-katas` and
/// `/react-katas/jsx`, but `/react-katasfoo` is returned unchanged. An exact match yields `/`.
///
/// ```rust
/// # use katas_history::strip_prefix;
/// assert_eq!(strip_prefix("/react-katas/jsx", Some("/react-katas")), "/jsx");
/// assert_eq!(strip_prefix("/react-katasfoo", Some("/react-katas")), "/react-katasfoo");
/// ```
#[must_use]
pub fn strip_prefix(path: &str, prefix: Option<&str>) -> String {
    let Some(prefix) = prefix else {
        return path.to_string();
    };

    match path.strip_prefix(prefix) {
        Some("") => String::from("/"),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}
