//! String-shape helpers.

/// True when `s` is empty or consists only of whitespace (spaces, tabs,
/// newlines).
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Join keys into the `a, b, c` form used in error messages.
pub fn join_keys<S: AsRef<str>>(keys: &[S]) -> String {
    keys.iter()
        .map(|k| k.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build a bracketed key path: `("options", "makeDefault")` ->
/// `"options[makeDefault]"`. An empty prefix returns `name` as-is.
pub fn nested_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}[{}]", prefix, name)
    }
}
