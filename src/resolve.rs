//! Request-path resolution.
//!
//! Derives the ordered segment list ("resources") from a full request path
//! and the configured base prefix. Decoding follows `urldecode` semantics:
//! a literal `+` becomes a space, then `%XX` sequences decode. It happens
//! before the split, so an encoded separator inside a segment splits it.
//! No other normalization: repeated separators are not collapsed and case
//! is kept.

/// Splits `path` into segments relative to `base`.
///
/// The prefix is `base` + `separator`. If `path` is not strictly longer
/// than the prefix, or does not contain it, the result is empty. Otherwise
/// the remainder after the prefix is cut at `?` if present, decoded
/// (`+` to space, then percent-sequences), and split on `separator`; a
/// trailing empty segment (from a trailing separator) is dropped.
///
/// ```rust
/// use ruta::resolve;
///
/// let segments = resolve("/api/v1/items/42/?foo=bar", "/api/v1", '/');
/// assert_eq!(segments, ["items", "42"]);
/// ```
pub fn resolve(path: &str, base: &str, separator: char) -> Vec<String> {
    let prefix = format!("{base}{separator}");
    if path.len() <= prefix.len() || !path.contains(&prefix) {
        return Vec::new();
    }
    let Some(rest) = path.get(prefix.len()..) else {
        return Vec::new();
    };
    let rest = match rest.find('?') {
        Some(pos) => &rest[..pos],
        None => rest,
    };

    // urldecode semantics: `+` means space and is replaced first, so an
    // encoded `%2B` still comes out as a literal plus. Invalid UTF-8 after
    // decoding keeps the undecoded text.
    let rest = rest.replace('+', " ");
    let decoded = match urlencoding::decode(&rest) {
        Ok(cow) => cow.into_owned(),
        Err(_) => rest,
    };

    let mut segments: Vec<String> = decoded.split(separator).map(str::to_owned).collect();
    if segments.last().is_some_and(String::is_empty) {
        segments.pop();
    }
    segments
}
