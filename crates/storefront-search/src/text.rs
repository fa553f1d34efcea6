//! Text folding helpers: collation keys for name ordering and URL slugs.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical decomposition with combining marks dropped, lower-cased.
/// "Ámbar Ñandú" -> "ambar nandu".
pub fn fold(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

/// Sort key approximating a locale-aware comparison: accent- and
/// case-insensitive first, raw text as the tie-breaker.
pub fn collation_key(s: &str) -> (String, String) {
    (fold(s), s.to_string())
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

pub fn slugify(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for c in fold(s).chars() {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
