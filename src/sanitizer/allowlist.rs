// src/sanitizer/allowlist.rs

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Tags that survive sanitization. Everything else is unwrapped.
pub static ALLOWED_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["b", "i", "u", "p", "br", "ul", "ol", "li", "a", "span"]
        .into_iter()
        .collect()
});

/// Per-tag attribute allow-list, keyed by lowercase tag name.
/// Tags without an entry keep no attributes at all.
pub static ALLOWED_ATTRIBUTES: LazyLock<HashMap<&'static str, HashSet<&'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            ("a", HashSet::from(["href", "target", "rel"])),
            ("span", HashSet::from(["class"])),
        ])
    });

/// Link targets an anchor may keep.
pub const SAFE_HREF_PREFIXES: [&str; 3] = ["http://", "https://", "mailto:"];

pub fn is_allowed_tag(name: &str) -> bool {
    ALLOWED_TAGS.contains(name.to_ascii_lowercase().as_str())
}

/// Returns the attribute names allowed on `tag`, or `None` when the tag
/// has no entry (meaning every attribute is stripped).
pub fn allowed_attributes(tag: &str) -> Option<&'static HashSet<&'static str>> {
    ALLOWED_ATTRIBUTES.get(tag.to_ascii_lowercase().as_str())
}

pub fn is_allowed_attribute(tag: &str, attribute: &str) -> bool {
    allowed_attributes(tag)
        .is_some_and(|allowed| allowed.contains(attribute.to_ascii_lowercase().as_str()))
}

/// Whether an `href` value points somewhere we are willing to link to.
/// The scheme is matched ASCII case-insensitively (`HTTPS://` passes).
pub fn is_safe_href(value: &str) -> bool {
    SAFE_HREF_PREFIXES.iter().any(|prefix| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
