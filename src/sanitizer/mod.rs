// src/sanitizer/mod.rs

//! Allow-list sanitizer for the rich-text fields (interview notes and the
//! like) that the frontend renders as trusted markup.
//!
//! Every call parses the fragment into its own `RcDom`, rewrites that tree,
//! and serializes it back. Nothing but the allow-list tables is shared
//! between calls.
//!
//! This is a tag/attribute filter, not a hardened XSS defence: disallowed
//! elements are unwrapped rather than deleted, so `<script>alert(1)</script>`
//! comes out as the plain text `alert(1)`.

pub mod allowlist;
pub mod attributes;
pub mod tree;

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use serde_json::Value;

pub use allowlist::{ALLOWED_ATTRIBUTES, ALLOWED_TAGS, is_allowed_tag, is_safe_href};
pub use attributes::filter_attributes;
pub use tree::sanitize_children;

/// Cleans an untrusted HTML fragment down to the allowed tags and attributes.
///
/// Empty input returns an empty string without parsing. Malformed markup is
/// repaired by the HTML5 parser and whatever tree results is sanitized; this
/// never fails.
pub fn sanitize(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let (_dom, body) = parse_body(&format!("<div>{html}</div>"));
    sanitize_children(&body);
    serialize_children(&body).trim().to_string()
}

/// Like [`sanitize`], for input of unknown shape (e.g. a JSON field).
/// Anything that is not a string yields an empty string.
pub fn sanitize_value(value: &Value) -> String {
    match value {
        Value::String(html) => sanitize(html),
        _ => String::new(),
    }
}

/// Parses `html` as a full document and returns the DOM with its `<body>`.
pub(crate) fn parse_body(html: &str) -> (RcDom, Handle) {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let body = find_body(&dom.document).unwrap_or_else(|| dom.document.clone());
    (dom, body)
}

fn find_body(node: &Handle) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == "body" {
            return Some(node.clone());
        }
    }
    node.children.borrow().iter().find_map(find_body)
}

/// Serializes the children of `node` (its inner HTML).
pub(crate) fn serialize_children(node: &Handle) -> String {
    let handle: SerializableHandle = node.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    let mut out = Vec::new();
    if let Err(e) = serialize(&mut out, &handle, opts) {
        tracing::warn!("Failed to serialize sanitized markup: {}", e);
        return String::new();
    }

    String::from_utf8(out)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
