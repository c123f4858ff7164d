// src/sanitizer/attributes.rs

use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{Handle, NodeData};

use super::allowlist::{is_allowed_attribute, is_safe_href};

const LINK_REL: &str = "noreferrer";
const LINK_TARGET: &str = "_blank";

/// Strips every attribute the element's tag does not allow.
///
/// Anchors get extra treatment: an `href` that is not http(s) or mailto is
/// removed (the anchor itself stays), and a kept `href` forces
/// `rel="noreferrer"` and `target="_blank"`, replacing whatever was there.
///
/// Non-element nodes are left alone.
pub fn filter_attributes(node: &Handle) {
    let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = node.data
    else {
        return;
    };

    let tag = &*name.local;
    let mut attrs = attrs.borrow_mut();

    // Namespaced attributes (`xlink:href` and friends) share local names
    // with plain ones, so only un-namespaced attributes can match the list.
    attrs.retain(|attr| is_plain(attr) && is_allowed_attribute(tag, &attr.name.local));

    if !tag.eq_ignore_ascii_case("a") {
        return;
    }

    let Some(href) = attrs
        .iter()
        .position(|attr| is_plain(attr) && (*attr.name.local).eq_ignore_ascii_case("href"))
    else {
        return;
    };

    if !is_safe_href(&attrs[href].value) {
        tracing::debug!(href = %attrs[href].value, "dropping unsafe href");
        attrs.remove(href);
        return;
    }

    set_attribute(&mut attrs, "rel", LINK_REL);
    set_attribute(&mut attrs, "target", LINK_TARGET);
}

/// An attribute with no namespace and no prefix.
fn is_plain(attr: &Attribute) -> bool {
    (*attr.name.ns).is_empty() && attr.name.prefix.is_none()
}

/// Overwrites the attribute if present, appends it otherwise.
fn set_attribute(attrs: &mut Vec<Attribute>, name: &str, value: &str) {
    match attrs
        .iter_mut()
        .find(|attr| is_plain(attr) && (*attr.name.local).eq_ignore_ascii_case(name))
    {
        Some(existing) => existing.value = value.into(),
        None => attrs.push(Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from(name)),
            value: value.into(),
        }),
    }
}
