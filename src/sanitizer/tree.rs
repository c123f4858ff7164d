// src/sanitizer/tree.rs

use std::rc::Rc;

use markup5ever_rcdom::{Handle, NodeData};

use super::{allowlist::is_allowed_tag, attributes::filter_attributes};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Sanitizes every descendant of `node` in place.
///
/// * Text nodes are kept as-is.
/// * Comments, doctypes and processing instructions are removed.
/// * Allowed elements have their attributes filtered and are then descended into.
/// * Any other element, including SVG/MathML ones that share an allowed
///   local name, is unwrapped: its (already sanitized) children take
///   its place in the parent, in order, and the element itself goes away.
///
/// The child list is snapshotted before the walk because unwrapping and
/// removal rewrite it while we iterate.
pub fn sanitize_children(node: &Handle) {
    let snapshot: Vec<Handle> = node.children.borrow().clone();

    for child in &snapshot {
        match child.data {
            NodeData::Text { .. } => {}
            NodeData::Element { ref name, .. } => {
                if &*name.ns == HTML_NAMESPACE && is_allowed_tag(&name.local) {
                    filter_attributes(child);
                    sanitize_children(child);
                } else {
                    tracing::trace!(tag = %name.local, "unwrapping element");
                    sanitize_children(child);
                    unwrap(node, child);
                }
            }
            _ => remove(node, child),
        }
    }
}

/// Replaces `child` inside `parent` with the children of `child`.
fn unwrap(parent: &Handle, child: &Handle) {
    let promoted: Vec<Handle> = child.children.take();
    for grandchild in &promoted {
        grandchild.parent.set(Some(Rc::downgrade(parent)));
    }

    let mut siblings = parent.children.borrow_mut();
    if let Some(index) = siblings.iter().position(|s| Rc::ptr_eq(s, child)) {
        siblings.splice(index..=index, promoted);
    }
    child.parent.set(None);
}

fn remove(parent: &Handle, child: &Handle) {
    parent
        .children
        .borrow_mut()
        .retain(|sibling| !Rc::ptr_eq(sibling, child));
    child.parent.set(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitizer::{parse_body, serialize_children};

    fn run(html: &str) -> String {
        let (_dom, body) = parse_body(html);
        sanitize_children(&body);
        serialize_children(&body)
    }

    #[test]
    fn test_unwrap_keeps_child_order() {
        assert_eq!(
            run("x<div>a<b>b</b>c</div>y"),
            "xa<b>b</b>cy"
        );
    }

    #[test]
    fn test_consecutive_unwraps_do_not_skip_siblings() {
        assert_eq!(
            run("<div>1</div><section>2</section><b>3</b><div>4</div>"),
            "12<b>3</b>4"
        );
    }

    #[test]
    fn test_promoted_children_are_sanitized() {
        assert_eq!(
            run("<div><section><i onclick=\"x\">deep</i><font>f</font></section></div>"),
            "<i>deep</i>f"
        );
    }

    #[test]
    fn test_foreign_elements_with_allowed_names_are_unwrapped() {
        assert_eq!(
            run(r#"<svg><a xlink:href="https://x.io">t</a></svg>"#),
            "t"
        );
        assert_eq!(run("<math><mi><b>x</b></mi></math>"), "<b>x</b>");
    }

    #[test]
    fn test_comments_are_removed() {
        assert_eq!(run("a<!-- hidden -->b"), "ab");
        assert_eq!(run("<p>x<!-- y --></p>"), "<p>x</p>");
    }

    #[test]
    fn test_disallowed_void_element_disappears() {
        assert_eq!(run("a<img src=\"x.png\">b<hr>c"), "abc");
    }

    #[test]
    fn test_allowed_void_element_survives() {
        assert_eq!(run("line<br class=\"x\">next"), "line<br>next");
    }

    #[test]
    fn test_unwrapped_nodes_point_at_new_parent() {
        let (_dom, body) = parse_body("<div><b>x</b></div>");
        sanitize_children(&body);
        let b = body.children.borrow()[0].clone();
        let parent = b.parent.take().and_then(|weak| weak.upgrade());
        assert!(parent.is_some_and(|p| Rc::ptr_eq(&p, &body)));
    }
}
