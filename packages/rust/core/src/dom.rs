//! Read-only views over parsed HTML.
//!
//! Documents are parsed by `scraper` into an arena-backed `ego_tree`; a
//! [`DocNode`] is a cheap, copyable reference into that arena with
//! parent/child/sibling access by index. Nothing in this crate mutates it.

use ego_tree::NodeRef;
use scraper::Node;

/// A node of a parsed HTML document.
pub type DocNode<'a> = NodeRef<'a, Node>;

/// Whether `node` is an element named `tag`.
pub fn is_element(node: DocNode<'_>, tag: &str) -> bool {
    node.value()
        .as_element()
        .is_some_and(|el| el.name() == tag)
}

/// Whether `node` is an `<a>` element.
pub fn is_anchor(node: DocNode<'_>) -> bool {
    is_element(node, "a")
}

/// Value of attribute `name`, if `node` is an element carrying it.
pub fn attr<'a>(node: DocNode<'a>, name: &str) -> Option<&'a str> {
    node.value().as_element().and_then(|el| el.attr(name))
}

/// Text of `node`'s first child, if that child is a text node.
pub fn first_child_text<'a>(node: DocNode<'a>) -> Option<&'a str> {
    node.first_child()
        .and_then(|child| child.value().as_text())
        .map(|text| &**text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> DocNode<'a> {
        let sel = Selector::parse(css).unwrap();
        *doc.select(&sel).next().expect("selector matches")
    }

    #[test]
    fn element_and_attribute_access() {
        let doc = Html::parse_fragment(r#"<a href="/docs/x" class="nav">Text</a>"#);
        let a = first(&doc, "a");

        assert!(is_anchor(a));
        assert!(!is_element(a, "ul"));
        assert_eq!(attr(a, "href"), Some("/docs/x"));
        assert_eq!(attr(a, "title"), None);
        assert_eq!(first_child_text(a), Some("Text"));
    }

    #[test]
    fn first_child_text_requires_text_node() {
        let doc = Html::parse_fragment(r#"<a href="/x"><b>Bold</b></a><a href="/y"></a>"#);
        let sel = Selector::parse("a").unwrap();
        let anchors: Vec<DocNode<'_>> = doc.select(&sel).map(|el| *el).collect();

        assert_eq!(first_child_text(anchors[0]), None);
        assert_eq!(first_child_text(anchors[1]), None);
    }

    #[test]
    fn text_nodes_are_not_elements() {
        let doc = Html::parse_fragment("<p>hello</p>");
        let p = first(&doc, "p");
        let text = p.first_child().unwrap();

        assert!(!is_anchor(text));
        assert_eq!(attr(text, "href"), None);
    }
}
