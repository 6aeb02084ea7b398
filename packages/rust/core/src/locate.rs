//! Search for the navigation container in a parsed document.

use docwiki_shared::NavSignature;

use crate::dom::{self, DocNode};

/// Outcome of a [`locate`] walk.
#[derive(Debug, Clone, Copy)]
pub enum Search<'a> {
    /// The first node, in document order, matching the signature.
    Found(DocNode<'a>),
    NotFound,
}

impl<'a> Search<'a> {
    pub fn found(self) -> Option<DocNode<'a>> {
        match self {
            Search::Found(node) => Some(node),
            Search::NotFound => None,
        }
    }
}

/// Depth-first, pre-order search for the element matching `signature`.
///
/// The walk stops at the first match: its descendants and every later node
/// are never visited.
pub fn locate<'a>(node: DocNode<'a>, signature: &NavSignature) -> Search<'a> {
    if matches_signature(node, signature) {
        return Search::Found(node);
    }

    for child in node.children() {
        if let found @ Search::Found(_) = locate(child, signature) {
            return found;
        }
    }

    Search::NotFound
}

fn matches_signature(node: DocNode<'_>, signature: &NavSignature) -> bool {
    dom::is_element(node, &signature.tag)
        && dom::attr(node, "class") == Some(signature.class.as_str())
}
