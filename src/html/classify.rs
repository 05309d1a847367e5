//! Section-likeness classification for schemaless elements.
//!
//! The input carries no explicit section markers, so the renderer has to
//! guess which elements represent document sections. The heuristic lives
//! behind [`SectionPredicate`] so alternate rules can be swapped in
//! without touching the tree walk.

use crate::xml::{NodeId, XmlTree};

/// Element names that usually denote document structure.
const SECTION_NAMES: &[&str] = &[
    "section", "chapter", "part", "div", "article", "document", "header", "body", "footer",
    "title", "heading",
];

/// Direct-child names that suggest the parent is a section.
const SECTION_CHILD_NAMES: &[&str] = &["section", "header", "title"];

/// Decides whether an element should produce a heading marker.
///
/// `is_root_child` is context supplied by the walker: the predicate itself
/// never inspects ancestors.
pub trait SectionPredicate {
    fn is_section_like(&self, tree: &XmlTree, element: NodeId, is_root_child: bool) -> bool;
}

/// The default heuristic. An element is section-like if any of:
///
/// - its local name (case-insensitive) is a known structural name;
/// - it carries an `id`, `name`, or `title` attribute;
/// - it has a direct child named `section`, `header`, or `title`
///   (direct children only — deeper descendants are deliberately not
///   consulted, since deepening the check would shift heading counts);
/// - it is a direct child of the root element.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameHeuristic;

impl SectionPredicate for NameHeuristic {
    fn is_section_like(&self, tree: &XmlTree, element: NodeId, is_root_child: bool) -> bool {
        let name = local_name(tree.name(element)).to_ascii_lowercase();
        if SECTION_NAMES.contains(&name.as_str()) {
            return true;
        }

        if tree.attr(element, "id").is_some()
            || tree.attr(element, "name").is_some()
            || tree.attr(element, "title").is_some()
        {
            return true;
        }

        let has_section_child = tree.child_elements(element).any(|child| {
            let child_name = local_name(tree.name(child)).to_ascii_lowercase();
            SECTION_CHILD_NAMES.contains(&child_name.as_str())
        });
        if has_section_child {
            return true;
        }

        is_root_child
    }
}

/// Extract local name from a namespaced XML name (e.g., "dc:title" -> "title").
pub fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}
