//! Markup synthesis from a schemaless XML tree.
//!
//! Walks the element tree in pre-order, emitting heading markers for
//! section-like elements, property lists for attributes, and text blocks
//! for leaves. The output is well-formed nested markup: every opened
//! block is closed before the walk returns.

use std::fmt::Write;

use super::classify::{NameHeuristic, SectionPredicate};
use super::escape::escape;
use super::slug::anchor_id;
use crate::xml::{NodeId, XmlTree};

/// Maximum heading level. Depth saturates here and never exceeds it.
const MAX_HEADING_LEVEL: usize = 6;

/// Names of direct children consulted for heading text, in priority order.
const TITLE_CHILD_NAMES: &[&str] = &["title", "name", "header"];

/// Render a tree to linear annotated markup using the default heuristic.
pub fn render(tree: &XmlTree) -> String {
    render_with(tree, &NameHeuristic)
}

/// Render a tree to linear annotated markup with a caller-supplied
/// section predicate.
///
/// The walk uses an explicit frame stack, so input nesting depth cannot
/// overflow the thread stack. A child's effective depth increases only
/// when its parent was judged section-like: transparent containers do not
/// add nesting.
pub fn render_with(tree: &XmlTree, predicate: &dyn SectionPredicate) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"xml-document\">");

    // Document-level title, taken from the first <title> element anywhere.
    if let Some(title) = tree.find_element("title") {
        let text = tree.deep_text(title);
        if !text.is_empty() {
            write!(out, "<h1>{}</h1>", escape(&text)).unwrap();
        }
    }

    if let Some(root) = tree.root_element() {
        walk(tree, root, predicate, &mut out);
    }

    out.push_str("</div>");
    out
}

enum Frame {
    Open { element: NodeId, depth: usize },
    Close(&'static str),
}

fn walk(tree: &XmlTree, root: NodeId, predicate: &dyn SectionPredicate, out: &mut String) {
    let mut stack = vec![Frame::Open {
        element: root,
        depth: 1,
    }];

    while let Some(frame) = stack.pop() {
        let (element, depth) = match frame {
            Frame::Close(tag) => {
                out.push_str(tag);
                continue;
            }
            Frame::Open { element, depth } => (element, depth),
        };

        let is_root_child = tree.node(element).map(|n| n.parent) == Some(root);
        let section_like = predicate.is_section_like(tree, element, is_root_child);

        if section_like {
            let level = (depth + 1).min(MAX_HEADING_LEVEL);
            let name = tree.name(element);
            write!(
                out,
                "<h{level} id=\"section-{}\">{}</h{level}>",
                anchor_id(name, depth),
                escape(&heading_text(tree, element)),
            )
            .unwrap();
        }

        let attrs = tree.attrs(element);
        if !attrs.is_empty() {
            out.push_str("<div class=\"xml-attributes\">");
            for attr in attrs {
                write!(
                    out,
                    "<div class=\"xml-attribute\"><span class=\"attr-name\">{}</span>: \
                     <span class=\"attr-value\">{}</span></div>",
                    escape(&attr.name),
                    escape(&attr.value),
                )
                .unwrap();
            }
            out.push_str("</div>");
        }

        if tree.has_element_children(element) {
            out.push_str("<div class=\"xml-children\">");
            stack.push(Frame::Close("</div>"));

            let child_depth = if section_like { depth + 1 } else { depth };
            let children: Vec<NodeId> = tree.child_elements(element).collect();
            for &child in children.iter().rev() {
                stack.push(Frame::Open {
                    element: child,
                    depth: child_depth,
                });
            }
        } else {
            let text = tree.deep_text(element);
            let text = text.trim();
            if !text.is_empty() {
                write!(out, "<div class=\"xml-text\">{}</div>", escape(text)).unwrap();
            }
        }
    }
}

/// Resolve the visible text for a section-like element's heading marker.
///
/// Priority: non-empty `title`/`name`/`id` attribute, then the text of the
/// first direct child named `title`/`name`/`header`, then the raw tag name.
fn heading_text(tree: &XmlTree, element: NodeId) -> String {
    for attr in ["title", "name", "id"] {
        if let Some(value) = tree.attr(element, attr)
            && !value.is_empty()
        {
            return value.to_string();
        }
    }

    let title_child = TITLE_CHILD_NAMES
        .iter()
        .find_map(|name| tree.child_elements(element).find(|&c| tree.name(c) == *name));
    if let Some(child) = title_child {
        let text = tree.deep_text(child);
        if !text.is_empty() {
            return text;
        }
    }

    tree.name(element).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse;

    fn render_str(xml: &str) -> String {
        render(&parse(xml).unwrap())
    }

    #[test]
    fn test_wrapper_and_root_heading() {
        let markup = render_str("<report/>");
        assert!(markup.starts_with("<div class=\"xml-document\">"));
        assert!(markup.ends_with("</div>"));
        // Root is a direct child of nothing, but "report" gets no heading:
        // it is not a root child, has no attrs, no section children, and
        // no structural name.
        assert!(!markup.contains("<h"));
    }

    #[test]
    fn test_structural_root_gets_level_two() {
        let markup = render_str("<document/>");
        assert!(markup.contains("<h2 id=\"section-document-1\">document</h2>"));
    }

    #[test]
    fn test_document_title_preamble() {
        let markup = render_str("<doc><title>My Report</title></doc>");
        assert!(markup.contains("<h1>My Report</h1>"));
    }

    #[test]
    fn test_heading_text_priority_attribute() {
        let markup = render_str(r#"<doc><chapter name="Intro"><title>Ignored</title></chapter></doc>"#);
        assert!(markup.contains(">Intro</h"));
    }

    #[test]
    fn test_heading_text_from_title_child() {
        let markup = render_str("<doc><chapter><title>From Child</title></chapter></doc>");
        assert!(markup.contains(">From Child</h"));
    }

    #[test]
    fn test_heading_text_tag_name_fallback() {
        let markup = render_str("<doc><chapter><p>body</p></chapter></doc>");
        assert!(markup.contains(">chapter</h"));
    }

    #[test]
    fn test_attribute_property_list() {
        let markup = render_str(r#"<doc version="1.2"/>"#);
        let expected = concat!(
            "<div class=\"xml-attributes\">",
            "<div class=\"xml-attribute\">",
            "<span class=\"attr-name\">version</span>: ",
            "<span class=\"attr-value\">1.2</span>",
            "</div></div>",
        );
        assert!(markup.contains(expected));
    }

    #[test]
    fn test_leaf_text_block_escaped() {
        let markup = render_str("<doc><note>a &lt; b</note></doc>");
        assert!(markup.contains("<div class=\"xml-text\">a &lt; b</div>"));
    }

    #[test]
    fn test_blank_leaf_text_skipped() {
        let markup = render_str("<doc><note>   </note></doc>");
        assert!(!markup.contains("xml-text"));
    }

    #[test]
    fn test_transparent_container_keeps_depth() {
        // <doc> is not section-like, so <wrap> stays at depth 1 and the
        // sections under it land at level 3, not 4.
        let markup = render_str("<doc><wrap><section/><section/></wrap></doc>");
        let first = markup.find("<h3 id=\"section-section-2\">").unwrap();
        let second = markup[first + 1..].find("<h3 id=\"section-section-2\">");
        assert!(second.is_some());
    }

    #[test]
    fn test_depth_saturates_at_six() {
        let mut xml = String::new();
        for i in 0..10 {
            xml.push_str(&format!("<section id=\"s{i}\">"));
        }
        for _ in 0..10 {
            xml.push_str("</section>");
        }
        let markup = render_str(&xml);
        assert!(markup.contains("<h6 "));
        assert!(!markup.contains("<h7"));
        assert!(!markup.contains("<h8"));
    }

    #[test]
    fn test_every_open_block_is_closed() {
        let markup = render_str(r#"<doc a="1"><s><t>x</t></s><u>y</u></doc>"#);
        let opens = markup.matches("<div").count();
        let closes = markup.matches("</div>").count();
        assert_eq!(opens, closes);
    }
}
