//! XML parsing into the arena tree.

use quick_xml::Reader;
use quick_xml::events::Event;

use super::arena::{Attr, NodeData, NodeId, XmlTree};
use crate::error::{Error, Result};

/// Parse XML text into an arena tree.
///
/// The input must be a well-formed element tree; mismatched or unclosed
/// tags surface as [`Error::MalformedTree`] with the parser's diagnostic
/// attached. Character and entity references are resolved into text nodes.
pub fn parse(text: &str) -> Result<XmlTree> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut tree = XmlTree::new();
    let mut open: Vec<NodeId> = vec![tree.document()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let id = tree.alloc(element_data(&e)?);
                let parent = *open.last().expect("document node is always open");
                tree.append_child(parent, id);
                open.push(id);
            }
            Ok(Event::Empty(e)) => {
                let id = tree.alloc(element_data(&e)?);
                let parent = *open.last().expect("document node is always open");
                tree.append_child(parent, id);
            }
            Ok(Event::End(_)) => {
                // Name mismatches are already rejected by the reader.
                if open.len() > 1 {
                    open.pop();
                }
            }
            Ok(Event::Text(e)) => {
                let content = String::from_utf8_lossy(e.as_ref()).into_owned();
                if !content.is_empty() {
                    let parent = *open.last().expect("document node is always open");
                    append_text(&mut tree, parent, &content);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                let entity = String::from_utf8_lossy(e.as_ref());
                if let Some(resolved) = resolve_entity(&entity) {
                    let parent = *open.last().expect("document node is always open");
                    append_text(&mut tree, parent, &resolved);
                }
            }
            Ok(Event::CData(e)) => {
                let content = String::from_utf8_lossy(e.as_ref()).into_owned();
                if !content.is_empty() {
                    let parent = *open.last().expect("document node is always open");
                    append_text(&mut tree, parent, &content);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::MalformedTree(e.to_string())),
            // Comments, processing instructions, doctype: not represented.
            _ => {}
        }
    }

    if tree.root_element().is_none() {
        return Err(Error::MalformedTree("no root element found".to_string()));
    }

    Ok(tree)
}

fn element_data(e: &quick_xml::events::BytesStart<'_>) -> Result<NodeData> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::MalformedTree(err.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|err| Error::MalformedTree(err.to_string()))?;
        attrs.push(Attr {
            name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            value: value.into_owned(),
        });
    }

    Ok(NodeData::Element { name, attrs })
}

fn append_text(tree: &mut XmlTree, parent: NodeId, content: &str) {
    let id = tree.alloc(NodeData::Text(content.to_string()));
    tree.append_child(parent, id);
}

/// Resolve XML entity references.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}
