//! Outline construction from a flat heading sequence.

use super::extract::Heading;

/// A node in the navigable section forest.
///
/// Levels are taken from the source headings as-is: a child's level is
/// strictly greater than its parent's, but gaps are preserved rather
/// than renormalized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Section {
    pub id: String,
    pub title: String,
    pub level: u8,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Section>,
}

/// Reconstruct the section forest from headings in document order.
///
/// The stack holds the currently open chain of sections, levels strictly
/// increasing from bottom to top. Each heading closes every open section
/// at its own level or deeper (equal levels never nest), then opens
/// itself under whatever remains — or as a new root when nothing does.
/// The forest is purely a reshaping of the input: no heading is dropped
/// and none is invented.
pub fn build(headings: &[Heading]) -> Vec<Section> {
    let mut forest: Vec<Section> = Vec::new();
    let mut stack: Vec<Section> = Vec::new();

    for heading in headings {
        let section = Section {
            id: heading.id.clone(),
            title: heading.title.clone(),
            level: heading.level,
            children: Vec::new(),
        };

        while let Some(closed) = stack.pop_if(|top| top.level >= section.level) {
            attach(&mut stack, &mut forest, closed);
        }

        stack.push(section);
    }

    while let Some(closed) = stack.pop() {
        attach(&mut stack, &mut forest, closed);
    }

    forest
}

/// Close out a section: it becomes the last child of the section below
/// it on the stack, or a root of the forest when the stack is empty.
fn attach(stack: &mut [Section], forest: &mut Vec<Section>, section: Section) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(section),
        None => forest.push(section),
    }
}
