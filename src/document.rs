//! Caller boundary: one input file in, one converted document out.

use tracing::debug;

use crate::error::{Error, Result};
use crate::import::{Diagnostic, PackageConverter};
use crate::outline::{self, Section};
use crate::util::{decode_text, extract_xml_encoding};
use crate::{html, xml};

/// Declared kind of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A schemaless XML element tree, converted by this crate.
    Xml,
    /// A binary package decoded to markup by the external converter.
    Package,
}

impl SourceKind {
    /// Infer the kind from a file name's extension.
    pub fn from_path(name: &str) -> Option<SourceKind> {
        if name.ends_with(".xml") {
            Some(SourceKind::Xml)
        } else if name.ends_with(".docx") {
            Some(SourceKind::Package)
        } else {
            None
        }
    }
}

/// A converted document: annotated markup, its inferred outline, the
/// resolved title, and any converter diagnostics.
///
/// Built once per conversion and immutable afterwards; there are no
/// partial results. Every section id in `outline` appears verbatim as an
/// anchor id in `markup`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Document {
    pub markup: String,
    pub outline: Vec<Section>,
    pub title: String,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert one input file, inferring its kind from the file name.
///
/// Unrecognized extensions fail with [`Error::UnsupportedInput`] before
/// any processing.
pub fn convert_named(
    name: &str,
    bytes: &[u8],
    converter: &dyn PackageConverter,
) -> Result<Document> {
    let kind = SourceKind::from_path(name).ok_or_else(|| {
        Error::UnsupportedInput(format!("{name}: expected an .xml or .docx file"))
    })?;
    convert(name, bytes, kind, converter)
}

/// Convert one input file of a declared kind.
///
/// Synchronous from start to finish: the external converter (package
/// path) is driven to completion before any outline logic runs, and the
/// whole call shares no state with other conversions, so concurrent
/// calls for different files are safe.
pub fn convert(
    name: &str,
    bytes: &[u8],
    kind: SourceKind,
    converter: &dyn PackageConverter,
) -> Result<Document> {
    debug!(file = name, kind = ?kind, "converting document");

    let (markup, diagnostics) = match kind {
        SourceKind::Xml => {
            let hint = extract_xml_encoding(bytes);
            let text = decode_text(bytes, hint);
            let tree = xml::parse(&text)?;
            (html::render(&tree), Vec::new())
        }
        SourceKind::Package => {
            let converted = match converter.convert(bytes) {
                Ok(converted) => converted,
                Err(Error::Conversion(message)) => return Err(Error::Conversion(message)),
                Err(other) => return Err(Error::Conversion(other.to_string())),
            };
            (converted.markup, converted.diagnostics)
        }
    };

    let (headings, markup) = outline::extract(&markup);
    debug!(headings = headings.len(), "extracted heading markers");

    let outline = outline::build(&headings);
    let title = outline::resolve_title(&markup, name);

    Ok(Document {
        markup,
        outline,
        title,
        diagnostics,
    })
}
