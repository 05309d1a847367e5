//! # contour
//!
//! Outline inference for loosely structured markup.
//!
//! contour turns inputs that carry no explicit section markers — generic
//! XML trees with no fixed schema, or flat heading-tagged markup from an
//! external package converter — into a navigable document: linear
//! annotated markup with stable anchor ids, plus an explicit section
//! forest reconstructed from the heading sequence.
//!
//! ## Quick Start
//!
//! ```
//! use contour::{NoConverter, SourceKind, convert};
//!
//! let xml = br#"<report>
//!     <title>Annual Report</title>
//!     <chapter name="Overview"><p>...</p></chapter>
//! </report>"#;
//!
//! let doc = convert("report.xml", xml, SourceKind::Xml, &NoConverter).unwrap();
//! assert_eq!(doc.title, "Annual Report");
//! assert!(!doc.outline.is_empty());
//! ```
//!
//! ## Pipeline
//!
//! XML input is parsed into an arena tree ([`xml`]), classified and
//! rendered to heading-tagged markup ([`html`]); package input arrives
//! as markup from the external converter ([`import`]). Either way, the
//! markup is scanned for heading markers and the outline is rebuilt from
//! the flat sequence with a monotonic stack ([`outline`]).

pub mod document;
pub mod error;
pub mod html;
pub mod import;
pub mod outline;
pub(crate) mod util;
pub mod xml;

pub use document::{Document, SourceKind, convert, convert_named};
pub use error::{Error, Result};
pub use import::{ConvertedMarkup, Diagnostic, DiagnosticLevel, NoConverter, PackageConverter};
pub use outline::{Heading, Section};
