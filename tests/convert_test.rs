//! End-to-end conversion tests: raw bytes in, converted document out.

use contour::{
    ConvertedMarkup, Diagnostic, DiagnosticLevel, Error, NoConverter, PackageConverter, Result,
    Section, SourceKind, convert, convert_named,
};

struct StubConverter {
    markup: &'static str,
    diagnostics: Vec<Diagnostic>,
}

impl PackageConverter for StubConverter {
    fn convert(&self, _bytes: &[u8]) -> Result<ConvertedMarkup> {
        Ok(ConvertedMarkup {
            markup: self.markup.to_string(),
            diagnostics: self.diagnostics.clone(),
        })
    }
}

fn section_count(sections: &[Section]) -> usize {
    sections
        .iter()
        .map(|s| 1 + section_count(&s.children))
        .sum()
}

// ============================================================================
// XML path
// ============================================================================

#[test]
fn test_xml_document_with_title_and_chapters() {
    let xml = br#"<report>
        <title>Annual Report</title>
        <chapter name="Overview"><p>Text.</p></chapter>
        <chapter name="Financials"><p>Numbers.</p></chapter>
    </report>"#;

    let doc = convert("report.xml", xml, SourceKind::Xml, &NoConverter).unwrap();

    assert_eq!(doc.title, "Annual Report");
    assert!(doc.diagnostics.is_empty());

    // The document-level h1 is the sole root; chapters nest beneath it.
    assert_eq!(doc.outline.len(), 1);
    assert_eq!(doc.outline[0].title, "Annual Report");
    let chapter_titles: Vec<&str> = doc.outline[0]
        .children
        .iter()
        .flat_map(|s| collect_titles(s))
        .collect();
    assert!(chapter_titles.contains(&"Overview"));
    assert!(chapter_titles.contains(&"Financials"));
}

fn collect_titles(section: &Section) -> Vec<&str> {
    let mut titles = vec![section.title.as_str()];
    for child in &section.children {
        titles.extend(collect_titles(child));
    }
    titles
}

#[test]
fn test_attribute_only_element_is_section_like() {
    // <widget> is nested below a root child, has no structural name and
    // no section children: the name attribute alone qualifies it.
    let xml = br#"<data><row><widget name="Intro"><v>1</v></widget></row></data>"#;
    let doc = convert("data.xml", xml, SourceKind::Xml, &NoConverter).unwrap();

    let titles: Vec<&str> = doc.outline.iter().flat_map(collect_titles).collect();
    assert!(titles.contains(&"Intro"), "attribute rule should classify widget");
}

#[test]
fn test_depth_saturates_at_level_six() {
    let mut xml = String::new();
    for i in 0..10 {
        xml.push_str(&format!("<section name=\"s{i}\">"));
    }
    for _ in 0..10 {
        xml.push_str("</section>");
    }

    let doc = convert("deep.xml", xml.as_bytes(), SourceKind::Xml, &NoConverter).unwrap();

    assert!(!doc.markup.contains("<h7"));
    fn max_level(sections: &[Section]) -> u8 {
        sections
            .iter()
            .map(|s| s.level.max(max_level(&s.children)))
            .max()
            .unwrap_or(0)
    }
    assert_eq!(max_level(&doc.outline), 6);
    assert_eq!(section_count(&doc.outline), 10, "saturation drops no headings");
}

#[test]
fn test_markup_escapes_attribute_values() {
    let xml = br#"<doc note="a &lt; b &amp; c"/>"#;
    let doc = convert("esc.xml", xml, SourceKind::Xml, &NoConverter).unwrap();

    assert!(doc.markup.contains("a &lt; b &amp; c"));
    assert!(!doc.markup.contains("a < b"));
}

#[test]
fn test_windows_1252_input_decoded() {
    let mut xml = b"<doc><note>caf".to_vec();
    xml.push(0xE9); // é in Windows-1252, invalid UTF-8
    xml.extend_from_slice(b"</note></doc>");

    let doc = convert("legacy.xml", &xml, SourceKind::Xml, &NoConverter).unwrap();
    assert!(doc.markup.contains("café"));
}

#[test]
fn test_malformed_xml_reports_parse_diagnostic() {
    let err = convert("bad.xml", b"<a><b></a></b>", SourceKind::Xml, &NoConverter).unwrap_err();
    match err {
        Error::MalformedTree(message) => assert!(!message.is_empty()),
        other => panic!("expected MalformedTree, got {other:?}"),
    }
}

// ============================================================================
// Package path
// ============================================================================

#[test]
fn test_package_markup_treated_like_native_output() {
    let stub = StubConverter {
        markup: "<h1>Memo</h1><h2>Background</h2><p>…</p><h2>Decision</h2>",
        diagnostics: vec![
            Diagnostic {
                level: DiagnosticLevel::Warning,
                message: "unrecognised style: Subtitle".to_string(),
            },
            Diagnostic {
                level: DiagnosticLevel::Info,
                message: "dropped empty paragraph".to_string(),
            },
        ],
    };

    let doc = convert_named("memo.docx", b"PK\x03\x04", &stub).unwrap();

    assert_eq!(doc.title, "Memo");
    assert_eq!(doc.outline.len(), 1);
    assert_eq!(doc.outline[0].children.len(), 2);

    // Diagnostics pass through untouched and in order.
    assert_eq!(doc.diagnostics.len(), 2);
    assert_eq!(doc.diagnostics[0].message, "unrecognised style: Subtitle");
    assert_eq!(doc.diagnostics[1].level, DiagnosticLevel::Info);

    // Backfilled ids land in both the outline and the markup.
    assert_eq!(doc.outline[0].id, "section-0");
    assert!(doc.markup.contains("<h1 id=\"section-0\">Memo</h1>"));
}

#[test]
fn test_unsupported_extension_rejected_before_processing() {
    let err = convert_named("slides.pptx", b"PK", &NoConverter).unwrap_err();
    assert!(matches!(err, Error::UnsupportedInput(_)));
}

#[test]
fn test_missing_converter_surfaces_conversion_failure() {
    let err = convert_named("memo.docx", b"PK", &NoConverter).unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
}
