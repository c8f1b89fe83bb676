//! End-to-end checks on the saved guide, read back from the .docx package.

use std::io::{Cursor, Read};
use std::path::Path;

use archdoc::config::GuideConfig;
use archdoc::guide::{self, content};
use archdoc::ooxml::docx::MutableDocument;
use archdoc::ooxml::error::OoxmlError;
use proptest::prelude::*;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::reader::Reader;

#[derive(Debug, Default)]
struct Para {
    style: Option<String>,
    text: String,
    in_table: bool,
}

#[derive(Debug, Default)]
struct Body {
    paragraphs: Vec<Para>,
    /// Tables as rows of cell texts.
    tables: Vec<Vec<Vec<String>>>,
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

fn attr(e: &quick_xml::events::BytesStart, name: &str) -> Option<String> {
    let attr = e.try_get_attribute(name).unwrap()?;
    Some(String::from_utf8(attr.value.into_owned()).unwrap())
}

/// Walk `word/document.xml` collecting paragraphs and table cells.
fn parse_body(xml: &str) -> Body {
    let mut reader = Reader::from_str(xml);
    let mut body = Body::default();
    let mut current: Option<Para> = None;
    let mut in_text = false;
    let mut table_depth = 0;
    let mut cell = String::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    current = Some(Para {
                        in_table: table_depth > 0,
                        ..Para::default()
                    })
                },
                b"w:t" => in_text = true,
                b"w:tbl" => {
                    table_depth += 1;
                    body.tables.push(Vec::new());
                },
                b"w:tr" => {
                    if let Some(table) = body.tables.last_mut() {
                        table.push(Vec::new());
                    }
                },
                b"w:tc" => cell.clear(),
                _ => {},
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => body.paragraphs.push(Para {
                    in_table: table_depth > 0,
                    ..Para::default()
                }),
                b"w:pStyle" => {
                    if let Some(para) = current.as_mut() {
                        para.style = attr(&e, "w:val");
                    }
                },
                b"w:br" if attr(&e, "w:type").is_none() => {
                    if let Some(para) = current.as_mut() {
                        para.text.push('\n');
                    }
                },
                _ => {},
            },
            Event::Text(t) if in_text => {
                if let Some(para) = current.as_mut() {
                    para.text.push_str(std::str::from_utf8(&t).unwrap());
                }
            },
            Event::GeneralRef(r) if in_text => {
                let name = std::str::from_utf8(&r).unwrap();
                let resolved = resolve_predefined_entity(name).unwrap();
                if let Some(para) = current.as_mut() {
                    para.text.push_str(resolved);
                }
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(para) = current.take() {
                        if para.in_table {
                            cell.push_str(&para.text);
                        }
                        body.paragraphs.push(para);
                    }
                },
                b"w:tc" => {
                    if let Some(row) = body.tables.last_mut().and_then(|t| t.last_mut()) {
                        row.push(cell.clone());
                    }
                },
                b"w:tbl" => table_depth -= 1,
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    body
}

fn saved_guide(dir: &Path) -> Vec<u8> {
    let path = dir.join("guide.docx");
    guide::write_guide(&GuideConfig::new(&path)).unwrap();
    std::fs::read(path).unwrap()
}

fn styled<'a>(body: &'a Body, style: &'a str) -> impl Iterator<Item = &'a Para> + 'a {
    body.paragraphs
        .iter()
        .filter(move |p| p.style.as_deref() == Some(style))
}

#[test]
fn package_contains_every_part() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = saved_guide(dir.path());
    let archive = zip::ZipArchive::new(Cursor::new(&bytes)).unwrap();
    let names: Vec<&str> = archive.file_names().collect();

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "word/document.xml",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "word/numbering.xml",
        "word/settings.xml",
    ] {
        assert!(names.contains(&part), "missing {}", part);
    }
    assert_eq!(names[0], "[Content_Types].xml");
}

#[test]
fn table_of_contents_lists_eight_sections() {
    let dir = tempfile::tempdir().unwrap();
    let body = parse_body(&read_part(&saved_guide(dir.path()), "word/document.xml"));

    let toc: Vec<&str> = styled(&body, "ListBullet")
        .take(content::TOC_ENTRIES.len())
        .map(|p| p.text.as_str())
        .collect();
    assert_eq!(
        toc,
        [
            "1. Overview",
            "2. Architecture & Flow",
            "3. Technology Stack",
            "4. How Components Connect",
            "5. Key Annotations Explained",
            "6. Database & ORM Concepts",
            "7. API Endpoints",
            "8. Request-Response Lifecycle",
        ]
    );

    // The first list item directly follows the heading
    let heading = body
        .paragraphs
        .iter()
        .position(|p| p.text == "Table of Contents")
        .unwrap();
    assert_eq!(body.paragraphs[heading + 1].text, "1. Overview");
}

#[test]
fn level_one_headings_appear_once_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let body = parse_body(&read_part(&saved_guide(dir.path()), "word/document.xml"));

    let headings: Vec<&str> = styled(&body, "Heading1").map(|p| p.text.as_str()).collect();
    assert_eq!(
        headings,
        [
            "Table of Contents",
            "1. Overview",
            "2. Architecture & Flow",
            "3. Technology Stack",
            "4. How Components Connect",
            "5. Key Annotations Explained",
            "6. Database & ORM Concepts",
            "7. API Endpoints",
            "8. Request-Response Lifecycle",
            "Summary: How Everything Works Together",
            "Next Steps for Learning",
        ]
    );
}

#[test]
fn single_endpoint_table() {
    let dir = tempfile::tempdir().unwrap();
    let xml = read_part(&saved_guide(dir.path()), "word/document.xml");
    let body = parse_body(&xml);

    assert_eq!(body.tables.len(), 1);
    assert_eq!(
        body.tables[0],
        [
            ["HTTP Method & Path", "Purpose"],
            ["GET /api/products", "Get all products"],
            ["GET /api/product/{id}", "Get single product by ID"],
            ["POST /api/product", "Add new product with image"],
            ["GET /api/product/{productId}/image", "Download product image"],
        ]
    );
    assert!(xml.contains(r#"<w:tblStyle w:val="LightGrid-Accent1"/>"#));
}

#[test]
fn sections_are_separated_by_page_breaks() {
    let dir = tempfile::tempdir().unwrap();
    let xml = read_part(&saved_guide(dir.path()), "word/document.xml");

    assert_eq!(xml.matches(r#"<w:br w:type="page"/>"#).count(), 10);
}

#[test]
fn line_breaks_inside_code_survive() {
    let dir = tempfile::tempdir().unwrap();
    let body = parse_body(&read_part(&saved_guide(dir.path()), "word/document.xml"));

    assert!(
        body.paragraphs
            .iter()
            .any(|p| p.text == "GET /api/products HTTP/1.1\nHost: localhost:8080")
    );
}

#[test]
fn list_styles_carry_numbering() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = saved_guide(dir.path());
    let styles = read_part(&bytes, "word/styles.xml");
    let numbering = read_part(&bytes, "word/numbering.xml");

    assert!(styles.contains(r#"w:styleId="ListBullet""#));
    assert!(styles.contains(r#"w:styleId="ListNumber""#));
    assert!(!styles.contains("Courier New"));
    assert!(numbering.contains(r#"<w:numFmt w:val="decimal"/>"#));
}

#[test]
fn core_properties_have_no_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let core = read_part(&saved_guide(dir.path()), "docProps/core.xml");

    assert!(core.contains("<dc:title>Spring Boot E-Commerce Backend</dc:title>"));
    assert!(!core.contains("dcterms:"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.docx");
    let second = dir.path().join("second.docx");

    guide::write_guide(&GuideConfig::new(&first)).unwrap();
    guide::write_guide(&GuideConfig::new(&second)).unwrap();

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn rerun_replaces_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guide.docx");
    std::fs::write(&path, b"not a docx").unwrap();

    guide::write_guide(&GuideConfig::new(&path)).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn missing_directory_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("guide.docx");

    let err = guide::write_guide(&GuideConfig::new(&path)).unwrap_err();
    assert!(matches!(err, OoxmlError::Io(_)));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

proptest! {
    #[test]
    fn run_text_survives_escaping(text in "[a-zA-Z0-9 <>&'\";→é]{0,40}") {
        let mut doc = MutableDocument::new();
        doc.add_paragraph_with_text(&text);

        let xml = read_part(&doc.to_bytes().unwrap(), "word/document.xml");
        let body = parse_body(&xml);

        prop_assert_eq!(body.paragraphs.len(), 1);
        prop_assert_eq!(&body.paragraphs[0].text, &text);
    }
}
