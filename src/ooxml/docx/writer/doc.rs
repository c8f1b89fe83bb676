/// Document writer implementation for DOCX.
use crate::ooxml::docx::format::{PAGE_HEIGHT_DXA, PAGE_MARGIN_DXA, PAGE_WIDTH_DXA};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;
use std::path::Path;

use super::numbering;
use super::paragraph::MutableParagraph;
use super::props::{self, CoreProperties};
use super::style;
use super::table::MutableTable;

const DEFAULT_FONT: &str = "Calibri";
/// 11pt, in half-points.
const DEFAULT_FONT_SIZE: u32 = 22;

/// A block-level element of the document body, kept in insertion order.
#[derive(Debug, Clone)]
pub enum BodyElement {
    Paragraph(MutableParagraph),
    Table(MutableTable),
}

/// A mutable Word document for writing.
///
/// Content is appended in order: paragraphs, headings, tables and page
/// breaks. Nothing touches the filesystem until [`MutableDocument::save`].
#[derive(Debug, Clone)]
pub struct MutableDocument {
    /// Document body content (paragraphs, tables)
    body: Vec<BodyElement>,
    core: CoreProperties,
    font_name: String,
    /// Body font size in half-points
    font_size: u32,
}

impl MutableDocument {
    /// Create a new empty mutable document.
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            core: CoreProperties::default(),
            font_name: DEFAULT_FONT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn core_properties(&self) -> &CoreProperties {
        &self.core
    }

    pub fn core_properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.core
    }

    /// Set the body font used by `Normal` and inherited by every other style.
    pub fn set_default_font(&mut self, name: &str, points: u32) -> &mut Self {
        self.font_name = name.to_string();
        self.font_size = points * 2;
        self
    }

    /// Add a new empty paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.push(BodyElement::Paragraph(MutableParagraph::new()));
        match self.body.last_mut() {
            Some(BodyElement::Paragraph(para)) => para,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    /// Add a paragraph holding one plain run.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Add a paragraph with a named style such as "List Bullet".
    ///
    /// The style is resolved before anything is appended, so an unknown
    /// name leaves the document unchanged.
    pub fn add_styled_paragraph(&mut self, text: &str, style: &str) -> Result<&mut MutableParagraph> {
        let style_id = style::style_id(style)?;
        let para = self.add_paragraph_with_text(text);
        para.style = Some(style_id);
        Ok(para)
    }

    /// Add a heading paragraph. Level 0 is the document title.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut MutableParagraph> {
        if level > 9 {
            return Err(OoxmlError::InvalidFormat(format!(
                "Heading level must be 0-9, got {}",
                level
            )));
        }
        let style = if level == 0 {
            "Title".to_string()
        } else {
            format!("Heading {}", level)
        };
        self.add_styled_paragraph(text, &style)
    }

    /// Add a table with a fixed grid of rows and columns.
    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut MutableTable {
        self.body.push(BodyElement::Table(MutableTable::new(rows, cols)));
        match self.body.last_mut() {
            Some(BodyElement::Table(table)) => table,
            _ => unreachable!("a table was just pushed"),
        }
    }

    /// Add a paragraph holding a single page-break run.
    pub fn add_page_break(&mut self) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        para.add_run().add_page_break();
        para
    }

    pub fn elements(&self) -> &[BodyElement] {
        &self.body
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &MutableParagraph> {
        self.body.iter().filter_map(|e| match e {
            BodyElement::Paragraph(p) => Some(p),
            BodyElement::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &MutableTable> {
        self.body.iter().filter_map(|e| match e {
            BodyElement::Table(t) => Some(t),
            BodyElement::Paragraph(_) => None,
        })
    }

    /// Get the number of paragraphs in the document body.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    pub fn page_break_count(&self) -> usize {
        self.paragraphs().filter(|p| p.is_page_break()).count()
    }

    /// Headings in document order as `(level, text)`, the title being level 0.
    pub fn headings(&self) -> Vec<(u8, String)> {
        self.paragraphs()
            .filter_map(|p| {
                let level = match p.style()? {
                    "Title" => 0,
                    id => id.strip_prefix("Heading")?.parse().ok()?,
                };
                Some((level, p.text()))
            })
            .collect()
    }

    /// Serialize the main document part (`word/document.xml`).
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(16 * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<w:document xmlns:w="{}" xmlns:r="{}"><w:body>"#,
            namespace::WML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;

        for element in &self.body {
            match element {
                BodyElement::Paragraph(para) => para.to_xml(&mut xml)?,
                BodyElement::Table(table) => table.to_xml(&mut xml)?,
            }
        }

        // The sectPr must be the last element in the body
        xml.push_str("<w:sectPr>");
        write!(
            xml,
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            PAGE_WIDTH_DXA, PAGE_HEIGHT_DXA
        )?;
        write!(
            xml,
            r#"<w:pgMar w:top="{0}" w:right="{0}" w:bottom="{0}" w:left="{0}" w:header="720" w:footer="720" w:gutter="0"/>"#,
            PAGE_MARGIN_DXA
        )?;
        xml.push_str("</w:sectPr>");

        xml.push_str("</w:body></w:document>");
        Ok(xml)
    }

    /// Assemble the OPC package with every part and relationship in place.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let doc_uri = part_uri("/word/document.xml")?;
        let core_uri = part_uri("/docProps/core.xml")?;
        let app_uri = part_uri("/docProps/app.xml")?;
        let styles_uri = part_uri("/word/styles.xml")?;
        let numbering_uri = part_uri("/word/numbering.xml")?;
        let settings_uri = part_uri("/word/settings.xml")?;

        let mut package = OpcPackage::new();
        package.relate_to(rt::OFFICE_DOCUMENT, &doc_uri);
        package.relate_to(rt::CORE_PROPERTIES, &core_uri);
        package.relate_to(rt::EXTENDED_PROPERTIES, &app_uri);

        package.add_part(Part::from_xml(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            self.core.to_xml()?,
        ))?;
        package.add_part(Part::from_xml(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            props::app_properties_xml(env!("CARGO_PKG_NAME"))?,
        ))?;

        let mut doc_part = Part::from_xml(doc_uri, ct::WML_DOCUMENT_MAIN, self.to_xml()?);
        doc_part.rels_mut().add(rt::STYLES, &styles_uri);
        doc_part.rels_mut().add(rt::NUMBERING, &numbering_uri);
        doc_part.rels_mut().add(rt::SETTINGS, &settings_uri);
        package.add_part(doc_part)?;

        let styles_xml =
            style::generate_styles_xml(&style::default_styles(), &self.font_name, self.font_size)?;
        package.add_part(Part::from_xml(styles_uri, ct::WML_STYLES, styles_xml))?;
        package.add_part(Part::from_xml(
            numbering_uri,
            ct::WML_NUMBERING,
            numbering::generate_numbering_xml(&numbering::default_lists())?,
        ))?;
        package.add_part(Part::from_xml(
            settings_uri,
            ct::WML_SETTINGS,
            props::settings_xml()?,
        ))?;

        Ok(package)
    }

    /// Serialize the whole document to `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.to_package()?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Save the document to a file.
    ///
    /// The package is written to a temporary file in the target directory and
    /// then renamed over `path`. On failure no partial file is left behind and
    /// an existing file at `path` is untouched. A replaced file keeps its
    /// permissions; a new one gets the mode a plain create would give it.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Narrowed by the process umask at creation
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder
            .tempfile_in(dir)
            .map_err(|e| save_error(path, e))?;
        tmp.write_all(&bytes).map_err(|e| save_error(path, e))?;
        tmp.as_file().sync_all().map_err(|e| save_error(path, e))?;

        if let Ok(existing) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| save_error(path, e))?;
        }

        tmp.persist(path).map_err(|e| save_error(path, e.error))?;
        log::info!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

impl Default for MutableDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Report a failed save against the target path rather than the temporary file.
fn save_error(path: &Path, err: std::io::Error) -> OoxmlError {
    let kind = err.kind();
    OoxmlError::Io(std::io::Error::new(
        kind,
        format!("cannot write {}: {}", path.display(), kind),
    ))
}

fn part_uri(uri: &str) -> Result<PackURI> {
    Ok(PackURI::new(uri).map_err(OpcError::InvalidPackUri)?)
}
