/// Run types and implementation for DOCX documents.
use crate::ooxml::docx::format::RgbColor;
use crate::ooxml::error::Result;
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Run content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    /// Text; line feeds become line breaks and tabs become tab stops
    Text(String),
    /// Page break
    PageBreak,
}

/// A mutable run.
///
/// Runs contain text and character formatting.
#[derive(Debug, Clone)]
pub struct MutableRun {
    pub(crate) content: RunContent,
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self {
            content: RunContent::Text(String::new()),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.content = RunContent::Text(text.to_string());
    }

    /// Get the text content. Page breaks have no text.
    pub fn text(&self) -> &str {
        match &self.content {
            RunContent::Text(s) => s,
            RunContent::PageBreak => "",
        }
    }

    pub fn is_page_break(&self) -> bool {
        self.content == RunContent::PageBreak
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Make the text italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.properties.italic = Some(italic);
        self
    }

    /// Set font size in whole points; stored as half-points.
    pub fn font_size_pt(&mut self, points: u32) -> &mut Self {
        self.properties.font_size = Some(points * 2);
        self
    }

    /// Set font name.
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    /// Set text color.
    pub fn color(&mut self, color: RgbColor) -> &mut Self {
        self.properties.color = Some(color);
        self
    }

    /// Turn this run into a page break.
    pub fn add_page_break(&mut self) -> &mut Self {
        self.content = RunContent::PageBreak;
        self
    }

    pub fn properties(&self) -> &RunProperties {
        &self.properties
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        if self.properties.has_properties() {
            self.properties.to_xml(xml)?;
        }

        match &self.content {
            RunContent::Text(text) => write_text(xml, text),
            RunContent::PageBreak => xml.push_str(r#"<w:br w:type="page"/>"#),
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}

/// Emit run text, splitting on line feeds and tabs.
fn write_text(xml: &mut String, text: &str) {
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        let tag = match ch {
            '\n' => "<w:br/>",
            '\t' => "<w:tab/>",
            _ => continue,
        };
        push_t(xml, &text[start..idx]);
        xml.push_str(tag);
        start = idx + 1;
    }
    push_t(xml, &text[start..]);
}

fn push_t(xml: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&escape(segment));
    xml.push_str("</w:t>");
}

/// Run properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunProperties {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    /// Size in half-points (24 = 12pt)
    pub font_size: Option<u32>,
    pub font_name: Option<String>,
    pub color: Option<RgbColor>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold.is_some()
            || self.italic.is_some()
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.color.is_some()
    }

    /// Elements follow the CT_RPr sequence order.
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:rPr>");

        if let Some(ref font_name) = self.font_name {
            let font_name = escape(font_name.as_str());
            write!(
                xml,
                r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                font_name
            )?;
        }

        match self.bold {
            Some(true) => xml.push_str("<w:b/>"),
            Some(false) => xml.push_str(r#"<w:b w:val="0"/>"#),
            None => {},
        }

        match self.italic {
            Some(true) => xml.push_str("<w:i/>"),
            Some(false) => xml.push_str(r#"<w:i w:val="0"/>"#),
            None => {},
        }

        if let Some(color) = self.color {
            write!(xml, r#"<w:color w:val="{}"/>"#, color.to_hex())?;
        }

        if let Some(size) = self.font_size {
            write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size)?;
        }

        xml.push_str("</w:rPr>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: &MutableRun) -> String {
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_text() {
        let mut run = MutableRun::new();
        run.set_text("Service Layer");
        assert_eq!(
            render(&run),
            r#"<w:r><w:t xml:space="preserve">Service Layer</w:t></w:r>"#
        );
    }

    #[test]
    fn test_formatting_order() {
        let mut run = MutableRun::new();
        run.set_text("Title");
        run.bold(true)
            .font_size_pt(28)
            .color(RgbColor(0, 51, 102))
            .font_name("Calibri");

        let xml = render(&run);
        let fonts = xml.find("<w:rFonts").unwrap();
        let bold = xml.find("<w:b/>").unwrap();
        let color = xml.find(r#"<w:color w:val="003366"/>"#).unwrap();
        let size = xml.find(r#"<w:sz w:val="56"/>"#).unwrap();
        assert!(fonts < bold && bold < color && color < size);
    }

    #[test]
    fn test_line_feeds_become_breaks() {
        let mut run = MutableRun::new();
        run.set_text("GET /api/products HTTP/1.1\nHost: localhost:8080");
        let xml = render(&run);
        assert!(xml.contains(r#"HTTP/1.1</w:t><w:br/><w:t xml:space="preserve">Host"#));
    }

    #[test]
    fn test_trailing_line_feed() {
        let mut run = MutableRun::new();
        run.set_text("Client (Browser/Mobile App)\n");
        assert!(render(&run).ends_with("</w:t><w:br/></w:r>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut run = MutableRun::new();
        run.set_text("List<Product> & <T>");
        let xml = render(&run);
        assert!(xml.contains("List&lt;Product&gt; &amp; &lt;T&gt;"));
    }

    #[test]
    fn test_page_break() {
        let mut run = MutableRun::new();
        run.add_page_break();
        assert!(run.is_page_break());
        assert_eq!(render(&run), r#"<w:r><w:br w:type="page"/></w:r>"#);
    }
}
