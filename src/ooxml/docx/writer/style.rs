/// Style writer support for DOCX documents.
///
/// Builds the `word/styles.xml` part from a set of [`MutableStyle`]s. The
/// built-in set mirrors the styles a default Word template exposes under the
/// names callers use ("Heading 1", "List Bullet", ...).
use crate::ooxml::docx::format::{ParagraphAlignment, RgbColor, StyleType};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use phf::phf_map;
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

use super::numbering::{BULLET_NUM_ID, DECIMAL_NUM_ID};

/// Display name to style ID for every style `default_styles` defines.
static BUILTIN_STYLE_IDS: phf::Map<&'static str, &'static str> = phf_map! {
    "Normal" => "Normal",
    "Title" => "Title",
    "Heading 1" => "Heading1",
    "Heading 2" => "Heading2",
    "Heading 3" => "Heading3",
    "Heading 4" => "Heading4",
    "Heading 5" => "Heading5",
    "Heading 6" => "Heading6",
    "Heading 7" => "Heading7",
    "Heading 8" => "Heading8",
    "Heading 9" => "Heading9",
    "List Bullet" => "ListBullet",
    "List Number" => "ListNumber",
    "Default Paragraph Font" => "DefaultParagraphFont",
    "Normal Table" => "TableNormal",
    "Light Grid Accent 1" => "LightGrid-Accent1",
};

/// Resolve a style display name to its ID.
pub fn style_id(name: &str) -> Result<&'static str> {
    BUILTIN_STYLE_IDS
        .get(name)
        .copied()
        .ok_or_else(|| OoxmlError::InvalidFormat(format!("Unknown style '{}'", name)))
}

/// Accent color of the default Office theme.
const ACCENT_1: RgbColor = RgbColor(0x4F, 0x81, 0xBD);
const HEADING_DARK: RgbColor = RgbColor(0x36, 0x5F, 0x91);
const TITLE_TEXT: RgbColor = RgbColor(0x17, 0x36, 0x5D);

/// A mutable style definition for writing.
#[derive(Debug, Clone)]
pub struct MutableStyle {
    /// Style identifier (e.g., "Heading1")
    style_id: String,
    /// UI-visible name (e.g., "heading 1")
    name: String,
    style_type: StyleType,
    is_default: bool,
    based_on: Option<String>,
    /// Style for the paragraph that follows
    next: Option<String>,
    priority: Option<i32>,
    is_quick_style: bool,
    is_semi_hidden: bool,
    keep_next: bool,
    /// Numbering instance linked to this style
    num_id: Option<u32>,
    outline_level: Option<u8>,
    alignment: Option<ParagraphAlignment>,
    /// Space before/after in twips
    space_before: Option<u32>,
    space_after: Option<u32>,
    /// Left indent and hanging indent in twips
    indent: Option<(u32, u32)>,
    contextual_spacing: bool,
    font_name: Option<String>,
    /// Half-points
    font_size: Option<u32>,
    bold: bool,
    italic: bool,
    color: Option<RgbColor>,
    /// Border width (eighths of a point) and color applied on all table edges
    table_borders: Option<(u32, RgbColor)>,
    /// Default cell margins (left/right) for table styles, in twips
    cell_margin: Option<u32>,
    first_row_bold: bool,
}

impl MutableStyle {
    pub fn new(style_id: impl Into<String>, name: impl Into<String>, style_type: StyleType) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            based_on: None,
            next: None,
            priority: None,
            is_quick_style: false,
            is_semi_hidden: false,
            keep_next: false,
            num_id: None,
            outline_level: None,
            alignment: None,
            space_before: None,
            space_after: None,
            indent: None,
            contextual_spacing: false,
            font_name: None,
            font_size: None,
            bold: false,
            italic: false,
            color: None,
            table_borders: None,
            cell_margin: None,
            first_row_bold: false,
        }
    }

    #[inline]
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn style_type(&self) -> StyleType {
        self.style_type
    }

    #[inline]
    pub fn num_id(&self) -> Option<u32> {
        self.num_id
    }

    pub fn set_default(&mut self, is_default: bool) -> &mut Self {
        self.is_default = is_default;
        self
    }

    pub fn set_based_on(&mut self, based_on: &str) -> &mut Self {
        self.based_on = Some(based_on.to_string());
        self
    }

    pub fn set_next(&mut self, next: &str) -> &mut Self {
        self.next = Some(next.to_string());
        self
    }

    pub fn set_priority(&mut self, priority: i32) -> &mut Self {
        self.priority = Some(priority);
        self
    }

    pub fn set_quick_style(&mut self, is_quick_style: bool) -> &mut Self {
        self.is_quick_style = is_quick_style;
        self
    }

    pub fn set_semi_hidden(&mut self, is_semi_hidden: bool) -> &mut Self {
        self.is_semi_hidden = is_semi_hidden;
        self
    }

    pub fn set_keep_next(&mut self, keep_next: bool) -> &mut Self {
        self.keep_next = keep_next;
        self
    }

    pub fn set_num_id(&mut self, num_id: u32) -> &mut Self {
        self.num_id = Some(num_id);
        self
    }

    pub fn set_outline_level(&mut self, level: u8) -> &mut Self {
        self.outline_level = Some(level);
        self
    }

    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn set_spacing(&mut self, before: Option<u32>, after: Option<u32>) -> &mut Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn set_hanging_indent(&mut self, left: u32, hanging: u32) -> &mut Self {
        self.indent = Some((left, hanging));
        self
    }

    pub fn set_contextual_spacing(&mut self, contextual: bool) -> &mut Self {
        self.contextual_spacing = contextual;
        self
    }

    pub fn set_font_name(&mut self, font_name: &str) -> &mut Self {
        self.font_name = Some(font_name.to_string());
        self
    }

    /// Font size in half-points.
    pub fn set_font_size(&mut self, half_points: u32) -> &mut Self {
        self.font_size = Some(half_points);
        self
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.italic = italic;
        self
    }

    pub fn set_color(&mut self, color: RgbColor) -> &mut Self {
        self.color = Some(color);
        self
    }

    pub fn set_table_borders(&mut self, size: u32, color: RgbColor) -> &mut Self {
        self.table_borders = Some((size, color));
        self
    }

    pub fn set_cell_margin(&mut self, twips: u32) -> &mut Self {
        self.cell_margin = Some(twips);
        self
    }

    pub fn set_first_row_bold(&mut self, bold: bool) -> &mut Self {
        self.first_row_bold = bold;
        self
    }

    fn has_para_props(&self) -> bool {
        self.keep_next
            || self.num_id.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.indent.is_some()
            || self.contextual_spacing
            || self.alignment.is_some()
            || self.outline_level.is_some()
    }

    fn has_run_props(&self) -> bool {
        self.font_name.is_some()
            || self.font_size.is_some()
            || self.bold
            || self.italic
            || self.color.is_some()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(
            xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.as_str(),
            escape(self.style_id.as_str())
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(xml, r#"<w:name w:val="{}"/>"#, escape(self.name.as_str()))?;
        if let Some(ref based_on) = self.based_on {
            write!(xml, r#"<w:basedOn w:val="{}"/>"#, escape(based_on.as_str()))?;
        }
        if let Some(ref next) = self.next {
            write!(xml, r#"<w:next w:val="{}"/>"#, escape(next.as_str()))?;
        }
        if let Some(priority) = self.priority {
            write!(xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_semi_hidden {
            xml.push_str("<w:semiHidden/><w:unhideWhenUsed/>");
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        if self.has_para_props() {
            self.write_para_props(xml)?;
        }
        if self.has_run_props() {
            self.write_run_props(xml)?;
        }
        if self.style_type == StyleType::Table {
            self.write_table_props(xml)?;
        }

        xml.push_str("</w:style>");
        Ok(())
    }

    /// Elements follow the CT_PPrBase sequence order.
    fn write_para_props(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:pPr>");
        if self.keep_next {
            xml.push_str("<w:keepNext/><w:keepLines/>");
        }
        if let Some(num_id) = self.num_id {
            write!(xml, r#"<w:numPr><w:numId w:val="{}"/></w:numPr>"#, num_id)?;
        }
        if self.space_before.is_some() || self.space_after.is_some() {
            xml.push_str("<w:spacing");
            if let Some(before) = self.space_before {
                write!(xml, r#" w:before="{}""#, before)?;
            }
            if let Some(after) = self.space_after {
                write!(xml, r#" w:after="{}""#, after)?;
            }
            xml.push_str("/>");
        }
        if let Some((left, hanging)) = self.indent {
            write!(xml, r#"<w:ind w:left="{}" w:hanging="{}"/>"#, left, hanging)?;
        }
        if self.contextual_spacing {
            xml.push_str("<w:contextualSpacing/>");
        }
        if let Some(alignment) = self.alignment {
            write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
        }
        if let Some(level) = self.outline_level {
            write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level)?;
        }
        xml.push_str("</w:pPr>");
        Ok(())
    }

    fn write_run_props(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:rPr>");
        if let Some(ref font_name) = self.font_name {
            write!(
                xml,
                r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                escape(font_name.as_str())
            )?;
        }
        if self.bold {
            xml.push_str("<w:b/><w:bCs/>");
        }
        if self.italic {
            xml.push_str("<w:i/><w:iCs/>");
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

    fn write_table_props(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tblPr>");
        xml.push_str(r#"<w:tblInd w:w="0" w:type="dxa"/>"#);
        if let Some((size, color)) = self.table_borders {
            let color = color.to_hex();
            xml.push_str("<w:tblBorders>");
            for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
                write!(
                    xml,
                    r#"<w:{} w:val="single" w:sz="{}" w:space="0" w:color="{}"/>"#,
                    edge, size, color
                )?;
            }
            xml.push_str("</w:tblBorders>");
        }
        if let Some(margin) = self.cell_margin {
            write!(
                xml,
                r#"<w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="{0}" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="{0}" w:type="dxa"/></w:tblCellMar>"#,
                margin
            )?;
        }
        xml.push_str("</w:tblPr>");

        if self.first_row_bold {
            xml.push_str(r#"<w:tblStylePr w:type="firstRow"><w:rPr><w:b/><w:bCs/></w:rPr></w:tblStylePr>"#);
        }
        Ok(())
    }

    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal", StyleType::Paragraph);
        style.set_default(true).set_quick_style(true);
        style
    }

    pub fn title() -> Self {
        let mut style = Self::new("Title", "Title", StyleType::Paragraph);
        style
            .set_based_on("Normal")
            .set_next("Normal")
            .set_priority(10)
            .set_quick_style(true)
            .set_spacing(None, Some(300))
            .set_contextual_spacing(true)
            .set_font_name("Calibri Light")
            .set_font_size(52)
            .set_color(TITLE_TEXT);
        style
    }

    /// `Heading {level}` for levels 1 through 9.
    pub fn heading(level: u8) -> Self {
        let mut style = Self::new(
            format!("Heading{}", level),
            format!("heading {}", level),
            StyleType::Paragraph,
        );
        let (size, color, before) = match level {
            1 => (28, HEADING_DARK, 480),
            2 => (26, ACCENT_1, 200),
            _ => (22, ACCENT_1, 200),
        };
        style
            .set_based_on("Normal")
            .set_next("Normal")
            .set_priority(9)
            .set_quick_style(true)
            .set_keep_next(true)
            .set_spacing(Some(before), Some(0))
            .set_outline_level(level.saturating_sub(1))
            .set_font_name("Calibri Light")
            .set_font_size(size)
            .set_bold(level <= 4)
            .set_italic(level >= 4)
            .set_color(color);
        style
    }

    pub fn list_bullet() -> Self {
        let mut style = Self::new("ListBullet", "List Bullet", StyleType::Paragraph);
        style
            .set_based_on("Normal")
            .set_priority(99)
            .set_num_id(BULLET_NUM_ID)
            .set_contextual_spacing(true);
        style
    }

    pub fn list_number() -> Self {
        let mut style = Self::new("ListNumber", "List Number", StyleType::Paragraph);
        style
            .set_based_on("Normal")
            .set_priority(99)
            .set_num_id(DECIMAL_NUM_ID)
            .set_contextual_spacing(true);
        style
    }

    pub fn default_paragraph_font() -> Self {
        let mut style = Self::new(
            "DefaultParagraphFont",
            "Default Paragraph Font",
            StyleType::Character,
        );
        style
            .set_default(true)
            .set_priority(1)
            .set_semi_hidden(true);
        style
    }

    pub fn table_normal() -> Self {
        let mut style = Self::new("TableNormal", "Normal Table", StyleType::Table);
        style
            .set_default(true)
            .set_priority(99)
            .set_semi_hidden(true)
            .set_cell_margin(108);
        style
    }

    pub fn light_grid_accent_1() -> Self {
        let mut style = Self::new("LightGrid-Accent1", "Light Grid Accent 1", StyleType::Table);
        style
            .set_based_on("TableNormal")
            .set_priority(62)
            .set_table_borders(8, ACCENT_1)
            .set_cell_margin(108)
            .set_first_row_bold(true);
        style
    }
}

/// Every style referenced through `style_id`, in the order written.
pub fn default_styles() -> Vec<MutableStyle> {
    let mut styles = vec![
        MutableStyle::normal(),
        MutableStyle::default_paragraph_font(),
        MutableStyle::table_normal(),
        MutableStyle::title(),
    ];
    styles.extend((1..=9).map(MutableStyle::heading));
    styles.push(MutableStyle::list_bullet());
    styles.push(MutableStyle::list_number());
    styles.push(MutableStyle::light_grid_accent_1());
    styles
}

/// Build `styles.xml`. Document defaults set the body font and size.
pub fn generate_styles_xml(styles: &[MutableStyle], font_name: &str, half_points: u32) -> Result<String> {
    let mut xml = String::with_capacity(8192);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:styles xmlns:w="{}">"#, namespace::WML_MAIN)?;

    let font_name = escape(font_name);
    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    write!(
        xml,
        r#"<w:rFonts w:ascii="{0}" w:eastAsia="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
        font_name
    )?;
    write!(xml, r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, half_points)?;
    xml.push_str(r#"<w:lang w:val="en-US" w:eastAsia="en-US" w:bidi="ar-SA"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str(r#"<w:pPrDefault><w:pPr><w:spacing w:after="200" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault>"#);
    xml.push_str("</w:docDefaults>");

    for style in styles {
        style.to_xml(&mut xml)?;
    }

    xml.push_str("</w:styles>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_id_lookup() {
        assert_eq!(style_id("Heading 2").unwrap(), "Heading2");
        assert_eq!(style_id("List Number").unwrap(), "ListNumber");
        assert!(style_id("Heading2").is_err());
    }

    #[test]
    fn test_every_mapped_style_is_defined() {
        let styles = default_styles();
        for (name, id) in BUILTIN_STYLE_IDS.entries() {
            assert!(
                styles.iter().any(|s| s.style_id() == *id),
                "style '{}' ({}) has no definition",
                name,
                id
            );
        }
    }

    #[test]
    fn test_list_styles_carry_numbering() {
        assert_eq!(MutableStyle::list_bullet().num_id(), Some(BULLET_NUM_ID));
        assert_eq!(MutableStyle::list_number().num_id(), Some(DECIMAL_NUM_ID));
    }

    #[test]
    fn test_heading_xml() {
        let mut xml = String::new();
        MutableStyle::heading(1).to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<w:style w:type="paragraph" w:styleId="Heading1">"#));
        assert!(xml.contains(r#"<w:outlineLvl w:val="0"/>"#));
        assert!(xml.contains("<w:b/>"));
    }

    #[test]
    fn test_styles_document() {
        let xml = generate_styles_xml(&default_styles(), "Calibri", 22).unwrap();
        assert!(xml.contains(r#"<w:rFonts w:ascii="Calibri""#));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
        assert!(xml.contains(r#"w:styleId="LightGrid-Accent1""#));
        assert!(xml.contains(r#"<w:tblStylePr w:type="firstRow">"#));
        assert!(xml.ends_with("</w:styles>"));
    }
}
