/// Table types and implementation for DOCX documents.
use crate::ooxml::docx::format::{PAGE_MARGIN_DXA, PAGE_WIDTH_DXA};
use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

use super::paragraph::MutableParagraph;
use super::style;

/// A mutable table with a grid fixed at creation.
#[derive(Debug, Clone)]
pub struct MutableTable {
    pub(crate) rows: Vec<MutableRow>,
    cols: usize,
    /// Table style ID
    pub(crate) style: Option<&'static str>,
}

impl MutableTable {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| MutableRow::new(cols)).collect(),
            cols,
            style: None,
        }
    }

    /// Set the table style by display name, e.g. "Light Grid Accent 1".
    pub fn set_style(&mut self, name: &str) -> Result<&mut Self> {
        self.style = Some(style::style_id(name)?);
        Ok(self)
    }

    pub fn style(&self) -> Option<&'static str> {
        self.style
    }

    /// Get a cell by row and column index.
    pub fn cell(&mut self, row: usize, col: usize) -> Option<&mut MutableCell> {
        self.rows.get_mut(row)?.cells.get_mut(col)
    }

    /// Replace the text of the cell at `(row, col)`.
    pub fn set_cell_text(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        let (rows, cols) = (self.row_count(), self.col_count());
        let cell = self
            .cell(row, col)
            .ok_or(OoxmlError::CellOutOfRange {
                row,
                col,
                rows,
                cols,
            })?;
        cell.set_text(text);
        Ok(())
    }

    /// Text of the cell at `(row, col)`.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        let cell = self.rows.get(row)?.cells.get(col)?;
        Some(cell.text())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tbl>");

        xml.push_str("<w:tblPr>");
        if let Some(style) = self.style {
            write!(xml, r#"<w:tblStyle w:val="{}"/>"#, escape(style))?;
        }
        xml.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);
        xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
        xml.push_str("</w:tblPr>");

        // Columns share the text width evenly
        xml.push_str("<w:tblGrid>");
        let col_width = if self.cols == 0 { 0 } else { TEXT_WIDTH_DXA / self.cols };
        for _ in 0..self.cols {
            write!(xml, r#"<w:gridCol w:w="{}"/>"#, col_width)?;
        }
        xml.push_str("</w:tblGrid>");

        for row in &self.rows {
            row.to_xml(xml, col_width)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }
}

/// Page width minus margins, in twentieths of a point.
const TEXT_WIDTH_DXA: usize = (PAGE_WIDTH_DXA - 2 * PAGE_MARGIN_DXA) as usize;

/// A mutable table row.
#[derive(Debug, Clone)]
pub struct MutableRow {
    pub(crate) cells: Vec<MutableCell>,
}

impl MutableRow {
    pub(crate) fn new(cols: usize) -> Self {
        Self {
            cells: (0..cols).map(|_| MutableCell::new()).collect(),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn to_xml(&self, xml: &mut String, col_width: usize) -> Result<()> {
        xml.push_str("<w:tr>");
        for cell in &self.cells {
            cell.to_xml(xml, col_width)?;
        }
        xml.push_str("</w:tr>");
        Ok(())
    }
}

/// A mutable table cell.
///
/// A cell always holds at least one paragraph, as Word requires.
#[derive(Debug, Clone)]
pub struct MutableCell {
    pub(crate) paragraphs: Vec<MutableParagraph>,
}

impl MutableCell {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: vec![MutableParagraph::new()],
        }
    }

    /// Replace the cell content with a single paragraph of text.
    pub fn set_text(&mut self, text: &str) {
        let mut para = MutableParagraph::new();
        para.add_run_with_text(text);
        self.paragraphs = vec![para];
    }

    /// Paragraph texts joined with line feeds.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(MutableParagraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_xml(&self, xml: &mut String, width: usize) -> Result<()> {
        xml.push_str("<w:tc>");
        write!(xml, r#"<w:tcPr><w:tcW w:w="{}" w:type="dxa"/></w:tcPr>"#, width)?;
        for para in &self.paragraphs {
            para.to_xml(xml)?;
        }
        xml.push_str("</w:tc>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_fixed() {
        let table = MutableTable::new(5, 2);
        assert_eq!(table.row_count(), 5);
        assert_eq!(table.col_count(), 2);
        assert!(table.rows.iter().all(|r| r.cell_count() == 2));
    }

    #[test]
    fn test_set_cell_text() {
        let mut table = MutableTable::new(2, 2);
        table.set_cell_text(0, 0, "HTTP Method & Path").unwrap();
        table.set_cell_text(1, 1, "Get all products").unwrap();

        assert_eq!(table.cell_text(0, 0).as_deref(), Some("HTTP Method & Path"));
        assert_eq!(table.cell_text(0, 1).as_deref(), Some(""));
        assert_eq!(table.cell_text(1, 1).as_deref(), Some("Get all products"));
    }

    #[test]
    fn test_out_of_range_cell() {
        let mut table = MutableTable::new(5, 2);
        let err = table.set_cell_text(5, 0, "nope").unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::CellOutOfRange { row: 5, col: 0, rows: 5, cols: 2 }
        ));
    }

    #[test]
    fn test_unfilled_cells_still_hold_a_paragraph() {
        let table = MutableTable::new(1, 2);
        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();
        assert_eq!(xml.matches("<w:tc>").count(), 2);
        assert_eq!(xml.matches("<w:p>").count(), 2);
    }

    #[test]
    fn test_table_style() {
        let mut table = MutableTable::new(1, 1);
        table.set_style("Light Grid Accent 1").unwrap();
        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<w:tblStyle w:val="LightGrid-Accent1"/>"#));
    }
}
