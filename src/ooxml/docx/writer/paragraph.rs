/// Paragraph types and implementation for DOCX documents.
use crate::ooxml::error::Result;
use quick_xml::escape::escape;
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

pub use crate::ooxml::docx::format::ParagraphAlignment;

use super::run::MutableRun;
use super::style;

/// A mutable paragraph in a document.
///
/// Most paragraphs carry one or two runs, so they are kept inline.
#[derive(Debug, Clone)]
pub struct MutableParagraph {
    pub(crate) runs: SmallVec<[MutableRun; 2]>,
    /// Paragraph style ID (not the display name)
    pub(crate) style: Option<&'static str>,
    pub(crate) alignment: Option<ParagraphAlignment>,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self {
            runs: SmallVec::new(),
            style: None,
            alignment: None,
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        self.runs.push(MutableRun::new());
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Set the paragraph style by display name, e.g. "List Bullet".
    pub fn set_style(&mut self, name: &str) -> Result<&mut Self> {
        self.style = Some(style::style_id(name)?);
        Ok(self)
    }

    /// Style ID applied to this paragraph, if any.
    pub fn style(&self) -> Option<&'static str> {
        self.style
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn alignment(&self) -> Option<ParagraphAlignment> {
        self.alignment
    }

    pub fn runs(&self) -> impl Iterator<Item = &MutableRun> {
        self.runs.iter()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(MutableRun::text).collect()
    }

    /// True for the paragraphs produced by `add_page_break`.
    pub fn is_page_break(&self) -> bool {
        !self.runs.is_empty() && self.runs.iter().all(MutableRun::is_page_break)
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        if self.style.is_some() || self.alignment.is_some() {
            xml.push_str("<w:pPr>");
            if let Some(style) = self.style {
                write!(xml, r#"<w:pStyle w:val="{}"/>"#, escape(style))?;
            }
            if let Some(alignment) = self.alignment {
                write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
            }
            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}
