//! Assembly of the architecture guide.
//!
//! The guide is a fixed sequence of [`Section`]s, each a level-1 heading
//! followed by content [`Block`]s. [`assemble`] renders the front matter and
//! every section into a [`MutableDocument`], separating consecutive sections
//! with a page break.

pub mod content;

use crate::config::GuideConfig;
use crate::ooxml::docx::{MutableDocument, ParagraphAlignment, RgbColor};
use crate::ooxml::error::Result;

const BULLET: &str = "List Bullet";
const NUMBER: &str = "List Number";
const TABLE_STYLE: &str = "Light Grid Accent 1";
const MONO_FONT: &str = "Courier New";

const TITLE_COLOR: RgbColor = RgbColor(0, 51, 102);
const SUBTITLE_COLOR: RgbColor = RgbColor(51, 102, 153);

/// A bold term and the text that goes with it.
pub type Pair = (&'static str, &'static str);

/// An annotation shown as a heading, a code sample and an explanation.
#[derive(Debug, Clone, Copy)]
pub struct Annotation {
    pub name: &'static str,
    pub code: &'static str,
    pub explanation: &'static str,
}

/// One unit of section content.
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Level 2 or 3 heading.
    Heading(u8, &'static str),
    Text(&'static str),
    /// Empty spacer paragraph.
    Blank,
    /// Paragraph with a single bold run.
    Bold(&'static str),
    /// Bold lead run followed by plain text in the same paragraph.
    Lead(&'static str, &'static str),
    Bullets(&'static [&'static str]),
    Numbered(&'static [&'static str]),
    /// Monospace paragraph.
    Code(&'static str),
    /// Monospace bullet item.
    CodeBullet(&'static str),
    /// Bold term paragraph, then its description as a bullet.
    Terms(&'static [Pair]),
    /// `N. COMPONENT: ` in bold, then the action.
    Flow(&'static [Pair]),
    Annotations(&'static [Annotation]),
    /// Level 3 heading per name, then a plain explanation.
    Definitions(&'static [Pair]),
    /// `Step N: title` in bold 12pt, then the details as a bullet.
    Milestones(&'static [Pair]),
    /// `term = meaning` with the term in bold.
    Recap(&'static [Pair]),
    /// Two-column table, header row first.
    Table(&'static [[&'static str; 2]]),
    /// Bold 12pt colored closing line.
    Callout(&'static str, RgbColor),
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

/// Build the complete guide in memory.
pub fn assemble(config: &GuideConfig) -> Result<MutableDocument> {
    let mut doc = MutableDocument::new();
    doc.set_default_font("Calibri", 11);

    let core = doc.core_properties_mut();
    core.title = Some(config.title.clone());
    core.subject = Some(content::SUBTITLE.to_string());
    core.creator = Some(config.creator.clone());

    render_front_matter(&mut doc);

    for (i, section) in content::SECTIONS.iter().enumerate() {
        if i > 0 {
            doc.add_page_break();
        }
        log::debug!("rendering section {:?}", section.title);
        render_section(&mut doc, section)?;
    }

    Ok(doc)
}

/// Assemble the guide and save it to `config.output`.
pub fn write_guide(config: &GuideConfig) -> Result<()> {
    let doc = assemble(config)?;
    doc.save(&config.output)
}

fn render_front_matter(doc: &mut MutableDocument) {
    doc.add_paragraph()
        .set_alignment(ParagraphAlignment::Center)
        .add_run_with_text(content::TITLE)
        .font_size_pt(28)
        .bold(true)
        .color(TITLE_COLOR);

    doc.add_paragraph()
        .set_alignment(ParagraphAlignment::Center)
        .add_run_with_text(content::SUBTITLE)
        .font_size_pt(18)
        .italic(true)
        .color(SUBTITLE_COLOR);

    doc.add_paragraph();
}

fn render_section(doc: &mut MutableDocument, section: &Section) -> Result<()> {
    doc.add_heading(section.title, 1)?;
    for block in section.blocks {
        render_block(doc, block)?;
    }
    Ok(())
}

fn render_block(doc: &mut MutableDocument, block: &Block) -> Result<()> {
    match *block {
        Block::Heading(level, text) => {
            doc.add_heading(text, level)?;
        },
        Block::Text(text) => {
            doc.add_paragraph_with_text(text);
        },
        Block::Blank => {
            doc.add_paragraph();
        },
        Block::Bold(text) => {
            doc.add_paragraph().add_run_with_text(text).bold(true);
        },
        Block::Lead(lead, rest) => {
            let para = doc.add_paragraph();
            para.add_run_with_text(lead).bold(true);
            para.add_run_with_text(rest);
        },
        Block::Bullets(items) => {
            for item in items {
                doc.add_styled_paragraph(item, BULLET)?;
            }
        },
        Block::Numbered(items) => {
            for item in items {
                doc.add_styled_paragraph(item, NUMBER)?;
            }
        },
        Block::Code(code) => {
            doc.add_paragraph().add_run_with_text(code).font_name(MONO_FONT);
        },
        Block::CodeBullet(code) => code_bullet(doc, code)?,
        Block::Terms(terms) => {
            for (term, description) in terms {
                doc.add_paragraph().add_run_with_text(term).bold(true);
                doc.add_styled_paragraph(description, BULLET)?;
            }
        },
        Block::Flow(steps) => {
            for (n, (component, action)) in steps.iter().enumerate() {
                let para = doc.add_paragraph();
                para.add_run_with_text(&format!("{}. {}: ", n + 1, component))
                    .bold(true);
                para.add_run_with_text(action);
            }
        },
        Block::Annotations(annotations) => {
            for annotation in annotations {
                doc.add_heading(annotation.name, 3)?;
                doc.add_paragraph().add_run_with_text("Code:").bold(true);
                code_bullet(doc, annotation.code)?;
                doc.add_paragraph()
                    .add_run_with_text("Explanation:")
                    .bold(true);
                doc.add_styled_paragraph(annotation.explanation, BULLET)?;
            }
        },
        Block::Definitions(entries) => {
            for (name, explanation) in entries {
                doc.add_heading(name, 3)?;
                doc.add_paragraph_with_text(explanation);
            }
        },
        Block::Milestones(steps) => {
            for (n, (title, details)) in steps.iter().enumerate() {
                doc.add_paragraph()
                    .add_run_with_text(&format!("Step {}: {}", n + 1, title))
                    .bold(true)
                    .font_size_pt(12);
                doc.add_styled_paragraph(details, BULLET)?;
            }
        },
        Block::Recap(concepts) => {
            for (term, meaning) in concepts {
                let para = doc.add_paragraph();
                para.add_run_with_text(term).bold(true);
                para.add_run_with_text(&format!(" = {}", meaning));
            }
        },
        Block::Table(rows) => {
            let table = doc.add_table(rows.len(), 2);
            table.set_style(TABLE_STYLE)?;
            for (r, row) in rows.iter().enumerate() {
                for (c, text) in row.iter().enumerate() {
                    table.set_cell_text(r, c, text)?;
                }
            }
        },
        Block::Callout(text, color) => {
            doc.add_paragraph()
                .add_run_with_text(text)
                .bold(true)
                .font_size_pt(12)
                .color(color);
        },
    }
    Ok(())
}

fn code_bullet(doc: &mut MutableDocument, code: &str) -> Result<()> {
    doc.add_paragraph()
        .set_style(BULLET)?
        .add_run_with_text(code)
        .font_name(MONO_FONT);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::writer::BodyElement;

    fn guide() -> MutableDocument {
        assemble(&GuideConfig::default()).unwrap()
    }

    #[test]
    fn test_toc_matches_numbered_sections() {
        let numbered: Vec<&str> = content::SECTIONS[1..9].iter().map(|s| s.title).collect();
        assert_eq!(numbered, content::TOC_ENTRIES);
    }

    #[test]
    fn test_one_page_break_between_sections() {
        let doc = guide();
        assert_eq!(content::SECTIONS.len(), 11);
        assert_eq!(doc.page_break_count(), content::SECTIONS.len() - 1);
    }

    #[test]
    fn test_front_matter() {
        let doc = guide();
        let paras: Vec<_> = doc.paragraphs().take(3).collect();

        assert_eq!(paras[0].text(), "Spring Boot E-Commerce Backend");
        assert_eq!(paras[0].alignment(), Some(ParagraphAlignment::Center));
        let title_run = paras[0].runs().next().unwrap().properties();
        assert_eq!(title_run.font_size, Some(56));
        assert_eq!(title_run.bold, Some(true));
        assert_eq!(title_run.color, Some(TITLE_COLOR));

        assert_eq!(paras[1].text(), "Complete Architecture Guide");
        assert_eq!(paras[1].runs().next().unwrap().properties().italic, Some(true));
        assert!(paras[2].text().is_empty());
    }

    #[test]
    fn test_level_one_headings_in_order() {
        let doc = guide();
        let titles: Vec<String> = doc
            .headings()
            .into_iter()
            .filter(|(level, _)| *level == 1)
            .map(|(_, text)| text)
            .collect();
        let expected: Vec<&str> = content::SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_single_endpoint_table() {
        let doc = guide();
        assert_eq!(doc.table_count(), 1);

        let table = doc.tables().next().unwrap();
        assert_eq!((table.row_count(), table.col_count()), (5, 2));
        assert_eq!(table.style(), Some("LightGrid-Accent1"));
        assert_eq!(table.cell_text(0, 0).as_deref(), Some("HTTP Method & Path"));
        assert_eq!(
            table.cell_text(4, 0).as_deref(),
            Some("GET /api/product/{productId}/image")
        );
    }

    #[test]
    fn test_flow_steps_are_numbered_from_one() {
        let doc = guide();
        let steps: Vec<String> = doc
            .paragraphs()
            .map(|p| p.text())
            .filter(|t| t.ends_with(": embedded web server receives request"))
            .collect();
        assert_eq!(steps, ["2. TOMCAT SERVLET: embedded web server receives request"]);
    }

    #[test]
    fn test_code_font_only_on_code_runs() {
        let doc = guide();
        let mono: Vec<_> = doc
            .paragraphs()
            .flat_map(|p| p.runs())
            .filter(|r| r.properties().font_name.as_deref() == Some(MONO_FONT))
            .collect();

        // 7 annotation samples, 3 in the ORM section, 4 endpoint requests
        assert_eq!(mono.len(), 14);
        assert!(mono.iter().any(|r| r.text().starts_with("CREATE TABLE product (")));
    }

    #[test]
    fn test_ends_with_callout() {
        let doc = guide();
        let Some(BodyElement::Paragraph(last)) = doc.elements().last() else {
            panic!("guide should end with a paragraph");
        };
        assert_eq!(last.text(), "Your project is now ready for these enhancements!");
        assert_eq!(
            last.runs().next().unwrap().properties().color,
            Some(RgbColor(0, 102, 0))
        );
    }

    #[test]
    fn test_metadata_from_config() {
        let mut config = GuideConfig::default();
        config.creator = "docs team".to_string();
        let doc = assemble(&config).unwrap();

        let core = doc.core_properties();
        assert_eq!(core.title.as_deref(), Some("Spring Boot E-Commerce Backend"));
        assert_eq!(core.creator.as_deref(), Some("docs team"));
    }
}
