//! Word (.docx) document generation.
//!
//! Documents are built in memory with [`MutableDocument`] and serialized
//! into an Office Open XML package.
//!
//! # Example
//!
//! ```rust,no_run
//! use archdoc::ooxml::docx::{MutableDocument, ParagraphAlignment, RgbColor};
//!
//! let mut doc = MutableDocument::new();
//! doc.add_heading("Overview", 1)?;
//! doc.add_paragraph()
//!     .set_alignment(ParagraphAlignment::Center)
//!     .add_run_with_text("Centered")
//!     .bold(true)
//!     .color(RgbColor(0, 51, 102));
//! doc.add_styled_paragraph("First point", "List Bullet")?;
//! doc.save("overview.docx")?;
//! # Ok::<(), archdoc::ooxml::error::OoxmlError>(())
//! ```
pub mod format;
pub mod writer;

pub use format::{ParagraphAlignment, RgbColor, StyleType};
pub use writer::{
    CoreProperties, MutableCell, MutableDocument, MutableParagraph, MutableRun, MutableTable,
};
