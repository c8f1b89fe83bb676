//! Mutable document writer components for DOCX.
//!
//! This module provides the writer API for building Word documents from
//! scratch: a document body of paragraphs and tables, run formatting, the
//! built-in style sheet and list numbering, and package assembly.

pub mod doc;
pub mod numbering;
pub mod paragraph;
pub mod props;
pub mod run;
pub mod style;
pub mod table;

// Re-export main document type
pub use doc::{BodyElement, MutableDocument};

// Re-export paragraph types
pub use paragraph::MutableParagraph;

// Re-export run types
pub use run::{MutableRun, RunContent, RunProperties};

// Re-export table types
pub use table::{MutableCell, MutableRow, MutableTable};

pub use props::CoreProperties;
pub use style::MutableStyle;
