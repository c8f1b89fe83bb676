//! archdoc - generates the Spring Boot e-commerce backend architecture guide
//! as a Word (.docx) document.
//!
//! The crate has two halves:
//!
//! - [`ooxml`]: a small Office Open XML writer. [`ooxml::docx::MutableDocument`]
//!   collects paragraphs, runs, tables and page breaks and serializes them into
//!   an OPC package with its styles, numbering and metadata parts.
//! - [`guide`]: the guide's content as a static table of sections and blocks,
//!   and the renderer that turns it into a document.
//!
//! # Example
//!
//! ```no_run
//! use archdoc::config::GuideConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GuideConfig::new("guide.docx");
//! archdoc::guide::write_guide(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! Output is deterministic: the same configuration always produces the same
//! bytes.

pub mod config;
pub mod guide;
pub mod ooxml;
