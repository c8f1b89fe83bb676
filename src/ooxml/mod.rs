//! Office Open XML (OOXML) writing.
//!
//! Two layers:
//!
//! 1. **OPC Layer** (`opc`): package structure (parts, relationships,
//!    content types) and ZIP serialization
//! 2. **WordprocessingML** (`docx`): the document model and its XML parts
pub mod docx;
pub mod error;
pub mod opc;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use error::{OoxmlError, Result};
