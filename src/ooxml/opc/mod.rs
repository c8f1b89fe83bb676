/// Open Packaging Conventions (OPC) writer.
///
/// This module provides the packaging layer of Office Open XML documents:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging with reproducible output
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
