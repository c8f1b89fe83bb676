/// In-memory OPC package assembled for writing.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;

/// An OPC package: package-level relationships plus an ordered list of parts.
///
/// Parts are written to the container in the order they were added.
#[derive(Debug)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI),
            parts: Vec::new(),
        }
    }

    /// Add a part. Partnames must be unique within a package.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if self.part(part.partname()).is_some() {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Relate the package itself to one of its parts.
    pub fn relate_to(&mut self, reltype: &str, target: &PackURI) -> String {
        self.rels.add(reltype, target).to_string()
    }

    pub fn part(&self, partname: &PackURI) -> Option<&Part> {
        self.parts.iter().find(|p| p.partname() == partname)
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}
