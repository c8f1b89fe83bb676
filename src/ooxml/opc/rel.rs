/// Relationship collections for package and part relationships.
///
/// Relationships connect a source (the package or a part) to a target part.
/// They are serialized to the `_rels/*.rels` parts of the package.
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::escape::escape;

/// A single relationship from a source to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    r_id: String,
    /// Relationship type URI
    reltype: String,
    /// Target reference relative to the source's base URI
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships sharing one source.
///
/// IDs are handed out as `rId1`, `rId2`, ... in insertion order, so the
/// serialized form is stable from run to run.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI of the source, used to compute relative targets
    base_uri: String,
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            rels: Vec::new(),
        }
    }

    /// Add a relationship to `target` and return its ID.
    pub fn add(&mut self, reltype: &str, target: &PackURI) -> &str {
        let r_id = format!("rId{}", self.rels.len() + 1);
        let target_ref = target.relative_ref(&self.base_uri);
        self.rels
            .push(Relationship::new(r_id, reltype.to_string(), target_ref));
        self.rels[self.rels.len() - 1].r_id()
    }

    pub fn len(&self) -> usize {
        self.rels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML form stored in a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape(rel.r_id()),
                escape(rel.reltype()),
                escape(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}
