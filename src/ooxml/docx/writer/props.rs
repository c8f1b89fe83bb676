/// Package-level metadata parts: core and extended properties, plus the
/// document settings part.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Metadata written to `docProps/core.xml`.
///
/// No creation or modification dates are recorded, so saving the same
/// document twice yields identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

impl CoreProperties {
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}">"#,
            namespace::OPC_CORE_PROPERTIES,
            namespace::DC
        )?;

        for (tag, value) in [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
        ] {
            if let Some(value) = value {
                write!(xml, "<{0}>{1}</{0}>", tag, escape(value.as_str()))?;
            }
        }

        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }
}

/// Extended properties (`docProps/app.xml`).
pub(crate) fn app_properties_xml(application: &str) -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<Properties xmlns="{}"><Application>{}</Application><DocSecurity>0</DocSecurity></Properties>"#,
        namespace::OFC_EXTENDED_PROPERTIES,
        escape(application)
    )?;
    Ok(xml)
}

/// Document settings (`word/settings.xml`).
pub(crate) fn settings_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:settings xmlns:w="{}">"#, namespace::WML_MAIN)?;
    xml.push_str(r#"<w:defaultTabStop w:val="720"/>"#);
    xml.push_str(r#"<w:characterSpacingControl w:val="doNotCompress"/>"#);
    xml.push_str(r#"<w:compat><w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/></w:compat>"#);
    xml.push_str("</w:settings>");
    Ok(xml)
}
