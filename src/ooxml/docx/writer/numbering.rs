/// Numbering definitions (`word/numbering.xml`) for the list styles.
///
/// List paragraphs never carry their own `numPr`; they pick up numbering
/// through the `List Bullet` and `List Number` styles. All paragraphs sharing
/// one of those styles therefore belong to one list instance.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Numbering instance used by the `List Bullet` style.
pub const BULLET_NUM_ID: u32 = 1;
/// Numbering instance used by the `List Number` style.
pub const DECIMAL_NUM_ID: u32 = 2;

/// Kind of list marker an abstract numbering produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Decimal,
}

impl ListKind {
    fn num_fmt(self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Decimal => "decimal",
        }
    }

    fn style_link(self) -> &'static str {
        match self {
            Self::Bullet => "ListBullet",
            Self::Decimal => "ListNumber",
        }
    }
}

/// One abstract numbering definition paired with the instance that uses it.
#[derive(Debug, Clone, Copy)]
pub struct ListDefinition {
    pub num_id: u32,
    pub kind: ListKind,
}

pub fn default_lists() -> [ListDefinition; 2] {
    [
        ListDefinition {
            num_id: BULLET_NUM_ID,
            kind: ListKind::Bullet,
        },
        ListDefinition {
            num_id: DECIMAL_NUM_ID,
            kind: ListKind::Decimal,
        },
    ]
}

/// Build `numbering.xml`. Abstract IDs are `num_id - 1`.
pub fn generate_numbering_xml(lists: &[ListDefinition]) -> Result<String> {
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:numbering xmlns:w="{}">"#, namespace::WML_MAIN)?;

    // All abstractNum elements must precede the num elements
    for list in lists {
        write!(
            xml,
            r#"<w:abstractNum w:abstractNumId="{}"><w:multiLevelType w:val="singleLevel"/>"#,
            list.num_id - 1
        )?;
        write!(
            xml,
            r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="{}"/><w:pStyle w:val="{}"/>"#,
            list.kind.num_fmt(),
            list.kind.style_link()
        )?;
        match list.kind {
            ListKind::Bullet => write!(xml, r#"<w:lvlText w:val="{}"/>"#, '\u{F0B7}')?,
            ListKind::Decimal => xml.push_str(r#"<w:lvlText w:val="%1."/>"#),
        }
        xml.push_str(r#"<w:lvlJc w:val="left"/>"#);
        xml.push_str(r#"<w:pPr><w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs><w:ind w:left="360" w:hanging="360"/></w:pPr>"#);
        if list.kind == ListKind::Bullet {
            xml.push_str(r#"<w:rPr><w:rFonts w:ascii="Symbol" w:hAnsi="Symbol" w:hint="default"/></w:rPr>"#);
        }
        xml.push_str("</w:lvl></w:abstractNum>");
    }

    for list in lists {
        write!(
            xml,
            r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
            list.num_id,
            list.num_id - 1
        )?;
    }

    xml.push_str("</w:numbering>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_xml() {
        let xml = generate_numbering_xml(&default_lists()).unwrap();

        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(xml.contains(r#"<w:lvlText w:val="%1."/>"#));
        assert!(xml.contains(r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#));
        assert!(xml.contains(r#"<w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>"#));

        let last_abstract = xml.rfind("<w:abstractNum ").unwrap();
        let first_num = xml.find("<w:num ").unwrap();
        assert!(last_abstract < first_num);
    }
}
