//! Shared formatting types for DOCX writing.

/// US Letter page size and the uniform one-inch margin, in twentieths of a point.
pub(crate) const PAGE_WIDTH_DXA: u32 = 12240;
pub(crate) const PAGE_HEIGHT_DXA: u32 = 15840;
pub(crate) const PAGE_MARGIN_DXA: u32 = 1440;

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Center,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
        }
    }
}

/// An sRGB color as written in `w:color/@w:val`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    /// Six-digit uppercase hex form, e.g. `003366`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Style types in `styles.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleType {
    Paragraph,
    Character,
    Table,
}

impl StyleType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(RgbColor(0, 51, 102).to_hex(), "003366");
        assert_eq!(RgbColor(255, 0, 10).to_hex(), "FF000A");
    }
}
