//! Output location and document metadata for a guide run.

use std::path::PathBuf;

/// File written when no output path is configured, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "Spring_Boot_Architecture_Guide.docx";

/// Environment variable consulted when `--output` is not given.
pub const OUTPUT_ENV: &str = "ARCHDOC_OUTPUT";

/// Document title recorded in the package metadata.
pub const DEFAULT_TITLE: &str = "Spring Boot E-Commerce Backend";

pub const DEFAULT_CREATOR: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    /// Target `.docx` path. An existing file is replaced.
    pub output: PathBuf,
    pub title: String,
    pub creator: String,
}

impl GuideConfig {
    /// Default metadata with the given output path.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            creator: DEFAULT_CREATOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_is_relative() {
        let config = GuideConfig::default();
        assert_eq!(config.output, PathBuf::from("Spring_Boot_Architecture_Guide.docx"));
        assert!(config.output.is_relative());
    }

    #[test]
    fn test_new_keeps_default_metadata() {
        let config = GuideConfig::new("/tmp/guide.docx");
        assert_eq!(config.output, PathBuf::from("/tmp/guide.docx"));
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.creator, "archdoc");
    }
}
