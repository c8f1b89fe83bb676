//! archdoc CLI - writes the architecture guide to a .docx file

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use archdoc::config::{DEFAULT_CREATOR, DEFAULT_OUTPUT, DEFAULT_TITLE, GuideConfig, OUTPUT_ENV};

#[derive(Parser)]
#[command(name = "archdoc")]
#[command(version)]
#[command(about = "Generate the Spring Boot e-commerce architecture guide as a Word document", long_about = None)]
struct Cli {
    /// Output file (replaced if it exists)
    #[arg(short, long, value_name = "FILE", env = OUTPUT_ENV, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Document title stored in the file metadata
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Author stored in the file metadata
    #[arg(long, default_value = DEFAULT_CREATOR)]
    creator: String,
}

impl From<Cli> for GuideConfig {
    fn from(cli: Cli) -> Self {
        Self {
            output: cli.output,
            title: cli.title,
            creator: cli.creator,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = GuideConfig::from(Cli::parse());
    log::debug!("resolved configuration: {:?}", config);

    archdoc::guide::write_guide(&config)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    report(&mut std::io::stdout().lock(), &config.output)?;
    Ok(())
}

/// Confirmation printed after a successful save.
fn report(out: &mut impl Write, output: &Path) -> std::io::Result<()> {
    writeln!(out, "Word document created successfully!")?;
    writeln!(out, "Location: {}", output.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn config_from(args: &[&str]) -> GuideConfig {
        Cli::try_parse_from(args.iter().copied()).unwrap().into()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = config_from(&["archdoc", "-o", "x.docx", "--creator", "c"]);
        assert_eq!(config.output, PathBuf::from("x.docx"));
        assert_eq!(config.creator, "c");
        assert_eq!(config.title, DEFAULT_TITLE);

        let config = config_from(&["archdoc", "--output", "y.docx", "--title", "Guide"]);
        assert_eq!(config.output, PathBuf::from("y.docx"));
        assert_eq!(config.title, "Guide");
    }

    #[test]
    fn test_output_falls_back_to_env_then_default() {
        let cmd = Cli::command();
        let output = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "output")
            .unwrap();
        assert_eq!(output.get_env(), Some(std::ffi::OsStr::new(OUTPUT_ENV)));

        if std::env::var_os(OUTPUT_ENV).is_none() {
            assert_eq!(config_from(&["archdoc"]), GuideConfig::default());
        }
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["archdoc", "--format", "pdf"]).is_err());
    }

    #[test]
    fn test_report_lines() {
        let mut out = Vec::new();
        report(&mut out, Path::new("out/guide.docx")).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Word document created successfully!\nLocation: out/guide.docx\n"
        );
    }
}
