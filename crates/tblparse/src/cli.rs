//! Command-line arguments and command execution.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use tblparse_core::TblparseConfig;
use tblparse_session::{SheetFile, UploadOutcome, Workspace};

use crate::render::render_text;
use crate::schema::snapshot_schema;

/// Output format for detected blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Titles, row ranges and body rows as plain text
    #[default]
    Text,
    /// The full snapshot as JSON
    Json,
}

/// Detect logical table blocks inside spreadsheet sheets.
#[derive(Debug, Parser)]
#[command(name = "tblparse", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect table blocks in a JSON sheet dump
    Detect {
        /// Sheet dump (address-keyed cell map or workbook with `SheetNames`/`Sheets`)
        file: PathBuf,

        /// YAML configuration file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the JSON schema of the snapshot output
    Schema,
}

impl Cli {
    /// Load the configuration named on the command line, or defaults.
    pub fn load_config(&self) -> Result<TblparseConfig> {
        match &self.command {
            Command::Detect {
                config: Some(path), ..
            } => TblparseConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display())),
            _ => Ok(TblparseConfig::default()),
        }
    }

    /// Run the selected command, writing results to `out`.
    pub async fn run<W: Write>(&self, config: &TblparseConfig, out: &mut W) -> Result<()> {
        match &self.command {
            Command::Detect { file, format, .. } => detect(file, config, *format, out).await,
            Command::Schema => {
                let schema = snapshot_schema()?;
                writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
                Ok(())
            }
        }
    }
}

async fn detect<W: Write>(
    path: &Path,
    config: &TblparseConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let file = SheetFile::open(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let workspace = Workspace::from_config(config);
    let snapshot = match workspace
        .upload(Some(file))
        .await
        .with_context(|| format!("failed to parse {}", path.display()))?
    {
        UploadOutcome::Published(snapshot) => snapshot,
        _ => workspace.current(),
    };

    info!(
        file = %path.display(),
        blocks = snapshot.block_count(),
        "detection finished"
    );

    match format {
        OutputFormat::Text => write!(out, "{}", render_text(&snapshot))?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(snapshot.as_ref())?)?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detect_defaults() {
        let cli = Cli::try_parse_from(["tblparse", "detect", "report.json"]).unwrap();
        match cli.command {
            Command::Detect {
                file,
                config,
                format,
            } => {
                assert_eq!(file, PathBuf::from("report.json"));
                assert!(config.is_none());
                assert_eq!(format, OutputFormat::Text);
            }
            Command::Schema => panic!("expected detect"),
        }
    }

    #[test]
    fn test_parse_detect_with_options() {
        let cli = Cli::try_parse_from([
            "tblparse",
            "detect",
            "report.json",
            "--config",
            "tblparse.yaml",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Detect {
                config: Some(_),
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result =
            Cli::try_parse_from(["tblparse", "detect", "report.json", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_defaults_without_flag() {
        let cli = Cli::try_parse_from(["tblparse", "schema"]).unwrap();
        assert_eq!(cli.load_config().unwrap(), TblparseConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let cli = Cli::try_parse_from([
            "tblparse",
            "detect",
            "report.json",
            "--config",
            "/nonexistent/tblparse.yaml",
        ])
        .unwrap();
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_command_factory() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
