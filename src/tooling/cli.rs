//! CLI Tooling
//!
//! `germinator adapt | validate | detect | version`. Commands return their
//! stdout text; the binary decides the exit status.

use super::format::{format_validate_result_json, format_validate_result_text, ValidateReport};
use crate::config::{ConfigLoader, GerminatorConfig};
use crate::error::{GerminatorError, Result};
use crate::loader::detect_type;
use crate::logging::LoggingConfig;
use crate::service::{validate_document, Transformer};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Germinator - adapt AI coding assistant documents between platforms
#[derive(Parser, Debug)]
#[command(name = "germinator", version)]
#[command(about = "Adapt agent, command, memory and skill documents between Claude Code and OpenCode")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces germinator.toml discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Shorthand for --log-level debug
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// `base` with the command-line logging flags applied.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Transform a document into the target platform's format
    Adapt {
        /// Source document (agent-*.md, *-skill.md, ...)
        input: PathBuf,
        /// Destination file
        output: PathBuf,
        /// Target platform (claude-code, opencode)
        #[arg(long)]
        platform: Option<String>,
    },
    /// Validate a document against a platform's rules
    Validate {
        file: PathBuf,
        /// Target platform (claude-code, opencode)
        #[arg(long)]
        platform: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the document type detected from a file name
    Detect { file: PathBuf },
    /// Print the version
    Version,
}

/// Text for stdout and whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

/// Loaded configuration plus the transformer built from it.
pub struct CliContext {
    config: GerminatorConfig,
    transformer: Transformer,
}

impl CliContext {
    /// Load configuration from `config_path`, or discover it from
    /// `workspace_root` and the global config directory.
    pub fn new(workspace_root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(workspace_root)?,
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: GerminatorConfig) -> Self {
        let transformer = Transformer::with_templates_dir(config.templates_dir.clone());
        Self {
            config,
            transformer,
        }
    }

    pub fn config(&self) -> &GerminatorConfig {
        &self.config
    }

    /// Execute a CLI command
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput> {
        debug!(?command, "executing command");
        match command {
            Commands::Adapt {
                input,
                output,
                platform,
            } => {
                let platform = self.platform(platform.as_deref());
                self.transformer.transform(input, output, &platform)?;
                Ok(CommandOutput::ok(format!(
                    "Document transformed successfully to {}",
                    output.display()
                )))
            }
            Commands::Validate {
                file,
                platform,
                format,
            } => {
                let platform = self.platform(platform.as_deref());
                let errors = validate_document(file, &platform)?;
                let report = ValidateReport::new(file, detect_type(file), &platform, &errors);
                let text = if format == "json" {
                    format_validate_result_json(&report).map_err(|e| {
                        GerminatorError::ConfigError(format!("Failed to encode report: {}", e))
                    })?
                } else {
                    format_validate_result_text(&report)
                };
                Ok(CommandOutput {
                    text,
                    success: report.valid,
                })
            }
            Commands::Detect { file } => {
                let kind = detect_type(file)
                    .ok_or_else(|| GerminatorError::UnrecognizedFilename(file.clone()))?;
                Ok(CommandOutput::ok(kind.as_str()))
            }
            Commands::Version => Ok(CommandOutput::ok(format!(
                "germinator {}",
                env!("CARGO_PKG_VERSION")
            ))),
        }
    }

    /// An empty result is left for the platform gate to report.
    fn platform(&self, explicit: Option<&str>) -> String {
        self.config.resolve_platform(explicit).unwrap_or_default()
    }
}
