//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command line configuration for relink.
#[derive(Debug, Clone, Parser)]
#[command(name = "relink", version, about, long_about = None)]
pub struct Config {
    /// Documents to rewrite
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Source path used for dialect and depth detection (single input only)
    #[arg(long)]
    pub source_path: Option<String>,

    /// Write rewritten documents back instead of printing them
    #[arg(short, long)]
    pub in_place: bool,

    /// Enable informational logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input does not exist, or if a source path
    /// override is given together with more than one input.
    pub fn validate(&self) -> Result<()> {
        if let Some(missing) = self.inputs.iter().find(|input| !input.exists()) {
            bail!("Input file does not exist: {}", missing.display());
        }

        if self.source_path.is_some() && self.inputs.len() > 1 {
            bail!(
                "--source-path applies to a single input, got {}",
                self.inputs.len()
            );
        }

        Ok(())
    }

    /// Returns source path used to rewrite links of `input`.
    ///
    /// # Errors
    ///
    /// Returns error if no override is set and the input path contains invalid UTF8.
    pub fn source_path_for(&self, input: &Path) -> Result<String> {
        if let Some(source_path) = &self.source_path {
            return Ok(source_path.clone());
        }

        input
            .to_str()
            .with_context(|| format!("Path contains invalid UTF8: {}", input.display()))
            .map(String::from)
    }
}
