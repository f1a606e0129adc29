//! Configuration management
//!
//! The config document describes frames (destination folders) and the source
//! folders feeding each of them. Disabled entries are filtered out during
//! resolution, so the rest of the engine only ever sees enabled pairs.

use crate::types::{CopyPair, SequinError};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Command line interface
#[derive(Debug, Parser)]
#[command(
    name = "sequin",
    version,
    about = "Index-preserving photo frame synchronization"
)]
pub struct Cli {
    /// TOML configuration file describing frames and their sources
    pub config: PathBuf,

    /// Print the copy plan without copying anything
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Suppress per-task lines and summaries
    #[arg(short, long)]
    pub silent: bool,
}

/// On-disk configuration document
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    /// Exact filenames to skip in every source folder (case-sensitive)
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Destination frames, in document order
    #[serde(default, rename = "frame")]
    pub frames: Vec<FrameConfig>,
}

/// One destination frame and its source folders
#[derive(Debug, Deserialize)]
pub struct FrameConfig {
    /// Display name of the frame
    pub name: String,

    /// Destination folder receiving indexed copies
    pub folder: PathBuf,

    /// Disabled frames contribute no pairs
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Source folders feeding this frame, in document order
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceConfig>,
}

/// One source folder entry under a frame
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    /// Source folder whose files are candidates for synchronization
    pub folder: PathBuf,

    /// Disabled sources contribute no pairs
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ConfigFile {
    /// Load and parse a configuration document.
    ///
    /// An unreadable file, a parse failure, and a document without frames
    /// are all configuration errors, raised before any other filesystem
    /// access.
    pub fn load(path: &Path) -> Result<Self, SequinError> {
        let text = fs::read_to_string(path).map_err(|e| {
            SequinError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, origin: &Path) -> Result<Self, SequinError> {
        let file: ConfigFile = toml::from_str(text).map_err(|e| {
            SequinError::Config(format!("cannot parse {}: {}", origin.display(), e))
        })?;
        if file.frames.is_empty() {
            return Err(SequinError::Config(format!(
                "no frames configured in {}",
                origin.display()
            )));
        }
        Ok(file)
    }

    /// Resolve the ordered pairs for all enabled source-under-frame
    /// combinations. A frame with no enabled sources simply contributes
    /// nothing.
    pub fn resolve_pairs(&self) -> Vec<CopyPair> {
        self.frames
            .iter()
            .filter(|frame| frame.enabled)
            .flat_map(|frame| {
                frame
                    .sources
                    .iter()
                    .filter(|source| source.enabled)
                    .map(|source| CopyPair::new(&source.folder, &frame.folder))
            })
            .collect()
    }
}

/// Global configuration for a run
#[derive(Debug, Clone)]
pub struct Config {
    /// Ordered enabled pairs
    pub pairs: Vec<CopyPair>,

    /// Exact filenames to skip in every source folder
    pub ignore: Vec<String>,

    /// Report the plan without executing it
    pub dry_run: bool,

    /// Suppress all output
    pub silent: bool,
}

impl TryFrom<Cli> for Config {
    type Error = SequinError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let file = ConfigFile::load(&cli.config)?;
        Ok(Self {
            pairs: file.resolve_pairs(),
            ignore: file.ignore,
            dry_run: cli.dry_run,
            silent: cli.silent,
        })
    }
}
