//! Command-line interface definitions.
//!
//! Defines the argument parser and subcommands using clap's derive API.
//! Running without a subcommand performs the default replacement pass over
//! `./src` with the built-in rule table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use color_replacer::config::{Config, ReplacementRule, parse_rule};
use std::path::PathBuf;

/// Rewrite hex color tokens across a source tree.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite color tokens in every candidate file (the default).
    Replace {
        #[command(flatten)]
        target: TargetArgs,

        /// Emit the run summary as JSON instead of human-readable lines.
        #[arg(long)]
        json: bool,

        /// Print per-file replacement counts to stderr.
        #[arg(short, long)]
        verbose: bool,

        /// Exit non-zero if any file could not be processed.
        #[arg(long)]
        strict: bool,
    },

    /// List candidate files without reading them.
    Scan {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the effective replacement rule table.
    Rules {
        #[command(flatten)]
        target: TargetArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Replace {
            target: TargetArgs::default(),
            json: false,
            verbose: false,
            strict: false,
        }
    }
}

/// Options selecting what to scan and how to rewrite it.
#[derive(Debug, Default, clap::Args)]
pub struct TargetArgs {
    /// Directory to scan. Defaults to `./src`.
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Filename suffix to include (e.g. ".scss"). Repeatable; replaces the
    /// built-in list.
    #[arg(short, long = "ext")]
    pub extensions: Vec<String>,

    /// Replacement in `pattern=replacement` format. Repeatable, applied in
    /// the order given; replaces the built-in table.
    #[arg(long = "rule", value_parser = parse_rule)]
    pub rules: Vec<ReplacementRule>,

    /// JSON file providing `root`, `extensions` and/or `rules`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl TargetArgs {
    /// Builds the effective config: defaults, then the config file, then flags.
    pub fn into_config(self) -> Result<Config> {
        let mut config = Config::for_current_dir()?;
        if let Some(path) = &self.config {
            config = config.merge_file(path)?;
        }
        if let Some(root) = self.root {
            config.root = root;
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions;
        }
        if !self.rules.is_empty() {
            config.rules = self.rules;
        }
        Ok(config)
    }
}
