//! The color replacement pass.
//!
//! [`ColorReplacer`] ties the scanner and rewriter together: it visits each
//! candidate file once, in order, and records whether the file changed or
//! failed. A failure on one file is recorded and the pass moves on; nothing
//! a single file does can stop the run.

use crate::config::{Config, RuleSet};
use crate::rewriter::{self, Rewrite};
use crate::scanner;
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file that could not be read, decoded, or written.
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub cause: String,
}

/// What happened to one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    Unchanged(PathBuf),
    Updated { path: PathBuf, replacements: usize },
    Failed(FileError),
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Unchanged(path) | Self::Updated { path, .. } => path.as_path(),
            Self::Failed(err) => err.path.as_path(),
        }
    }
}

/// Totals for a completed run.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub files_scanned: usize,
    pub files_changed: usize,
    pub replacements: usize,
    pub changed: Vec<PathBuf>,
    pub errors: Vec<FileError>,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        self.files_scanned += 1;
        match outcome {
            FileOutcome::Unchanged(_) => {}
            FileOutcome::Updated { path, replacements } => {
                self.files_changed += 1;
                self.replacements += replacements;
                self.changed.push(path.clone());
            }
            FileOutcome::Failed(err) => self.errors.push(err.clone()),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Rewrites color tokens in every candidate file under a root.
#[derive(Debug)]
pub struct ColorReplacer {
    config: Config,
    rules: RuleSet,
}

impl ColorReplacer {
    /// Compiles the rule table. Fails if any pattern is not a valid regex.
    pub fn new(config: Config) -> Result<Self> {
        let rules = RuleSet::compile(&config.rules)?;
        Ok(Self { config, rules })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Candidate files, lazily.
    pub fn candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        scanner::candidate_files(&self.config)
    }

    /// Processes a single file, folding any I/O or decoding failure into
    /// [`FileOutcome::Failed`].
    pub fn process_file(&self, path: PathBuf) -> FileOutcome {
        match rewriter::rewrite_file(&path, &self.rules) {
            Ok(None) => FileOutcome::Unchanged(path),
            Ok(Some(Rewrite { replacements, .. })) => FileOutcome::Updated { path, replacements },
            Err(err) => FileOutcome::Failed(FileError {
                cause: format!("{:#}", err),
                path,
            }),
        }
    }

    /// Runs the full pass, handing each outcome to `on_file` as soon as the
    /// file is done.
    pub fn run_with<F>(&self, mut on_file: F) -> RunSummary
    where
        F: FnMut(&FileOutcome),
    {
        let mut summary = RunSummary {
            root: self.config.root.clone(),
            ..Default::default()
        };

        for path in self.candidates() {
            let outcome = self.process_file(path);
            on_file(&outcome);
            summary.record(&outcome);
        }

        summary
    }

    pub fn run(&self) -> RunSummary {
        self.run_with(|_| {})
    }
}
