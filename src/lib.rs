//! color-replacer library for rewriting hex color tokens in a source tree.
//!
//! The workflow is a single linear pass:
//!
//! 1. **Scanning**: Walk the root and pick files by filename suffix
//! 2. **Rewriting**: Apply the ordered, case-insensitive rule table to each file
//! 3. **Reporting**: Count the files whose content actually changed
//!
//! # Example
//!
//! ```no_run
//! use color_replacer::{ColorReplacer, Config, FileOutcome};
//!
//! let replacer = ColorReplacer::new(Config::new("./src")).unwrap();
//! let summary = replacer.run_with(|outcome| {
//!     if let FileOutcome::Updated { path, .. } = outcome {
//!         println!("Updated: {}", path.display());
//!     }
//! });
//!
//! println!("{} files updated", summary.files_changed);
//! ```

pub mod config;
pub mod replacer;
pub mod rewriter;
pub mod scanner;

// Re-export commonly used types at crate root
pub use config::{Config, ReplacementRule, RuleSet};
pub use replacer::{ColorReplacer, FileError, FileOutcome, RunSummary};
