//! Rule application and conditional file rewriting.
//!
//! Each rule is applied in table order to the output of the previous one,
//! replacing every non-overlapping, leftmost-first match. A file is written
//! back only when the final text differs from what was read, so untouched
//! files keep their modification time.

use crate::config::RuleSet;
use anyhow::{Context, Result};
use regex::NoExpand;
use std::path::Path;

/// Result of applying a rule set to a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Total matches replaced across all rules.
    pub replacements: usize,
}

impl Rewrite {
    pub fn is_changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Applies every rule in order, returning the new text and the match count.
pub fn apply_rules(content: &str, rules: &RuleSet) -> Rewrite {
    let mut current = content.to_string();
    let mut replacements = 0;

    for rule in rules.iter() {
        let hits = rule.regex.find_iter(&current).count();
        if hits == 0 {
            continue;
        }
        replacements += hits;
        current = rule
            .regex
            .replace_all(&current, NoExpand(&rule.replacement))
            .into_owned();
    }

    Rewrite {
        content: current,
        replacements,
    }
}

/// Reads `file` as UTF-8, applies `rules`, and writes the result back if it
/// changed. Returns `None` when the file was left untouched.
pub fn rewrite_file(file: &Path, rules: &RuleSet) -> Result<Option<Rewrite>> {
    let original = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let rewrite = apply_rules(&original, rules);
    if !rewrite.is_changed(&original) {
        return Ok(None);
    }

    std::fs::write(file, &rewrite.content)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    Ok(Some(rewrite))
}
