//! Run configuration and the replacement rule table.
//!
//! A [`Config`] names the scan root, the filename suffixes that select
//! candidate files, and the ordered list of [`ReplacementRule`]s. Defaults
//! reproduce the fixed brand-color migration: orange hex tokens become blue.
//! Rules are compiled once into a [`RuleSet`] before any file is visited.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Subdirectory of the working directory scanned by default.
pub const DEFAULT_ROOT_DIR: &str = "src";

/// Filename suffixes of markup, script and stylesheet files.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".css", ".html"];

/// Orange -> blue migration table, applied in order.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("#EF8037", "#2563EB"), // orange -> blue-600
    ("#d96a2a", "#1D4ED8"), // dark orange -> blue-700
    ("ef8037", "2563EB"),
    ("EF8037", "2563EB"),
];

/// A single pattern-to-replacement pair.
///
/// `pattern` is a regular expression matched case-insensitively; `replacement`
/// is inserted literally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplacementRule {
    pub pattern: String,
    pub replacement: String,
}

impl ReplacementRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Everything a run needs: where to look, what to pick, what to rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub rules: Vec<ReplacementRule>,
}

impl Config {
    /// Default extensions and rules rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            rules: default_rules(),
        }
    }

    /// Default configuration rooted at `<cwd>/src`.
    pub fn for_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Ok(Self::new(cwd.join(DEFAULT_ROOT_DIR)))
    }

    /// Overlays a JSON config file onto `self`. Keys absent from the file
    /// keep their current values.
    pub fn merge_file(self, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let partial: PartialConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(self.merge(partial))
    }

    fn merge(self, partial: PartialConfig) -> Self {
        Self {
            root: partial.root.unwrap_or(self.root),
            extensions: partial.extensions.unwrap_or(self.extensions),
            rules: partial.rules.unwrap_or(self.rules),
        }
    }

    /// Whether `file_name` ends with one of the configured suffixes.
    ///
    /// Plain string suffix match; the suffix comparison is case-sensitive.
    pub fn is_candidate_name(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

/// On-disk form of [`Config`] where every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    root: Option<PathBuf>,
    extensions: Option<Vec<String>>,
    rules: Option<Vec<ReplacementRule>>,
}

pub fn default_rules() -> Vec<ReplacementRule> {
    DEFAULT_RULES
        .iter()
        .map(|(pattern, replacement)| ReplacementRule::new(*pattern, *replacement))
        .collect()
}

/// Parses `pattern=replacement`. Splits on the first `=` only.
pub fn parse_rule(s: &str) -> Result<ReplacementRule, String> {
    match s.split_once('=') {
        Some((pattern, replacement)) if !pattern.is_empty() => {
            Ok(ReplacementRule::new(pattern, replacement))
        }
        _ => Err(format!(
            "Invalid rule format '{}', expected 'pattern=replacement'",
            s
        )),
    }
}

/// A rule with its pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub regex: Regex,
    pub replacement: String,
}

/// Ordered, compiled rule table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Compiles every rule case-insensitively. Fails on the first invalid
    /// pattern, naming it.
    pub fn compile(rules: &[ReplacementRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("Invalid rule pattern '{}'", rule.pattern))?;
                Ok(CompiledRule {
                    regex,
                    replacement: rule.replacement.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_uses_builtin_table() {
        let config = Config::new("/tmp/project/src");
        assert_eq!(config.root, PathBuf::from("/tmp/project/src"));
        assert_eq!(config.extensions.len(), 6);
        assert_eq!(config.rules.len(), 4);
        assert_eq!(config.rules[0], ReplacementRule::new("#EF8037", "#2563EB"));
    }

    #[test]
    fn current_dir_config_roots_at_src() {
        let config = Config::for_current_dir().unwrap();
        assert!(config.root.ends_with(DEFAULT_ROOT_DIR));
        assert!(config.root.is_absolute());
    }

    #[test]
    fn candidate_names_match_by_suffix() {
        let config = Config::new(".");
        assert!(config.is_candidate_name("app.tsx"));
        assert!(config.is_candidate_name("index.html"));
        assert!(config.is_candidate_name("theme.min.css"));
        assert!(!config.is_candidate_name("README.md"));
        assert!(!config.is_candidate_name("style.CSS"));
        assert!(!config.is_candidate_name("css"));
    }

    #[test]
    fn parse_rule_splits_on_first_equals() {
        assert_eq!(
            parse_rule("#abc=#def").unwrap(),
            ReplacementRule::new("#abc", "#def")
        );
        assert_eq!(
            parse_rule("a=b=c").unwrap(),
            ReplacementRule::new("a", "b=c")
        );
        assert_eq!(parse_rule("gone=").unwrap(), ReplacementRule::new("gone", ""));
    }

    #[test]
    fn parse_rule_rejects_missing_pattern() {
        assert!(parse_rule("no-separator").is_err());
        assert!(parse_rule("=x").is_err());
    }

    #[test]
    fn merge_file_overrides_only_present_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "rules": [{{ "pattern": "red", "replacement": "blue" }}] }}"#
        )
        .unwrap();

        let config = Config::new("/srv/site").merge_file(file.path()).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/site"));
        assert_eq!(config.extensions.len(), DEFAULT_EXTENSIONS.len());
        assert_eq!(config.rules, vec![ReplacementRule::new("red", "blue")]);
    }

    #[test]
    fn merge_file_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "roots": "x" }}"#).unwrap();

        let err = Config::new(".").merge_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn compile_reports_invalid_pattern() {
        let err = RuleSet::compile(&[ReplacementRule::new("(unclosed", "x")]).unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn compiled_rules_ignore_case() {
        let rules = RuleSet::compile(&default_rules()).unwrap();
        assert_eq!(rules.len(), 4);
        let first = rules.iter().next().unwrap();
        assert!(first.regex.is_match("#ef8037"));
        assert!(first.regex.is_match("#Ef8037"));
    }
}
