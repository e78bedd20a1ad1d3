//! Ignore rules for the staging index
//!
//! Patterns are globs matched against root-relative, `/`-separated paths. A
//! pattern ending in `/` is expanded to cover its whole subtree (`dir/` becomes
//! `dir/**/*`). The metadata directory is always ignored.

use crate::config::METADATA_DIR;
use glob::{MatchOptions, Pattern};
use std::path::Path;
use tracing::warn;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
pub struct IgnoreRules {
    patterns: Vec<Pattern>,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::from_lines(std::iter::empty::<&str>())
    }
}

impl IgnoreRules {
    /// Build rules from ignore-list lines on top of the default metadata rule
    pub fn from_lines<'l>(lines: impl IntoIterator<Item = &'l str>) -> Self {
        let patterns = std::iter::once(format!("{METADATA_DIR}/"))
            .chain(lines.into_iter().map(str::to_string))
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let expanded = match line.strip_suffix('/') {
                    Some(dir) => format!("{dir}/**/*"),
                    None => line.clone(),
                };

                Pattern::new(&expanded)
                    .inspect_err(|e| {
                        warn!(pattern = %line, error = %e, "skipping invalid ignore pattern")
                    })
                    .ok()
            })
            .collect();

        IgnoreRules { patterns }
    }

    /// Load rules from an ignore file; a missing file yields the defaults
    pub fn load(ignore_file: &Path) -> std::io::Result<Self> {
        if !ignore_file.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(ignore_file)?;
        Ok(Self::from_lines(content.lines()))
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_path_with(path, MATCH_OPTIONS))
    }
}
