use regex::{RegexBuilder, RegexSet, RegexSetBuilder};

use crate::config::{ConfigError, PatternEntry};

/// Flags text that looks like stylesheet syntax.
///
/// This is a bag of heuristics, not a CSS parser. On short windows of prose
/// some patterns fire by coincidence.
pub struct CssClassifier {
    labels: Vec<String>,
    set: RegexSet,
}

impl CssClassifier {
    pub fn new(patterns: &[PatternEntry]) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }

        let set = RegexSetBuilder::new(patterns.iter().map(|entry| entry.pattern.as_str()))
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|error| Self::locate_error(patterns, error))?;

        Ok(Self {
            labels: patterns.iter().map(|entry| entry.label.clone()).collect(),
            set,
        })
    }

    // the set only reports that something failed, find out which entry it was
    fn locate_error(patterns: &[PatternEntry], error: regex::Error) -> ConfigError {
        for entry in patterns {
            if let Err(source) = RegexBuilder::new(&entry.pattern)
                .case_insensitive(true)
                .multi_line(true)
                .build()
            {
                log::error!("Failed to compile pattern '{}': {}", entry.label, source);
                return ConfigError::InvalidPattern {
                    label: entry.label.clone(),
                    source,
                };
            }
        }

        ConfigError::InvalidPattern {
            label: "pattern set".into(),
            source: error,
        }
    }

    pub fn is_css(&self, chunk: &str) -> bool {
        !chunk.is_empty() && self.set.is_match(chunk)
    }

    pub fn matching_labels(&self, chunk: &str) -> Vec<&str> {
        if chunk.is_empty() {
            return Vec::new();
        }

        self.set
            .matches(chunk)
            .into_iter()
            .map(|index| self.labels[index].as_str())
            .collect()
    }

    pub fn classify(&self, chunks: &[&str]) -> Vec<bool> {
        chunks.iter().map(|chunk| self.is_css(chunk)).collect()
    }
}
