use crate::constants;
use crate::util::Util;

use super::error::ConfigError;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io::{BufRead, BufReader, Cursor};
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "resources/config"]
struct EmbeddedConfigFiles;

/// A labelled CSS heuristic. The label only shows up in logs and errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternEntry {
    pub label: String,
    pub pattern: String,
}

impl PatternEntry {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }
}

/// Tuning knobs of the deslop pipeline.
///
/// Config files are line based:
///
/// ```text
/// # comment
/// chunk_size: 30
/// context_window: 1
/// tokenizer_model: gpt-3.5-turbo
/// output_prefix: cleaned_
/// pattern(important): !important
/// ```
///
/// Missing scalar keys fall back to the built-in defaults. Inline `#`
/// comments are not supported since patterns may contain `#`.
#[derive(Clone, Debug)]
pub struct DeslopConfig {
    pub chunk_size: NonZeroUsize,
    pub context_window: usize,
    pub tokenizer_model: String,
    pub output_prefix: String,
    pub patterns: Vec<PatternEntry>,
}

impl DeslopConfig {
    /// The configuration shipped inside the binary.
    pub fn builtin() -> Result<DeslopConfig, ConfigError> {
        let file = EmbeddedConfigFiles::get(constants::DEFAULT_CONFIG_FILE)
            .ok_or_else(|| ConfigError::Missing(constants::DEFAULT_CONFIG_FILE.into()))?;
        Self::parse_data(file.data)
    }

    pub fn parse_path(config_path: &Path) -> Result<DeslopConfig, ConfigError> {
        let file = fs::File::open(config_path)?;
        let buffer = BufReader::new(file);

        Self::parse(buffer)
    }

    pub fn parse_data(data: Cow<'static, [u8]>) -> Result<DeslopConfig, ConfigError> {
        let data = data.as_ref();
        let buffer = BufReader::new(Cursor::new(data));

        Self::parse(buffer)
    }

    fn parse<R: BufRead>(buffer: R) -> Result<DeslopConfig, ConfigError> {
        let mut chunk_size: Option<NonZeroUsize> = None;
        let mut context_window: Option<usize> = None;
        let mut tokenizer_model: Option<String> = None;
        let mut output_prefix: Option<String> = None;
        let mut patterns: Vec<PatternEntry> = Vec::new();

        let chunk = "chunk_size:";
        let context = "context_window:";
        let model = "tokenizer_model:";
        let prefix = "output_prefix:";
        let pattern = "pattern(";

        for line in buffer.lines() {
            let line = line?;
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            extract_number!(line, chunk, chunk_size);
            extract_number!(line, context, context_window);

            extract_option_single!(line, model, tokenizer_model);
            extract_option_single!(line, prefix, output_prefix);

            if line.starts_with(pattern) {
                let value = Util::str_extract_value(pattern, line);
                match value.split_once("): ") {
                    Some((label, regex)) if !label.trim().is_empty() && !regex.trim().is_empty() => {
                        patterns.push(PatternEntry::new(label.trim(), regex.trim()));
                    }
                    _ => log::warn!("Ignoring malformed pattern line '{}'", line),
                }
                continue;
            }

            log::warn!("Ignoring unknown config line '{}'", line);
        }

        if patterns.is_empty() {
            log::error!("No patterns found in deslop config");
            return Err(ConfigError::NoPatterns);
        }

        Ok(DeslopConfig {
            chunk_size: chunk_size.unwrap_or(constants::DEFAULT_CHUNK_SIZE),
            context_window: context_window.unwrap_or(constants::DEFAULT_CONTEXT_WINDOW),
            tokenizer_model: tokenizer_model
                .unwrap_or_else(|| constants::DEFAULT_TOKENIZER_MODEL.into()),
            output_prefix: output_prefix.unwrap_or_else(|| constants::DEFAULT_OUTPUT_PREFIX.into()),
            patterns,
        })
    }
}
