mod chunker;
mod classifier;
pub mod config;
mod constants;
mod error;
mod filter;
mod tokens;
mod util;


pub use chunker::chunk_text;
pub use classifier::CssClassifier;
pub use config::{ConfigError, DeslopConfig, PatternEntry};
pub use error::DeslopError;
pub use filter::{filter_chunks, retain_mask};
pub use tokens::TokenCounter;

use log::debug;
use std::path::{Path, PathBuf};
use util::Util;

/// Outcome of cleaning one piece of text.
#[derive(Clone, Debug)]
pub struct DeslopResult {
    pub text: String,
    pub total_chunks: usize,
    pub css_chunks: usize,
    pub dropped_chunks: usize,
    pub original_tokens: usize,
    pub final_tokens: usize,
}

impl DeslopResult {
    pub fn tokens_removed(&self) -> i64 {
        self.original_tokens as i64 - self.final_tokens as i64
    }
}

/// Summary of a file run.
#[derive(Clone, Debug)]
pub struct DeslopReport {
    pub output_path: PathBuf,
    pub characters_read: usize,
    pub original_tokens: usize,
    pub final_tokens: usize,
    pub dropped_chunks: usize,
}

impl DeslopReport {
    pub fn tokens_removed(&self) -> i64 {
        self.original_tokens as i64 - self.final_tokens as i64
    }
}

pub struct Deslopper {
    config: DeslopConfig,
    classifier: CssClassifier,
    token_counter: TokenCounter,
}

impl Deslopper {
    pub fn new(config: DeslopConfig) -> Result<Self, DeslopError> {
        let classifier = CssClassifier::new(&config.patterns)?;
        let token_counter = TokenCounter::new(&config.tokenizer_model)?;

        Ok(Self {
            config,
            classifier,
            token_counter,
        })
    }

    /// Set up with the configuration compiled into the crate.
    pub fn builtin() -> Result<Self, DeslopError> {
        Self::new(DeslopConfig::builtin()?)
    }

    pub fn config(&self) -> &DeslopConfig {
        &self.config
    }

    pub fn classifier(&self) -> &CssClassifier {
        &self.classifier
    }

    pub fn deslop_text(&self, text: &str) -> DeslopResult {
        let original_tokens = self.token_counter.count(text);

        let chunks = chunk_text(text, self.config.chunk_size);
        let css_flags = self.classifier.classify(&chunks);
        let kept = filter_chunks(&chunks, &css_flags, self.config.context_window);

        if log::log_enabled!(log::Level::Debug) {
            let keep = retain_mask(&css_flags, self.config.context_window);
            for (index, chunk) in chunks.iter().enumerate() {
                if !keep[index] {
                    debug!(
                        "Dropping chunk {} {:?} matched by {:?}",
                        index,
                        chunk,
                        self.classifier.matching_labels(chunk)
                    );
                }
            }
        }

        let clean_text = kept.concat();
        let final_tokens = self.token_counter.count(&clean_text);

        let css_chunks = css_flags.iter().filter(|&&is_css| is_css).count();
        let dropped_chunks = chunks.len() - kept.len();
        debug!(
            "{} chunks, {} look like css, {} dropped",
            chunks.len(),
            css_chunks,
            dropped_chunks
        );

        DeslopResult {
            text: clean_text,
            total_chunks: chunks.len(),
            css_chunks,
            dropped_chunks,
            original_tokens,
            final_tokens,
        }
    }

    /// Where the cleaned copy of `input` ends up inside `output_dir`.
    pub fn output_path(&self, input: &Path, output_dir: &Path) -> PathBuf {
        Util::output_path(input, output_dir, &self.config.output_prefix)
    }

    /// Clean `input` and write the result into `output_dir`.
    ///
    /// The output file is only touched once the text has been cleaned.
    pub fn process_file(
        &self,
        input: &Path,
        output_dir: &Path,
    ) -> Result<DeslopReport, DeslopError> {
        self.process_file_with(input, output_dir, |_| {})
    }

    /// Same as [`Deslopper::process_file`], calling `on_read` with the number
    /// of characters read before the text is cleaned.
    pub fn process_file_with<F: FnOnce(usize)>(
        &self,
        input: &Path,
        output_dir: &Path,
        on_read: F,
    ) -> Result<DeslopReport, DeslopError> {
        debug!("Deslopping file: '{}'", input.display());

        let text = Util::read_text(input)?;
        let characters_read = text.chars().count();
        on_read(characters_read);

        let result = self.deslop_text(&text);

        let output_path = self.output_path(input, output_dir);
        Util::write_text(&output_path, &result.text)?;
        debug!("Cleaned text written to '{}'", output_path.display());

        Ok(DeslopReport {
            output_path,
            characters_read,
            original_tokens: result.original_tokens,
            final_tokens: result.final_tokens,
            dropped_chunks: result.dropped_chunks,
        })
    }
}
