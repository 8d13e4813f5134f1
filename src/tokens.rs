use tiktoken_rs::CoreBPE;

use crate::error::DeslopError;

/// Counts tokens with the vocabulary of a fixed model.
pub struct TokenCounter {
    bpe: CoreBPE,
    model: String,
}

impl TokenCounter {
    pub fn new(model: &str) -> Result<Self, DeslopError> {
        let bpe = tiktoken_rs::get_bpe_from_model(model).map_err(|error| {
            log::error!("Failed to load tokenizer for '{}': {}", model, error);
            DeslopError::Tokenizer(format!("failed to load tokenizer for '{model}': {error}"))
        })?;

        Ok(Self {
            bpe,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Special-token markup such as `<|endoftext|>` is counted as ordinary
    /// text. This is more lenient than a strict encode, which refuses such
    /// input and would abort the whole run over a token report.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

#[cfg(test)]
mod tests {
    use super::TokenCounter;

    #[test]
    fn empty() {
        let counter = TokenCounter::new("gpt-3.5-turbo").unwrap();
        assert_eq!(counter.count(""), 0);
        assert_eq!(counter.model(), "gpt-3.5-turbo");
    }

    #[test]
    fn simple() {
        let counter = TokenCounter::new("gpt-3.5-turbo").unwrap();
        let count = counter.count("Hello, world!");
        assert!(count > 0);
        assert!(count < 10);
    }

    #[test]
    fn special_tokens_are_plain_text() {
        let counter = TokenCounter::new("gpt-3.5-turbo").unwrap();
        assert!(counter.count("<|endoftext|>") > 1);
    }

    #[test]
    fn unknown_model() {
        assert!(TokenCounter::new("definitely-not-a-model").is_err());
    }
}
