use once_cell::sync::Lazy;
use regex::Regex;
use std::num::NonZeroUsize;

pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(30) {
    Some(size) => size,
    None => panic!("chunk size must not be zero"),
};
pub const DEFAULT_CONTEXT_WINDOW: usize = 1;
pub const DEFAULT_TOKENIZER_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OUTPUT_PREFIX: &str = "cleaned_";
pub const DEFAULT_CONFIG_FILE: &str = "default.txt";

pub static LINE_ENDINGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\r\n?"#).expect("LINE_ENDINGS regex"));
