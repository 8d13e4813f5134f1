use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{constants, error::DeslopError};

pub struct Util;

impl Util {
    pub fn str_extract_value<'a>(identifier: &str, line: &'a str) -> &'a str {
        line[identifier.len()..].trim()
    }

    /// Read the whole file and decode it as UTF-8 with `\n` line endings.
    pub fn read_text(path: &Path) -> Result<String, DeslopError> {
        let bytes = fs::read(path).map_err(|error| {
            log::error!("Failed to read '{}' - '{}'", path.display(), error);
            DeslopError::from_io(path, error)
        })?;

        let text = String::from_utf8(bytes).map_err(|source| {
            log::error!("'{}' is not valid UTF-8 - '{}'", path.display(), source);
            DeslopError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Ok(Self::normalize_newlines(text))
    }

    pub fn write_text(path: &Path, text: &str) -> Result<(), DeslopError> {
        fs::write(path, text).map_err(|error| {
            log::error!("Failed to write '{}' - '{}'", path.display(), error);
            DeslopError::from_io(path, error)
        })
    }

    pub fn normalize_newlines(text: String) -> String {
        if !text.contains('\r') {
            return text;
        }

        constants::LINE_ENDINGS.replace_all(&text, "\n").into_owned()
    }

    /// `<prefix><file name of input>` placed inside `output_dir`.
    pub fn output_path(input: &Path, output_dir: &Path, prefix: &str) -> PathBuf {
        let mut file_name = OsString::from(prefix);
        if let Some(name) = input.file_name() {
            file_name.push(name);
        }

        output_dir.join(file_name)
    }
}
