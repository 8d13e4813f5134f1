use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can end a deslop run.
///
/// The `Display` output of each variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum DeslopError {
    #[error("Error: File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("Error: Permission denied when accessing '{}'.", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("Error: An I/O error occurred with file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error: Unable to decode the contents of '{}'. Please ensure it's a valid text file.", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("An unexpected error occurred: {0}")]
    Config(#[from] ConfigError),
    #[error("An unexpected error occurred: {0}")]
    Tokenizer(String),
}

impl DeslopError {
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => DeslopError::FileNotFound { path },
            io::ErrorKind::PermissionDenied => DeslopError::PermissionDenied { path },
            _ => DeslopError::Io {
                path,
                source: error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeslopError;
    use std::io;
    use std::path::Path;

    #[test]
    fn permission_denied() {
        let error = io::Error::from(io::ErrorKind::PermissionDenied);
        let err = DeslopError::from_io(Path::new("p.txt"), error);

        assert!(matches!(err, DeslopError::PermissionDenied { ref path } if path == Path::new("p.txt")));
        assert_eq!(
            err.to_string(),
            "Error: Permission denied when accessing 'p.txt'."
        );
    }

    #[test]
    fn not_found() {
        let error = io::Error::from(io::ErrorKind::NotFound);
        let err = DeslopError::from_io(Path::new("gone.txt"), error);

        assert!(matches!(err, DeslopError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "Error: File 'gone.txt' not found.");
    }

    #[test]
    fn other_io_error() {
        let error = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let err = DeslopError::from_io(Path::new("out.txt"), error);

        assert!(matches!(err, DeslopError::Io { .. }));
        assert_eq!(
            err.to_string(),
            "Error: An I/O error occurred with file 'out.txt': disk on fire"
        );
    }
}
