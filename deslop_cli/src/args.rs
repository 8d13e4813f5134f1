use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Clean web content from text files.", long_about = None)]
pub struct Args {
    /// Turn debug logging on
    #[arg(short, long)]
    pub debug: bool,

    /// Path to the input file
    #[arg(value_name = "FILE")]
    input_file: Option<OsString>,
}

impl Args {
    /// The input path, `None` if it was left out or given as an empty string.
    pub fn input_path(&self) -> Option<PathBuf> {
        self.input_file
            .as_ref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn positional_path() {
        let args = Args::try_parse_from(["deslop", "page.txt"]).unwrap();
        assert_eq!(args.input_path(), Some(PathBuf::from("page.txt")));
        assert!(!args.debug);
    }

    #[test]
    fn missing_path() {
        let args = Args::try_parse_from(["deslop", "--debug"]).unwrap();
        assert_eq!(args.input_path(), None);
        assert!(args.debug);
    }

    #[test]
    fn empty_path_counts_as_missing() {
        let args = Args::try_parse_from(["deslop", ""]).unwrap();
        assert_eq!(args.input_path(), None);
    }
}
