//! Run configuration.

use std::path::PathBuf;

/// Where converted ranges are appended unless told otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "ranges/listsOfNETs.txt";
/// Maximum line length in bytes, newline included.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 250;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Blocklist to read.
    pub input: PathBuf,
    /// File to append CIDR lines to. Its directory must already exist.
    pub output: PathBuf,
    pub max_line_length: usize,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Config {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Build from the process arguments, program name first.
    ///
    /// Exactly one path is accepted; anything else yields the usage text.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        match args {
            [_, path] => Ok(Config::new(path)),
            _ => {
                let program = args.first().map(String::as_str).unwrap_or("pg2cidr");
                Err(format!("Usage: {program} <file_path>"))
            }
        }
    }
}
