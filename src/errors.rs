use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised around the conversions. The conversions themselves are
/// total and never produce one.
#[derive(Debug)]
pub enum GonioError {
    /// A token in a value list is not a number.
    InvalidNumber { token: String, line: usize },
    /// An input file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A setting has a value that cannot be used.
    Config { setting: String, message: String },
    /// The command line was well-formed but cannot be acted on.
    Usage(String),
    /// The results could not be written out.
    Output(String),
    Logging(String),
}

impl fmt::Display for GonioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GonioError::InvalidNumber { token, line } => {
                write!(f, "Invalid number '{}' on line {}", token, line)
            }
            GonioError::Io { path, source } => write!(
                f,
                "Failed to read the input file '{}': {}",
                path.display(),
                source
            ),
            GonioError::Config { setting, message } => {
                write!(f, "{}: {}", setting, message)
            }
            GonioError::Usage(message) => write!(f, "{}", message),
            GonioError::Output(message) => {
                write!(f, "Failed to write the results: {}", message)
            }
            GonioError::Logging(message) => {
                write!(f, "Failed to set up logging: {}", message)
            }
        }
    }
}

impl std::error::Error for GonioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GonioError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
