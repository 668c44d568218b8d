use std::fmt;

#[derive(Debug)]
pub enum FixtureError {
    IoError(String),
    ConfigError(String),
    ParseError { line: usize, message: String },
}

impl FixtureError {
    /// Wrap an I/O failure with the path it happened on
    pub fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        FixtureError::IoError(format!("{}: {}", path.display(), err))
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        FixtureError::ParseError {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FixtureError::IoError(msg) => write!(f, "IO error: {}", msg),
            FixtureError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FixtureError::ParseError { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for FixtureError {}
