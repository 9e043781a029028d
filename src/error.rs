use miette::Diagnostic;
use thiserror::Error;

/// Main error type for recolour operations
#[derive(Error, Diagnostic, Debug)]
pub enum RecolourError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(recolour::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(recolour::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(recolour::precondition))]
    Precondition {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RecolourError>;
