use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rrss operations
#[derive(Error, Diagnostic, Debug)]
pub enum RrssError {
    #[error("IO error: {0}")]
    #[diagnostic(code(rrss::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(rrss::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid color: {message}")]
    #[diagnostic(code(rrss::color))]
    InvalidColor {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cannot read image {path}: {message}")]
    #[diagnostic(code(rrss::image))]
    ImageUnreadable {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(rrss::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Compile error: {message}")]
    #[diagnostic(code(rrss::compile))]
    Compile {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RrssError>;
