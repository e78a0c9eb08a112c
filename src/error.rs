use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stencil operations
#[derive(Error, Diagnostic, Debug)]
pub enum StencilError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(stencil::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(stencil::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Effect error: {message}")]
    #[diagnostic(code(stencil::effect))]
    Effect {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, StencilError>;
