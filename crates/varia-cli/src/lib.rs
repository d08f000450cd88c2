//! Varia CLI Library
//!
//! Command-line front end for the varia-core variant models. Each subcommand
//! renders one demonstration as human-readable console output; the model
//! operations themselves live in varia-core and stay callable without any of
//! this glue.

pub mod cli;
pub mod commands;
pub mod diagnostics;

// Re-export core types for convenience
pub use varia_core::*;

// CLI-specific error handling
pub mod error {
    use miette::Diagnostic;
    use thiserror::Error;

    #[derive(Error, Debug, Diagnostic)]
    pub enum CliError {
        #[error("IO error: {0}")]
        #[diagnostic(code(varia::io_error))]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        #[diagnostic(
            code(varia::config_error),
            help("Check the JSON file passed with --config")
        )]
        Config(String),

        #[error("Invalid input: {0}")]
        #[diagnostic(code(varia::invalid_input))]
        InvalidInput(String),

        #[error("Model error: {0}")]
        #[diagnostic(code(varia::model_error))]
        Model(#[from] varia_core::Error),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
