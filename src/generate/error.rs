//! Error types for the generation engine.
//!
//! Read failures on individual feature files are deliberately absent here:
//! they are recovered fail-open inside the engine and only logged, so a
//! momentarily unreadable file costs an extra runner rather than silently
//! dropped coverage.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring, planning, or writing generated runners.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// The configured naming scheme is not recognised.
    #[error("unknown naming scheme '{value}'; accepted values are 'simple' and 'feature-title'")]
    #[diagnostic(code(cukegen::generate::naming_scheme))]
    NamingScheme {
        /// The rejected configuration value.
        value: String,
    },

    /// A configured or discovered path is not valid UTF-8.
    #[error("path {path:?} is not valid UTF-8")]
    #[diagnostic(code(cukegen::generate::non_utf8_path))]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },

    /// The features directory could not be traversed.
    #[error("failed to scan features directory {path}")]
    #[diagnostic(code(cukegen::generate::discover))]
    Discover {
        /// Directory being walked.
        path: Utf8PathBuf,
        /// Underlying traversal failure.
        #[source]
        source: walkdir::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}")]
    #[diagnostic(code(cukegen::generate::create_output_dir))]
    CreateOutputDir {
        /// Directory being created.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A generated runner could not be written.
    #[error("failed to write runner {path}")]
    #[diagnostic(code(cukegen::generate::write_runner))]
    WriteRunner {
        /// Destination of the failed write.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A template failed to compile or render.
    #[error("failed to render template '{name}'")]
    #[diagnostic(code(cukegen::generate::template))]
    Template {
        /// Template identifier.
        name: &'static str,
        /// Underlying template failure.
        #[source]
        source: minijinja::Error,
    },
}
