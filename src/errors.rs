use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("cannot overwrite existing entry at '{path}'")]
    #[diagnostic(
        code(sassling::materialize::already_exists),
        help("Move or remove the existing directory before regenerating the skeleton.")
    )]
    AlreadyExists { path: PathBuf },

    #[error("failed to create directory '{path}'")]
    #[diagnostic(
        code(sassling::materialize::mkdir),
        help("Check file permissions, disk space, or that the path is correct.")
    )]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file '{path}'")]
    #[diagnostic(
        code(sassling::materialize::write),
        help("Check file permissions, disk space, or that the path is correct.")
    )]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    /// The offending filesystem path carried by every variant.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::AlreadyExists { path } => path,
            Self::DirectoryCreateFailed { path, .. } => path,
            Self::FileWriteFailed { path, .. } => path,
        }
    }
}
