//! Error types.

use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::front_matter::FrontMatterError;

/// Errors raised while converting files.
///
/// Every variant is terminal for the unit of work it names: a single file,
/// or the whole run for configuration and output directory problems.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Output directory is missing or may not be used.
    #[error("output folder {} is not an existing folder", .0.display())]
    OutputDirectory(PathBuf),

    /// Output directory contains the working directory and will not be cleared.
    #[error("refusing to clear output folder {}: it contains the current directory", .0.display())]
    UnsafeOutputDirectory(PathBuf),

    /// Output directory holds the input and will not be cleared.
    #[error("refusing to clear output folder {}: it contains the input {}", output.display(), input.display())]
    OutputContainsInput {
        /// Output directory.
        output: PathBuf,
        /// File or folder being converted.
        input: PathBuf,
    },

    /// Input is neither `.md` nor `.txt`.
    #[error("{} was not converted. File extension should be .md or .txt", .0.display())]
    UnsupportedExtension(PathBuf),

    /// Input path does not exist.
    #[error("file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    /// Markdown front matter could not be parsed.
    #[error("{}: {source}", path.display())]
    FrontMatter {
        /// Offending input file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: FrontMatterError,
    },

    /// Reading input or writing output failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for conversion operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
