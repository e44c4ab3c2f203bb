//! Defines custom error types for the application.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Fatal conditions that stop a compilation run before it can finish.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("program {0} not available")]
    ProgramNotFound(String),

    #[error("{program} version >= {required} required (found {found})")]
    VersionTooOld {
        program: String,
        required: String,
        found: String,
    },

    #[error("file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error("Could not find a version number in the output of `--version`: {0:?}")]
    UnrecognizedVersion(String),

    #[error("Invalid version string: {0:?}")]
    InvalidVersion(String),

    #[error("{program} exited with {status}: {stderr}")]
    ConverterFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}
