use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI pipelines use these to tell an untrustworthy manifest apart from an
/// interrupted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Manifest written (or dry run completed)
    Success = 0,
    /// Any fatal error; the manifest must not be trusted
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// The run was interrupted by SIGINT or SIGTERM
    Cancelled = 130,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run by inspecting the error chain
    pub fn for_error(err: &anyhow::Error) -> Self {
        let cancelled = err
            .chain()
            .any(|cause| matches!(cause.downcast_ref::<ReleaseError>(), Some(ReleaseError::Cancelled)));
        if cancelled {
            ExitCode::Cancelled
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::Cancelled => write!(f, "Cancelled (130)"),
        }
    }
}

/// Which end of the revision range an error or fallback refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionSide {
    Base,
    Head,
}

impl fmt::Display for RevisionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionSide::Base => write!(f, "base"),
            RevisionSide::Head => write!(f, "head"),
        }
    }
}

/// Application-specific errors for release calculation.
#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("{collaborator} is unavailable\nDetails: {details}\n\n💡 Hint: Check that --repo-root points at a git checkout and the Go toolchain is installed")]
    CollaboratorUnavailable {
        collaborator: &'static str,
        details: String,
    },

    /// Recovered locally: the run falls back to the default revision
    #[error("Failed to find {side} revision {revision:?} in the repository: {details}")]
    RevisionNotFound {
        side: RevisionSide,
        revision: String,
        details: String,
    },

    #[error("Failed to parse {collaborator} output\nDetails: {details}")]
    MalformedCollaboratorOutput {
        collaborator: &'static str,
        details: String,
    },

    #[error("Failed to check deployment descriptor: {path}\nDetails: {details}")]
    FilesystemProbeError { path: PathBuf, details: String },

    #[error("Failed to write build manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputWriteError { path: PathBuf, details: String },

    #[error("Invalid repository root: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid repository directory with --repo-root")]
    InvalidRepoRoot { path: PathBuf, reason: String },

    /// Validation error for builder patterns and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Release calculation was cancelled")]
    Cancelled,
}
