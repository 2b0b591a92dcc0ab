use crate::release_planning::domain::FileChange;
use crate::shared::error::{ReleaseError, RevisionSide};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// The revisions to compare; `None` selects the default for that side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub base: Option<String>,
    pub head: Option<String>,
    /// Reference used when `base` is unset or cannot be resolved
    pub primary_branch: String,
}

/// A requested revision that could not be resolved and was replaced by the default
#[derive(Debug)]
pub struct RevisionFallback {
    pub side: RevisionSide,
    pub error: ReleaseError,
}

/// Result of diffing two revisions
#[derive(Debug)]
pub struct DiffOutcome {
    /// Commit id the diff starts from
    pub base_commit: String,
    /// Commit id the diff ends at
    pub head_commit: String,
    /// Additions, modifications and renames; never deletions
    pub changes: Vec<FileChange>,
    /// Revisions that fell back to their default
    pub fallbacks: Vec<RevisionFallback>,
}

/// ChangeSource port for listing files that changed between two revisions
///
/// # Async Support
/// Implementations must observe `cancel` and return
/// [`ReleaseError::Cancelled`] promptly once it fires.
#[async_trait]
pub trait ChangeSource: Send + Sync {
    /// Diffs `range.base` against `range.head` in the repository at `repo_root`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The repository cannot be opened
    /// - A default revision cannot be resolved
    /// - A changed path is not valid UTF-8
    /// - The operation is cancelled
    async fn changed_files(
        &self,
        repo_root: &Path,
        range: &RevisionRange,
        cancel: &CancellationToken,
    ) -> Result<DiffOutcome>;
}

