use crate::ports::outbound::{ChangeSource, DiffOutcome, RevisionFallback, RevisionRange};
use crate::release_planning::domain::{ChangedFile, FileChange};
use crate::shared::error::{ReleaseError, RevisionSide};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use git2::{Commit, Delta, DiffFindOptions, DiffOptions, Repository};
use std::path::Path;
use tokio_util::sync::CancellationToken;

const COLLABORATOR: &str = "git repository";

/// GitChangeSource adapter reading changed files with libgit2
///
/// libgit2 is blocking, so the diff runs on the blocking pool. The
/// cancellation token is checked between steps and for every delta, and the
/// caller stops waiting as soon as the token fires.
#[derive(Debug, Clone, Default)]
pub struct GitChangeSource;

impl GitChangeSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChangeSource for GitChangeSource {
    async fn changed_files(
        &self,
        repo_root: &Path,
        range: &RevisionRange,
        cancel: &CancellationToken,
    ) -> Result<DiffOutcome> {
        let repo_root = repo_root.to_path_buf();
        let range = range.clone();
        let token = cancel.clone();
        let task = tokio::task::spawn_blocking(move || diff_revisions(&repo_root, &range, &token));

        tokio::select! {
            _ = cancel.cancelled() => Err(ReleaseError::Cancelled.into()),
            joined = task => joined.context("git diff task failed")?,
        }
    }
}

fn unavailable(details: String) -> ReleaseError {
    ReleaseError::CollaboratorUnavailable {
        collaborator: COLLABORATOR,
        details,
    }
}

fn ensure_not_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(ReleaseError::Cancelled.into());
    }
    Ok(())
}

fn diff_revisions(repo_root: &Path, range: &RevisionRange, cancel: &CancellationToken) -> Result<DiffOutcome> {
    let repo = Repository::open(repo_root)
        .map_err(|e| unavailable(format!("open local repository {}: {}", repo_root.display(), e)))?;
    let mut fallbacks = Vec::new();

    let base = resolve_revision(&repo, RevisionSide::Base, range.base.as_deref(), &mut fallbacks, |repo| {
        repo.revparse_single(&range.primary_branch)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| unavailable(format!("get {}: {}", range.primary_branch, e)))
    })?;
    let head = resolve_revision(&repo, RevisionSide::Head, range.head.as_deref(), &mut fallbacks, |repo| {
        repo.head()
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| unavailable(format!("get HEAD: {}", e)))
    })?;
    ensure_not_cancelled(cancel)?;

    let base_tree = base.tree().map_err(|e| unavailable(format!("get base tree: {}", e)))?;
    let head_tree = head.tree().map_err(|e| unavailable(format!("get head tree: {}", e)))?;

    let mut opts = DiffOptions::new();
    let mut diff = repo
        .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), Some(&mut opts))
        .map_err(|e| unavailable(format!("get diff: {}", e)))?;
    let mut find = DiffFindOptions::new();
    find.renames(true);
    diff.find_similar(Some(&mut find))
        .map_err(|e| unavailable(format!("detect renames: {}", e)))?;

    let mut changes = Vec::new();
    for delta in diff.deltas() {
        ensure_not_cancelled(cancel)?;

        let change = match delta.status() {
            Delta::Added | Delta::Copied => FileChange::Added(delta_path(delta.new_file().path())?),
            Delta::Modified | Delta::Typechange => FileChange::Modified(delta_path(delta.new_file().path())?),
            Delta::Renamed => FileChange::Renamed {
                from: delta_path(delta.old_file().path())?,
                to: delta_path(delta.new_file().path())?,
            },
            // Deleted files cannot trigger a release
            Delta::Deleted => continue,
            Delta::Unmodified
            | Delta::Ignored
            | Delta::Untracked
            | Delta::Unreadable
            | Delta::Conflicted => continue,
        };
        changes.push(change);
    }

    Ok(DiffOutcome {
        base_commit: base.id().to_string(),
        head_commit: head.id().to_string(),
        changes,
        fallbacks,
    })
}

/// Resolves a requested revision, falling back to `default` when it is unset or unknown
fn resolve_revision<'r, F>(
    repo: &'r Repository,
    side: RevisionSide,
    requested: Option<&str>,
    fallbacks: &mut Vec<RevisionFallback>,
    default: F,
) -> Result<Commit<'r>>
where
    F: FnOnce(&'r Repository) -> std::result::Result<Commit<'r>, ReleaseError>,
{
    if let Some(revision) = requested.filter(|r| !r.is_empty()) {
        match repo.revparse_single(revision).and_then(|object| object.peel_to_commit()) {
            Ok(commit) => return Ok(commit),
            Err(e) => fallbacks.push(RevisionFallback {
                side,
                error: ReleaseError::RevisionNotFound {
                    side,
                    revision: revision.to_string(),
                    details: e.message().to_string(),
                },
            }),
        }
    }
    default(repo).map_err(anyhow::Error::from)
}

fn delta_path(path: Option<&Path>) -> Result<ChangedFile> {
    let path = path.ok_or_else(|| ReleaseError::MalformedCollaboratorOutput {
        collaborator: COLLABORATOR,
        details: "diff entry without a path".to_string(),
    })?;
    let path = path.to_str().ok_or_else(|| ReleaseError::MalformedCollaboratorOutput {
        collaborator: COLLABORATOR,
        details: format!("path is not valid UTF-8: {}", path.display()),
    })?;
    Ok(ChangedFile::new(path))
}
