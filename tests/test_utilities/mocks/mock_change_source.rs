use async_trait::async_trait;
use calculate_releases::prelude::*;
use calculate_releases::shared::error::RevisionSide;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Mock ChangeSource returning a fixed set of changes
///
/// A requested base revision listed in `unknown_revisions` is reported as a
/// fallback, as the git adapter does.
#[derive(Default)]
pub struct MockChangeSource {
    changes: Vec<FileChange>,
    unknown_revisions: Vec<String>,
    received: Arc<Mutex<Option<RevisionRange>>>,
}

impl MockChangeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modified(mut self, path: &str) -> Self {
        self.changes.push(FileChange::Modified(ChangedFile::new(path)));
        self
    }

    pub fn with_added(mut self, path: &str) -> Self {
        self.changes.push(FileChange::Added(ChangedFile::new(path)));
        self
    }

    pub fn with_renamed(mut self, from: &str, to: &str) -> Self {
        self.changes.push(FileChange::Renamed {
            from: ChangedFile::new(from),
            to: ChangedFile::new(to),
        });
        self
    }

    pub fn with_unknown_revision(mut self, revision: &str) -> Self {
        self.unknown_revisions.push(revision.to_string());
        self
    }

    /// Handle to the revision range of the last call
    pub fn received(&self) -> Arc<Mutex<Option<RevisionRange>>> {
        Arc::clone(&self.received)
    }
}

#[async_trait]
impl ChangeSource for MockChangeSource {
    async fn changed_files(
        &self,
        _repo_root: &Path,
        range: &RevisionRange,
        cancel: &CancellationToken,
    ) -> Result<DiffOutcome> {
        if cancel.is_cancelled() {
            return Err(ReleaseError::Cancelled.into());
        }
        *self.received.lock().unwrap() = Some(range.clone());

        let fallbacks = range
            .base
            .iter()
            .filter(|base| self.unknown_revisions.contains(base))
            .map(|base| RevisionFallback {
                side: RevisionSide::Base,
                error: ReleaseError::RevisionNotFound {
                    side: RevisionSide::Base,
                    revision: base.clone(),
                    details: "revspec not found".to_string(),
                },
            })
            .collect();

        Ok(DiffOutcome {
            base_commit: "0123456789abcdef0123456789abcdef01234567".to_string(),
            head_commit: "89abcdef0123456789abcdef0123456789abcdef".to_string(),
            changes: self.changes.clone(),
            fallbacks,
        })
    }
}
