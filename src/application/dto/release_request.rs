use crate::ports::outbound::RevisionRange;
use crate::shared::error::ReleaseError;
use crate::shared::Result;
use std::path::PathBuf;

/// Module identity of the monorepo this tool was written for
pub const DEFAULT_MODULE_NAME: &str = "github.com/uw-labs/go-mono";

/// Reference the base revision defaults to
pub const DEFAULT_PRIMARY_BRANCH: &str = "master";

/// ReleaseRequest - Internal request DTO for the release calculation use case
#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    /// Repository root; also the module root `go list` runs in
    pub repo_root: PathBuf,
    /// Module identity prefix stripped from local import paths
    pub module_name: String,
    /// Revisions to diff
    pub revisions: RevisionRange,
    /// Folders dropped in addition to the built-in denylist
    pub ignore_folders: Vec<String>,
    /// Whether the pre-rename path of a renamed file also counts as changed
    pub include_rename_sources: bool,
    /// Resolve and report releases without writing the manifest
    pub dry_run: bool,
}

impl ReleaseRequest {
    pub fn builder() -> ReleaseRequestBuilder {
        ReleaseRequestBuilder::default()
    }
}

/// Builder for [`ReleaseRequest`]
#[derive(Debug, Default)]
pub struct ReleaseRequestBuilder {
    repo_root: Option<PathBuf>,
    module_name: Option<String>,
    base: Option<String>,
    head: Option<String>,
    primary_branch: Option<String>,
    ignore_folders: Vec<String>,
    include_rename_sources: bool,
    dry_run: bool,
}

impl ReleaseRequestBuilder {
    pub fn repo_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.repo_root = Some(path.into());
        self
    }

    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    pub fn base(mut self, revision: Option<String>) -> Self {
        self.base = revision;
        self
    }

    pub fn head(mut self, revision: Option<String>) -> Self {
        self.head = revision;
        self
    }

    pub fn primary_branch(mut self, reference: impl Into<String>) -> Self {
        self.primary_branch = Some(reference.into());
        self
    }

    pub fn ignore_folders(mut self, folders: Vec<String>) -> Self {
        self.ignore_folders = folders;
        self
    }

    pub fn include_rename_sources(mut self, include: bool) -> Self {
        self.include_rename_sources = include;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns [`ReleaseError::Validation`] if the module name or primary
    /// branch is empty, or a supplied revision is blank
    pub fn build(self) -> Result<ReleaseRequest> {
        let module_name = self
            .module_name
            .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string());
        let module_name = module_name.trim().trim_end_matches('/').to_string();
        if module_name.is_empty() {
            return Err(validation("module name must not be empty"));
        }

        let primary_branch = self
            .primary_branch
            .unwrap_or_else(|| DEFAULT_PRIMARY_BRANCH.to_string());
        if primary_branch.trim().is_empty() {
            return Err(validation("primary branch must not be empty"));
        }

        Ok(ReleaseRequest {
            repo_root: self.repo_root.unwrap_or_else(|| PathBuf::from(".")),
            module_name,
            revisions: RevisionRange {
                base: non_blank(self.base, "base")?,
                head: non_blank(self.head, "head")?,
                primary_branch,
            },
            ignore_folders: self.ignore_folders,
            include_rename_sources: self.include_rename_sources,
            dry_run: self.dry_run,
        })
    }
}

fn validation(message: &str) -> anyhow::Error {
    ReleaseError::Validation {
        message: message.to_string(),
    }
    .into()
}

fn non_blank(revision: Option<String>, side: &str) -> Result<Option<String>> {
    match revision {
        Some(r) if r.trim().is_empty() => Err(validation(&format!("{} revision must not be blank", side))),
        other => Ok(other),
    }
}
