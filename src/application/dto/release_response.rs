use crate::release_planning::domain::{ChangedFile, ImpactedRelease, ImportPath};

/// ReleaseResponse - Internal response DTO from the release calculation use case
#[derive(Debug, Clone)]
pub struct ReleaseResponse {
    /// Commit id the diff started from
    pub base_commit: String,
    /// Commit id the diff ended at
    pub head_commit: String,
    /// Changed files as fed to the normalizer
    pub changed_files: Vec<ChangedFile>,
    /// Distinct folders containing a changed file
    pub changed_folders: Vec<String>,
    /// Candidate packages after normalization
    pub changed_packages: Vec<ImportPath>,
    /// Releases to trigger, sorted by import path
    pub releases: Vec<ImpactedRelease>,
}

impl ReleaseResponse {
    /// Renders the build manifest: one descriptor path per line, no header
    pub fn manifest(&self) -> String {
        self.releases
            .iter()
            .map(|release| format!("{}\n", release.descriptor_path().display()))
            .collect()
    }
}
