use crate::release_planning::domain::{ChangedFile, ImportPath};
use crate::release_planning::policies::{FolderDecision, PackageFolderPolicy};
use std::collections::HashSet;

/// Folders and candidate packages derived from a set of changed files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedChanges {
    /// Distinct containing folders, in first-seen order
    pub folders: Vec<String>,
    /// Distinct candidate import paths, in first-seen order
    pub packages: Vec<ImportPath>,
}

/// ChangeNormalizer service mapping changed files to candidate import paths
///
/// A folder is a package's identity in this repository layout, so the
/// candidate for a file is its containing folder after
/// [`PackageFolderPolicy`] has been applied.
pub struct ChangeNormalizer<'a> {
    policy: &'a PackageFolderPolicy,
}

impl<'a> ChangeNormalizer<'a> {
    pub fn new(policy: &'a PackageFolderPolicy) -> Self {
        Self { policy }
    }

    pub fn normalize(&self, changed_files: &[ChangedFile]) -> NormalizedChanges {
        let folders = Self::folders(changed_files);

        let mut seen = HashSet::new();
        let packages = folders
            .iter()
            .filter_map(|folder| match self.policy.decide(folder) {
                FolderDecision::Package(package) => Some(package),
                FolderDecision::RepositoryRoot
                | FolderDecision::VendorRoot
                | FolderDecision::Ignored => None,
            })
            .filter(|package| seen.insert(package.clone()))
            .collect();

        NormalizedChanges { folders, packages }
    }

    /// Distinct containing folders, preserving first-seen order
    fn folders(changed_files: &[ChangedFile]) -> Vec<String> {
        let mut seen = HashSet::new();
        changed_files
            .iter()
            .map(ChangedFile::folder)
            .filter(|folder| seen.insert(*folder))
            .map(str::to_string)
            .collect()
    }
}
