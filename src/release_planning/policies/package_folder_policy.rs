use crate::release_planning::domain::ImportPath;
use crate::shared::error::ReleaseError;
use crate::shared::Result;

/// Root of the vendored third-party tree
const VENDOR_ROOT: &str = "vendor";

/// CI and repository-metadata folders that never hold Go packages
const DEFAULT_IGNORED_FOLDERS: &[&str] = &[".circleci", ".dependabot", ".github", ".github/workflows"];

/// Maximum number of extra ignored folders accepted from configuration
const MAX_IGNORED_FOLDERS: usize = 64;

/// Outcome of mapping a changed folder to a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderDecision {
    /// The folder names this package
    Package(ImportPath),
    /// The folder is the repository root, which is not a package
    RepositoryRoot,
    /// The folder is the vendor tree root
    VendorRoot,
    /// The folder is on the denylist
    Ignored,
}

/// PackageFolderPolicy encodes which changed folders can name a package
///
/// Rules, in order:
/// 1. `.` is the repository root and is dropped
/// 2. `vendor` itself is dropped
/// 3. exact matches of the denylist are dropped
/// 4. `vendor/<path>` maps to `<path>`, matching how dependencies are recorded
/// 5. any other folder is its own import path
#[derive(Debug, Clone)]
pub struct PackageFolderPolicy {
    ignored: Vec<String>,
}

impl PackageFolderPolicy {
    /// Creates the policy with the built-in denylist plus `extra_ignored`
    ///
    /// # Errors
    /// - Too many extra folders (> MAX_IGNORED_FOLDERS)
    /// - An empty folder name
    pub fn new(extra_ignored: Vec<String>) -> Result<Self> {
        if extra_ignored.len() > MAX_IGNORED_FOLDERS {
            return Err(ReleaseError::Validation {
                message: format!(
                    "Too many ignored folders: {} (maximum: {})",
                    extra_ignored.len(),
                    MAX_IGNORED_FOLDERS
                ),
            }
            .into());
        }

        let mut ignored: Vec<String> = DEFAULT_IGNORED_FOLDERS.iter().map(|f| f.to_string()).collect();
        for folder in extra_ignored {
            let folder = folder.trim().trim_end_matches('/').to_string();
            if folder.is_empty() {
                return Err(ReleaseError::Validation {
                    message: "Ignored folder names must not be empty".to_string(),
                }
                .into());
            }
            if !ignored.contains(&folder) {
                ignored.push(folder);
            }
        }

        Ok(Self { ignored })
    }

    /// Maps a changed folder to a package, or the reason it is not one
    ///
    /// Folders that cannot be import paths (e.g. containing spaces) are
    /// treated as ignored, since no Go package can live there.
    pub fn decide(&self, folder: &str) -> FolderDecision {
        if folder == "." {
            return FolderDecision::RepositoryRoot;
        }
        if folder == VENDOR_ROOT {
            return FolderDecision::VendorRoot;
        }
        if self.ignored.iter().any(|f| f == folder) {
            return FolderDecision::Ignored;
        }

        let package = folder
            .strip_prefix(VENDOR_ROOT)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(folder);
        ImportPath::new(package)
            .map(FolderDecision::Package)
            .unwrap_or(FolderDecision::Ignored)
    }

    /// Effective denylist, built-in folders first
    pub fn ignored_folders(&self) -> &[String] {
        &self.ignored
    }
}

impl Default for PackageFolderPolicy {
    fn default() -> Self {
        Self {
            ignored: DEFAULT_IGNORED_FOLDERS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(p: &str) -> FolderDecision {
        FolderDecision::Package(ImportPath::new(p).unwrap())
    }

    #[test]
    fn test_root_folder_is_dropped() {
        let policy = PackageFolderPolicy::default();
        assert_eq!(policy.decide("."), FolderDecision::RepositoryRoot);
    }

    #[test]
    fn test_vendor_root_is_dropped() {
        let policy = PackageFolderPolicy::default();
        assert_eq!(policy.decide("vendor"), FolderDecision::VendorRoot);
    }

    #[test]
    fn test_ci_folders_are_dropped_by_exact_match() {
        let policy = PackageFolderPolicy::default();
        assert_eq!(policy.decide(".github"), FolderDecision::Ignored);
        assert_eq!(policy.decide(".github/workflows"), FolderDecision::Ignored);
        assert_eq!(policy.decide(".circleci"), FolderDecision::Ignored);
        assert_eq!(policy.decide(".dependabot"), FolderDecision::Ignored);
        // Not an exact match
        assert_eq!(policy.decide(".github/actions/lint"), package(".github/actions/lint"));
    }

    #[test]
    fn test_vendor_prefix_is_stripped() {
        let policy = PackageFolderPolicy::default();
        assert_eq!(
            policy.decide("vendor/github.com/example/pkg"),
            package("github.com/example/pkg")
        );
    }

    #[test]
    fn test_folder_named_like_vendor_is_kept() {
        let policy = PackageFolderPolicy::default();
        assert_eq!(policy.decide("vendored/x"), package("vendored/x"));
    }

    #[test]
    fn test_regular_folder_is_package() {
        let policy = PackageFolderPolicy::default();
        assert_eq!(policy.decide("cmd/user-api"), package("cmd/user-api"));
    }

    #[test]
    fn test_folder_with_space_is_ignored() {
        let policy = PackageFolderPolicy::default();
        assert_eq!(policy.decide("docs/release notes"), FolderDecision::Ignored);
    }

    #[test]
    fn test_extra_ignored_folders() {
        let policy = PackageFolderPolicy::new(vec![".buildkite/".to_string()]).unwrap();
        assert_eq!(policy.decide(".buildkite"), FolderDecision::Ignored);
        assert_eq!(policy.ignored_folders().len(), DEFAULT_IGNORED_FOLDERS.len() + 1);
    }

    #[test]
    fn test_empty_extra_folder_is_rejected() {
        let err = PackageFolderPolicy::new(vec!["  ".to_string()]).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_too_many_extra_folders() {
        let folders = (0..=MAX_IGNORED_FOLDERS).map(|i| format!("dir{}", i)).collect();
        let err = PackageFolderPolicy::new(folders).unwrap_err();
        assert!(err.to_string().contains("Too many ignored folders"));
    }
}
