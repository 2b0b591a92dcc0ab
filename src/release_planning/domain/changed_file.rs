/// A repository-relative path, always using `/` as separator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChangedFile(String);

impl ChangedFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Containing folder of the file, `.` for files at the repository root
    pub fn folder(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((dir, _)) if !dir.is_empty() => dir,
            _ => ".",
        }
    }
}

impl std::fmt::Display for ChangedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single non-deleting change reported by the version-control diff
///
/// Deletions never reach the domain: a removed file cannot trigger a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Added(ChangedFile),
    Modified(ChangedFile),
    Renamed { from: ChangedFile, to: ChangedFile },
}

impl FileChange {
    /// The path the file has at the head revision
    pub fn path(&self) -> &ChangedFile {
        match self {
            FileChange::Added(path) | FileChange::Modified(path) => path,
            FileChange::Renamed { to, .. } => to,
        }
    }

    /// The pre-rename path, if this change is a rename
    pub fn rename_source(&self) -> Option<&ChangedFile> {
        match self {
            FileChange::Renamed { from, .. } => Some(from),
            _ => None,
        }
    }
}
