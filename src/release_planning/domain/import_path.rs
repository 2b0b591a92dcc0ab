use crate::shared::Result;

/// Maximum length for import paths (security limit)
const MAX_IMPORT_PATH_LENGTH: usize = 1024;

/// Import path of the repository-root package
const ROOT: &str = ".";

/// NewType wrapper for a repository-relative import path with validation
///
/// Local packages are stored with the module prefix already stripped, so an
/// import path doubles as the folder that holds the package's files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportPath(String);

impl ImportPath {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            anyhow::bail!("Import path cannot be empty");
        }

        // Security: Length limit to prevent DoS
        if path.len() > MAX_IMPORT_PATH_LENGTH {
            anyhow::bail!(
                "Import path is too long ({} bytes). Maximum allowed: {} bytes",
                path.len(),
                MAX_IMPORT_PATH_LENGTH
            );
        }

        if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Import path {:?} contains whitespace or control characters",
                path
            );
        }

        Ok(Self(path))
    }

    /// The repository-root package, which is never independently releasable
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImportPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
