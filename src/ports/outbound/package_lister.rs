use crate::release_planning::domain::CompilationUnit;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// PackageLister port for enumerating every compilable unit under a module root
#[async_trait]
pub trait PackageLister: Send + Sync {
    /// Lists all packages with their entry-point flag and transitive dependencies
    ///
    /// # Errors
    /// Returns an error if:
    /// - The toolchain cannot be executed or exits unsuccessfully
    /// - Its output cannot be parsed
    /// - The operation is cancelled; the child process is killed
    async fn list_packages(
        &self,
        module_root: &Path,
        cancel: &CancellationToken,
    ) -> Result<Vec<CompilationUnit>>;
}
