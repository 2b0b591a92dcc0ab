use crate::ports::outbound::PackageLister;
use crate::release_planning::domain::CompilationUnit;
use crate::shared::error::ReleaseError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

const COLLABORATOR: &str = "go list";

/// Package name Go gives to executables
const MAIN_PACKAGE: &str = "main";

/// Subset of a `go list -json` package object
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoListPackage {
    import_path: String,
    #[serde(default)]
    name: String,
    /// Transitively complete, including the standard library
    #[serde(default)]
    deps: Vec<String>,
}

/// GoPackageLister adapter running `go list -json ./...`
///
/// The child process is killed when the run is cancelled.
#[derive(Debug, Clone)]
pub struct GoPackageLister {
    go_binary: PathBuf,
}

impl GoPackageLister {
    pub fn new(go_binary: impl Into<PathBuf>) -> Self {
        Self {
            go_binary: go_binary.into(),
        }
    }

    /// Decodes the concatenated JSON objects `go list -json` prints
    fn parse(stdout: &[u8]) -> Result<Vec<CompilationUnit>> {
        serde_json::Deserializer::from_slice(stdout)
            .into_iter::<GoListPackage>()
            .map(|package| {
                let package = package.map_err(|e| ReleaseError::MalformedCollaboratorOutput {
                    collaborator: COLLABORATOR,
                    details: e.to_string(),
                })?;
                Ok(CompilationUnit::new(
                    package.import_path,
                    package.name == MAIN_PACKAGE,
                    package.deps,
                ))
            })
            .collect()
    }
}

impl Default for GoPackageLister {
    fn default() -> Self {
        Self::new("go")
    }
}

#[async_trait]
impl PackageLister for GoPackageLister {
    async fn list_packages(
        &self,
        module_root: &Path,
        cancel: &CancellationToken,
    ) -> Result<Vec<CompilationUnit>> {
        let child = Command::new(&self.go_binary)
            .args(["list", "-json", "./..."])
            .current_dir(module_root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ReleaseError::CollaboratorUnavailable {
                collaborator: COLLABORATOR,
                details: format!("run {}: {}", self.go_binary.display(), e),
            })?;

        // Losing the race drops the child, which kills it
        let output = tokio::select! {
            _ = cancel.cancelled() => return Err(ReleaseError::Cancelled.into()),
            output = child.wait_with_output() => output.map_err(|e| ReleaseError::CollaboratorUnavailable {
                collaborator: COLLABORATOR,
                details: format!("wait for {}: {}", self.go_binary.display(), e),
            })?,
        };

        if !output.status.success() {
            return Err(ReleaseError::CollaboratorUnavailable {
                collaborator: COLLABORATOR,
                details: format!(
                    "{} exited with {}: {}",
                    self.go_binary.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            }
            .into());
        }

        Self::parse(&output.stdout)
    }
}
