use crate::shared::error::ReleaseError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Validates that an existing path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` so the link itself is
/// checked rather than its target. A path that does not exist yet is accepted.
///
/// # Errors
/// Returns an error if the path is a symbolic link or its metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates the repository root handed in on the command line
///
/// # Errors
/// Returns [`ReleaseError::InvalidRepoRoot`] if the path:
/// - does not exist
/// - is a symbolic link
/// - is not a directory
pub fn validate_repository_root(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| ReleaseError::InvalidRepoRoot {
        path: path.to_path_buf(),
        reason: if e.kind() == io::ErrorKind::NotFound {
            "Directory does not exist".to_string()
        } else {
            format!("Failed to read path metadata: {}", e)
        },
    })?;

    if metadata.is_symlink() {
        return Err(ReleaseError::InvalidRepoRoot {
            path: path.to_path_buf(),
            reason: "Security: Repository root is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(ReleaseError::InvalidRepoRoot {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
