use crate::ports::outbound::ManifestWriter;
use crate::shared::error::ReleaseError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Mode requested for a new manifest, before the umask applies
#[cfg(unix)]
const NEW_MANIFEST_MODE: u32 = 0o666;

/// FileSystemManifestWriter adapter for writing the build manifest
///
/// Contents go to a temporary file next to the target which is then renamed
/// over it, so readers only ever see a complete manifest. A replaced manifest
/// keeps its permissions; a new one gets the mode a plain create would.
pub struct FileSystemManifestWriter {
    output_path: PathBuf,
}

impl FileSystemManifestWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        ReleaseError::OutputWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Directory the temporary file is created in
    fn parent_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        let parent = self.parent_directory();
        if !parent.is_dir() {
            return Err(self.write_error(format!(
                "Parent directory does not exist: {}",
                parent.display()
            )));
        }
        Ok(())
    }

    /// Creates the temporary file with the permissions the manifest should end up with
    fn create_temp_file(&self) -> std::io::Result<NamedTempFile> {
        let existing = match fs::metadata(&self.output_path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e),
        };

        #[cfg_attr(not(unix), allow(unused_mut))]
        let mut builder = Builder::new();
        #[cfg(unix)]
        if existing.is_none() {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(NEW_MANIFEST_MODE));
        }
        let temp = builder.tempfile_in(self.parent_directory())?;

        // Applied after creation so the umask does not narrow the copied mode
        if let Some(permissions) = existing {
            temp.as_file().set_permissions(permissions)?;
        }
        Ok(temp)
    }
}

impl ManifestWriter for FileSystemManifestWriter {
    fn write_manifest(&self, contents: &str) -> Result<()> {
        self.validate_parent_directory()?;
        validate_not_symlink(&self.output_path, "write").map_err(|e| self.write_error(e.to_string()))?;

        let mut temp = self
            .create_temp_file()
            .map_err(|e| self.write_error(format!("Failed to create temporary file: {}", e)))?;
        temp.write_all(contents.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| self.write_error(e.to_string()))?;

        // Dropping the temp file on an error path removes it
        temp.persist(&self.output_path)
            .map_err(|e| self.write_error(format!("Failed to persist manifest: {}", e.error)))?;

        Ok(())
    }
}
