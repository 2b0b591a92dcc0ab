use crate::shared::Result;

/// ManifestWriter port for persisting the build manifest
///
/// The manifest is consumed by the downstream build stage, so an
/// implementation must never leave a partially written manifest behind.
pub trait ManifestWriter {
    /// Writes the complete manifest contents, replacing any previous manifest
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination directory does not exist
    /// - The destination is a symbolic link
    /// - Writing or persisting the file fails
    fn write_manifest(&self, contents: &str) -> Result<()>;
}
