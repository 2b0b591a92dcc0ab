use crate::release_planning::domain::ImportPath;
use crate::shared::Result;
use std::path::PathBuf;

/// DescriptorFinder port for locating an entry point's deployment descriptor
pub trait DescriptorFinder {
    /// Returns the descriptor path, or `None` when the entry point has none
    ///
    /// # Errors
    /// Returns an error if probing fails for a reason other than the file
    /// not existing (e.g. permission denied)
    fn find_descriptor(&self, entry_point: &ImportPath) -> Result<Option<PathBuf>>;
}
