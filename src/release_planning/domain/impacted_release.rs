use super::ImportPath;
use std::path::{Path, PathBuf};

/// An entry point whose release must be triggered, with its deployment descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactedRelease {
    entry_point: ImportPath,
    descriptor_path: PathBuf,
}

impl ImpactedRelease {
    pub fn new(entry_point: ImportPath, descriptor_path: PathBuf) -> Self {
        Self {
            entry_point,
            descriptor_path,
        }
    }

    pub fn entry_point(&self) -> &ImportPath {
        &self.entry_point
    }

    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }
}
