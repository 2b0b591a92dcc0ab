use crate::ports::outbound::DescriptorFinder;
use crate::release_planning::domain::ImportPath;
use crate::shared::error::ReleaseError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File names probed, in order, inside an entry point's folder
const DESCRIPTOR_NAMES: [&str; 2] = ["deploy.yml", "deploy.yaml"];

/// FileSystemDescriptorFinder adapter probing for `deploy.yml` / `deploy.yaml`
pub struct FileSystemDescriptorFinder {
    repo_root: PathBuf,
}

impl FileSystemDescriptorFinder {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// Folder holding the entry point's files, relative when the root is `.`
    fn unit_dir(&self, entry_point: &ImportPath) -> PathBuf {
        if self.repo_root == Path::new(".") {
            PathBuf::from(entry_point.as_str())
        } else {
            self.repo_root.join(entry_point.as_str())
        }
    }
}

impl DescriptorFinder for FileSystemDescriptorFinder {
    fn find_descriptor(&self, entry_point: &ImportPath) -> Result<Option<PathBuf>> {
        let dir = self.unit_dir(entry_point);
        let mut probe_failure = None;

        for name in DESCRIPTOR_NAMES {
            let candidate = dir.join(name);
            match fs::metadata(&candidate) {
                Ok(_) => return Ok(Some(candidate)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    probe_failure.get_or_insert(ReleaseError::FilesystemProbeError {
                        path: candidate,
                        details: e.to_string(),
                    });
                }
            }
        }

        match probe_failure {
            Some(err) => Err(err.into()),
            None => Ok(None),
        }
    }
}
