use calculate_releases::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ManifestWriter that keeps the last manifest in memory
#[derive(Default, Clone)]
pub struct MockManifestWriter {
    written: Arc<Mutex<Option<String>>>,
    should_fail: bool,
}

impl MockManifestWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// The manifest contents, or `None` if nothing was written
    pub fn written(&self) -> Option<String> {
        self.written.lock().unwrap().clone()
    }
}

impl ManifestWriter for MockManifestWriter {
    fn write_manifest(&self, contents: &str) -> Result<()> {
        if self.should_fail {
            return Err(ReleaseError::OutputWriteError {
                path: "builds.txt".into(),
                details: "Permission denied".to_string(),
            }
            .into());
        }
        *self.written.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }
}
