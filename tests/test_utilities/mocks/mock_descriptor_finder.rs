use calculate_releases::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock DescriptorFinder backed by a fixed set of deployable entry points
#[derive(Default)]
pub struct MockDescriptorFinder {
    descriptors: HashMap<String, PathBuf>,
}

impl MockDescriptorFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `entry_point` as deployable through `<entry_point>/<file_name>`
    pub fn with_descriptor(mut self, entry_point: &str, file_name: &str) -> Self {
        self.descriptors.insert(
            entry_point.to_string(),
            PathBuf::from(format!("{}/{}", entry_point, file_name)),
        );
        self
    }
}

impl DescriptorFinder for MockDescriptorFinder {
    fn find_descriptor(&self, entry_point: &ImportPath) -> Result<Option<PathBuf>> {
        Ok(self.descriptors.get(entry_point.as_str()).cloned())
    }
}
