use async_trait::async_trait;
use calculate_releases::prelude::*;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Mock PackageLister returning a fixed package list for a module
pub struct MockPackageLister {
    module_name: String,
    units: Vec<CompilationUnit>,
}

impl MockPackageLister {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            units: Vec::new(),
        }
    }

    /// Adds an entry point; `deps` are module-relative unless their first element has a dot
    pub fn with_entry_point(mut self, path: &str, deps: &[&str]) -> Self {
        let unit = CompilationUnit::entry_point(self.qualify(path), self.qualify_all(deps));
        self.units.push(unit);
        self
    }

    pub fn with_library(mut self, path: &str, deps: &[&str]) -> Self {
        let unit = CompilationUnit::library(self.qualify(path), self.qualify_all(deps));
        self.units.push(unit);
        self
    }

    /// Adds a dependency reported exactly as given, e.g. a standard-library package
    pub fn with_raw_dependency(mut self, entry_point: &str, dep: &str) -> Self {
        let qualified = self.qualify(entry_point);
        if let Some(unit) = self.units.iter_mut().find(|u| u.import_path() == qualified) {
            let mut deps = unit.dependencies().to_vec();
            deps.push(dep.to_string());
            *unit = CompilationUnit::new(qualified, unit.is_entry_point(), deps);
        }
        self
    }

    fn qualify(&self, path: &str) -> String {
        if path == "." {
            self.module_name.clone()
        } else if path.split('/').next().is_some_and(|first| first.contains('.')) {
            path.to_string()
        } else {
            format!("{}/{}", self.module_name, path)
        }
    }

    fn qualify_all(&self, deps: &[&str]) -> Vec<String> {
        deps.iter().map(|d| self.qualify(d)).collect()
    }
}

#[async_trait]
impl PackageLister for MockPackageLister {
    async fn list_packages(
        &self,
        _module_root: &Path,
        cancel: &CancellationToken,
    ) -> Result<Vec<CompilationUnit>> {
        if cancel.is_cancelled() {
            return Err(ReleaseError::Cancelled.into());
        }
        Ok(self.units.clone())
    }
}
