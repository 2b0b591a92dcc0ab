/// A compilable unit reported by the package lister
///
/// `dependencies` is the lister's transitively complete dependency list, as
/// raw import paths (module-qualified, possibly `vendor/`-prefixed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    import_path: String,
    is_entry_point: bool,
    dependencies: Vec<String>,
}

impl CompilationUnit {
    pub fn new(import_path: impl Into<String>, is_entry_point: bool, dependencies: Vec<String>) -> Self {
        Self {
            import_path: import_path.into(),
            is_entry_point,
            dependencies,
        }
    }

    /// Shorthand for an executable unit
    pub fn entry_point(import_path: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self::new(import_path, true, dependencies)
    }

    /// Shorthand for a library unit
    pub fn library(import_path: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self::new(import_path, false, dependencies)
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    pub fn is_entry_point(&self) -> bool {
        self.is_entry_point
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}
