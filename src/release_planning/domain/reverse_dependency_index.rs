use super::ImportPath;
use std::collections::{HashMap, HashSet};

/// Dependents of one package: a set that remembers insertion order
#[derive(Debug, Clone, Default)]
struct Dependents {
    ordered: Vec<ImportPath>,
    members: HashSet<ImportPath>,
}

impl Dependents {
    fn insert(&mut self, dependent: ImportPath) {
        if self.members.insert(dependent.clone()) {
            self.ordered.push(dependent);
        }
    }
}

/// ReverseDependencyIndex aggregate mapping a package to the entry points that depend on it
///
/// Every entry point is registered as a dependent of itself. Dependents are
/// kept as a set in first-seen order so logs stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct ReverseDependencyIndex {
    dependents: HashMap<ImportPath, Dependents>,
}

impl ReverseDependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `dependent` is affected by changes to `dependency`
    ///
    /// Registering the same pair twice is a no-op.
    pub fn register(&mut self, dependency: ImportPath, dependent: ImportPath) {
        self.dependents.entry(dependency).or_default().insert(dependent);
    }

    /// Entry points depending on `path`; empty when nothing was registered for it
    pub fn dependents_of(&self, path: &ImportPath) -> &[ImportPath] {
        self.dependents
            .get(path)
            .map(|d| d.ordered.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, path: &ImportPath) -> bool {
        self.dependents.contains_key(path)
    }

    /// Number of distinct packages with at least one dependent
    pub fn package_count(&self) -> usize {
        self.dependents.len()
    }

    /// Number of distinct entry points, counted by their self-entries
    pub fn entry_point_count(&self) -> usize {
        self.dependents
            .iter()
            .filter(|(path, dependents)| dependents.members.contains(*path))
            .count()
    }

    /// True when the module has no entry points, so nothing can be released
    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}
