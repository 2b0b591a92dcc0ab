use crate::release_planning::domain::{CompilationUnit, ImportPath, ReverseDependencyIndex};
use crate::shared::error::ReleaseError;
use crate::shared::Result;

/// Prefix the standard library uses for packages it vendors itself
const VENDOR_PREFIX: &str = "vendor/";

/// ReverseGraphBuilder service for inverting the package lister's dependency data
///
/// The lister's dependency lists are already transitively complete, so one
/// pass over the entry points is enough: no recursive traversal is needed.
pub struct ReverseGraphBuilder;

impl ReverseGraphBuilder {
    /// Builds the reverse index of entry-point dependents
    ///
    /// # Arguments
    /// * `units` - Every compilable unit in the module
    /// * `module_name` - Module identity prefix stripped from local import paths
    ///
    /// # Returns
    /// A ReverseDependencyIndex holding a self-entry for every entry point and
    /// an entry for every local or hostname-qualified dependency of one
    ///
    /// # Errors
    /// Returns `MalformedCollaboratorOutput` if the lister reported an import
    /// path that is not a valid ImportPath
    pub fn build(units: &[CompilationUnit], module_name: &str) -> Result<ReverseDependencyIndex> {
        let mut index = ReverseDependencyIndex::new();

        for unit in units.iter().filter(|u| u.is_entry_point()) {
            let entry_point = Self::import_path(Self::localize(unit.import_path(), module_name))?;

            // So that a change to the entry point's own files still releases it
            index.register(entry_point.clone(), entry_point.clone());

            for dep in unit.dependencies() {
                if let Some(dependency) = Self::tracked_dependency(dep, module_name) {
                    index.register(Self::import_path(dependency)?, entry_point.clone());
                }
            }
        }

        Ok(index)
    }

    fn import_path(raw: &str) -> Result<ImportPath> {
        ImportPath::new(raw).map_err(|e| {
            ReleaseError::MalformedCollaboratorOutput {
                collaborator: "go list",
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Maps a raw dependency import path to the key changes are matched against
    ///
    /// Returns `None` for standard-library packages, which never change with
    /// the repository.
    fn tracked_dependency<'a>(dep: &'a str, module_name: &str) -> Option<&'a str> {
        let dep = dep.strip_prefix(VENDOR_PREFIX).unwrap_or(dep);

        if Self::is_local(dep, module_name) {
            return Some(Self::localize(dep, module_name));
        }

        // Third-party imports carry a hostname in the first element; when
        // vendored they live under vendor/<dep> and match the stripped folder
        let first = dep.split('/').next().unwrap_or_default();
        first.contains('.').then_some(dep)
    }

    fn is_local(import_path: &str, module_name: &str) -> bool {
        match import_path.strip_prefix(module_name) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Strips the module prefix from a local import path; the module itself maps to `.`
    fn localize<'a>(import_path: &'a str, module_name: &str) -> &'a str {
        if !Self::is_local(import_path, module_name) {
            return import_path;
        }
        match import_path[module_name.len()..].trim_start_matches('/') {
            "" => ".",
            rest => rest,
        }
    }
}
