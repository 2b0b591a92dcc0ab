use crate::ports::outbound::DescriptorFinder;
use crate::release_planning::domain::{ImpactedRelease, ImportPath, ReverseDependencyIndex};
use crate::shared::Result;
use std::collections::BTreeSet;

/// ImpactResolver service intersecting the reverse index with changed packages
pub struct ImpactResolver;

impl ImpactResolver {
    /// Resolves the releases impacted by a set of changed packages
    ///
    /// # Arguments
    /// * `index` - Reverse dependency index for the whole module
    /// * `candidates` - Normalized changed import paths
    /// * `finder` - Locates the deployment descriptor of an entry point
    ///
    /// # Returns
    /// Impacted releases sorted by import path. Entry points without a
    /// descriptor are not deployable and are left out, as is the
    /// repository-root package.
    ///
    /// # Errors
    /// Propagates descriptor probe failures other than "not found"
    pub fn resolve<F>(
        index: &ReverseDependencyIndex,
        candidates: &[ImportPath],
        finder: &F,
    ) -> Result<Vec<ImpactedRelease>>
    where
        F: DescriptorFinder + ?Sized,
    {
        let entry_points = Self::impacted_entry_points(index, candidates);

        let mut releases = Vec::with_capacity(entry_points.len());
        for entry_point in entry_points {
            // The root package is never independently releasable
            if entry_point.is_root() {
                continue;
            }
            if let Some(descriptor) = finder.find_descriptor(entry_point)? {
                releases.push(ImpactedRelease::new(entry_point.clone(), descriptor));
            }
        }

        Ok(releases)
    }

    /// Union of every candidate's dependents, deduplicated and sorted
    pub fn impacted_entry_points<'i>(
        index: &'i ReverseDependencyIndex,
        candidates: &[ImportPath],
    ) -> BTreeSet<&'i ImportPath> {
        candidates
            .iter()
            .flat_map(|candidate| index.dependents_of(candidate))
            .collect()
    }
}
