use crate::application::dto::{ReleaseRequest, ReleaseResponse};
use crate::ports::outbound::{
    ChangeSource, DescriptorFinder, DiffOutcome, ManifestWriter, PackageLister, ProgressReporter,
};
use crate::release_planning::domain::{
    ChangedFile, FileChange, ImpactedRelease, ReverseDependencyIndex,
};
use crate::release_planning::policies::PackageFolderPolicy;
use crate::release_planning::services::{
    ChangeNormalizer, ImpactResolver, NormalizedChanges, ReverseGraphBuilder,
};
use crate::shared::error::ReleaseError;
use crate::shared::Result;
use anyhow::Context;
use tokio_util::sync::CancellationToken;

/// CalculateReleasesUseCase - Core use case for change-impact resolution
///
/// This use case orchestrates the release calculation workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CS` - ChangeSource implementation
/// * `PL` - PackageLister implementation
/// * `DF` - DescriptorFinder implementation
/// * `MW` - ManifestWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct CalculateReleasesUseCase<CS, PL, DF, MW, PR> {
    change_source: CS,
    package_lister: PL,
    descriptor_finder: DF,
    manifest_writer: MW,
    progress_reporter: PR,
}

impl<CS, PL, DF, MW, PR> CalculateReleasesUseCase<CS, PL, DF, MW, PR>
where
    CS: ChangeSource,
    PL: PackageLister,
    DF: DescriptorFinder,
    MW: ManifestWriter,
    PR: ProgressReporter,
{
    /// Creates a new CalculateReleasesUseCase with injected dependencies
    pub fn new(
        change_source: CS,
        package_lister: PL,
        descriptor_finder: DF,
        manifest_writer: MW,
        progress_reporter: PR,
    ) -> Self {
        Self {
            change_source,
            package_lister,
            descriptor_finder,
            manifest_writer,
            progress_reporter,
        }
    }

    /// Executes the release calculation use case
    ///
    /// # Arguments
    /// * `request` - Repository location, module identity and revisions to compare
    /// * `cancel` - Fired on SIGINT/SIGTERM; aborts the run before the manifest is written
    ///
    /// # Returns
    /// ReleaseResponse with the intermediate change sets and the impacted releases
    ///
    /// # Errors
    /// Every stage failure is fatal. The manifest is only written once all
    /// stages have succeeded, so a failed run leaves the previous one intact.
    pub async fn execute(
        &self,
        request: ReleaseRequest,
        cancel: &CancellationToken,
    ) -> Result<ReleaseResponse> {
        let policy = PackageFolderPolicy::new(request.ignore_folders.clone())?;
        self.report_list(
            "ignored folders",
            policy.ignored_folders().iter().map(String::as_str),
        );

        // Step 1: Invert the package graph
        let index = self
            .build_reverse_index(&request, cancel)
            .await
            .context("get reverse dependencies")?;

        // Step 2: Diff the revisions
        let diff = self
            .read_changes(&request, cancel)
            .await
            .context("get changed files")?;
        let changed_files = Self::changed_paths(&diff.changes, request.include_rename_sources);
        self.report_list("changed files", changed_files.iter().map(ChangedFile::as_str));

        // Step 3: Map files to candidate packages
        let NormalizedChanges { folders, packages } =
            ChangeNormalizer::new(&policy).normalize(&changed_files);
        self.report_list("changed folders", folders.iter().map(String::as_str));
        self.report_list("changed packages", packages.iter().map(|p| p.as_str()));

        // Step 4: Resolve impacted entry points
        let releases = ImpactResolver::resolve(&index, &packages, &self.descriptor_finder)
            .context("resolve releases")?;
        self.report_releases(&releases);

        if cancel.is_cancelled() {
            return Err(ReleaseError::Cancelled.into());
        }

        let response = ReleaseResponse {
            base_commit: diff.base_commit,
            head_commit: diff.head_commit,
            changed_files,
            changed_folders: folders,
            changed_packages: packages,
            releases,
        };

        // Step 5: Write the manifest
        if request.dry_run {
            self.progress_reporter.report_completion(&format!(
                "✅ Dry run: {} release(s) resolved, build manifest not written",
                response.releases.len()
            ));
        } else {
            self.manifest_writer
                .write_manifest(&response.manifest())
                .context("write build manifest")?;
            self.progress_reporter.report_completion(&format!(
                "✅ Wrote {} release(s) to the build manifest",
                response.releases.len()
            ));
        }

        Ok(response)
    }

    /// Lists the module's packages and builds the reverse dependency index
    async fn build_reverse_index(
        &self,
        request: &ReleaseRequest,
        cancel: &CancellationToken,
    ) -> Result<ReverseDependencyIndex> {
        self.progress_reporter.begin_step(&format!(
            "📦 Listing packages in {}",
            request.repo_root.display()
        ));
        let units = self
            .package_lister
            .list_packages(&request.repo_root, cancel)
            .await;
        self.progress_reporter.end_step();
        let units = units?;

        let index = ReverseGraphBuilder::build(&units, &request.module_name)?;
        self.progress_reporter.report(&format!(
            "🔗 Indexed {} package(s) used by {} entry point(s)",
            index.package_count(),
            index.entry_point_count()
        ));
        if index.is_empty() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  No entry points found in module {}; no release can be triggered",
                request.module_name
            ));
        }

        Ok(index)
    }

    /// Diffs the requested revisions, reporting any fallback to a default
    async fn read_changes(
        &self,
        request: &ReleaseRequest,
        cancel: &CancellationToken,
    ) -> Result<DiffOutcome> {
        let diff = self
            .change_source
            .changed_files(&request.repo_root, &request.revisions, cancel)
            .await?;

        for fallback in &diff.fallbacks {
            self.progress_reporter.report_warning(&format!(
                "⚠️  {}; falling back to the default {} revision",
                fallback.error, fallback.side
            ));
        }
        self.progress_reporter.report(&format!(
            "🔍 Comparing {} to {}",
            diff.base_commit, diff.head_commit
        ));

        Ok(diff)
    }

    /// Paths handed to the normalizer; rename sources only when requested
    fn changed_paths(changes: &[FileChange], include_rename_sources: bool) -> Vec<ChangedFile> {
        let mut paths = Vec::with_capacity(changes.len());
        for change in changes {
            if include_rename_sources {
                if let Some(source) = change.rename_source() {
                    paths.push(source.clone());
                }
            }
            paths.push(change.path().clone());
        }
        paths
    }

    fn report_list<'a>(&self, label: &str, items: impl Iterator<Item = &'a str>) {
        let items: Vec<&str> = items.collect();
        self.progress_reporter
            .report(&format!("{} ({}): [{}]", label, items.len(), items.join(", ")));
    }

    fn report_releases(&self, releases: &[ImpactedRelease]) {
        for release in releases {
            self.progress_reporter.report(&format!(
                "🚀 Release {} ({})",
                release.entry_point(),
                release.descriptor_path().display()
            ));
        }
    }
}
