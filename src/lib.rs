//! calculate-releases - change-impact resolver for Go monorepos
//!
//! Given two git revisions, this library computes which deployable services
//! (entry points with a deployment descriptor) are affected by the change and
//! writes them to a build manifest, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`release_planning`): Reverse dependency index, change normalization and impact resolution
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): git, Go toolchain, file system and console implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use calculate_releases::prelude::*;
//! use std::path::PathBuf;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let use_case = CalculateReleasesUseCase::new(
//!     GitChangeSource::new(),
//!     GoPackageLister::new("go"),
//!     FileSystemDescriptorFinder::new("."),
//!     FileSystemManifestWriter::new(PathBuf::from("builds.txt")),
//!     ConsoleProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ReleaseRequest::builder()
//!     .module_name("github.com/uw-labs/go-mono")
//!     .base(Some("master".to_string()))
//!     .build()?;
//! let response = use_case.execute(request, &CancellationToken::new()).await?;
//!
//! for release in &response.releases {
//!     println!("{}", release.descriptor_path().display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod release_planning;
pub mod shared;
pub mod shutdown;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDescriptorFinder, FileSystemManifestWriter,
    };
    pub use crate::adapters::outbound::git::GitChangeSource;
    pub use crate::adapters::outbound::toolchain::GoPackageLister;
    pub use crate::application::dto::{ReleaseRequest, ReleaseResponse};
    pub use crate::application::use_cases::CalculateReleasesUseCase;
    pub use crate::ports::outbound::{
        ChangeSource, DescriptorFinder, DiffOutcome, ManifestWriter, PackageLister,
        ProgressReporter, RevisionFallback, RevisionRange,
    };
    pub use crate::release_planning::domain::{
        ChangedFile, CompilationUnit, FileChange, ImpactedRelease, ImportPath,
        ReverseDependencyIndex,
    };
    pub use crate::release_planning::policies::PackageFolderPolicy;
    pub use crate::release_planning::services::{
        ChangeNormalizer, ImpactResolver, ReverseGraphBuilder,
    };
    pub use crate::shared::error::{ExitCode, ReleaseError};
    pub use crate::shared::Result;
}
