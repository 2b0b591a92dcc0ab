/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the release calculation uses to reach
/// git, the Go toolchain, the file system and the console.
pub mod change_source;
pub mod descriptor_finder;
pub mod manifest_writer;
pub mod package_lister;
pub mod progress_reporter;

pub use change_source::{ChangeSource, DiffOutcome, RevisionFallback, RevisionRange};
pub use descriptor_finder::DescriptorFinder;
pub use manifest_writer::ManifestWriter;
pub use package_lister::PackageLister;
pub use progress_reporter::ProgressReporter;
