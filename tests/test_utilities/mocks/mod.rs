/// Mock implementations for testing
mod mock_change_source;
mod mock_descriptor_finder;
mod mock_manifest_writer;
mod mock_package_lister;
mod mock_progress_reporter;

pub use mock_change_source::MockChangeSource;
pub use mock_descriptor_finder::MockDescriptorFinder;
pub use mock_manifest_writer::MockManifestWriter;
pub use mock_package_lister::MockPackageLister;
pub use mock_progress_reporter::MockProgressReporter;
