/// Filesystem adapters for descriptor probing and manifest output
mod descriptor_finder;
mod manifest_writer;

pub use descriptor_finder::FileSystemDescriptorFinder;
pub use manifest_writer::FileSystemManifestWriter;
