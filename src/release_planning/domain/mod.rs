pub mod changed_file;
pub mod compilation_unit;
pub mod impacted_release;
pub mod import_path;
pub mod reverse_dependency_index;

pub use changed_file::{ChangedFile, FileChange};
pub use compilation_unit::CompilationUnit;
pub use impacted_release::ImpactedRelease;
pub use import_path::ImportPath;
pub use reverse_dependency_index::ReverseDependencyIndex;
