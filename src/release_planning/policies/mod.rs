mod package_folder_policy;

pub use package_folder_policy::{FolderDecision, PackageFolderPolicy};
