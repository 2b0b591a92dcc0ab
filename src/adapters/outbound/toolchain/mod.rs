/// Build toolchain adapters for enumerating packages
mod go_package_lister;

pub use go_package_lister::GoPackageLister;
