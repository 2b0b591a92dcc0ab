/// Git adapters for reading repository history
mod git_change_source;

pub use git_change_source::GitChangeSource;
