/// Release planning domain: the change-impact resolver
///
/// Pure logic with no I/O. Collaborators are reached only through the
/// ports in [`crate::ports`].
pub mod domain;
pub mod policies;
pub mod services;
