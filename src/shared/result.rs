/// Result alias used by every layer of the release calculation.
///
/// Typed failures are expressed as [`ReleaseError`](super::error::ReleaseError)
/// and carried inside `anyhow::Error` so each stage can attach context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
