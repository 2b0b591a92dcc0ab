/// Use cases module containing application business logic orchestration
mod calculate_releases;

pub use calculate_releases::CalculateReleasesUseCase;
