/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod release_request;
mod release_response;

pub use release_request::{
    ReleaseRequest, ReleaseRequestBuilder, DEFAULT_MODULE_NAME, DEFAULT_PRIMARY_BRANCH,
};
pub use release_response::ReleaseResponse;
