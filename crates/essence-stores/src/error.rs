//! Store error type.

use essence_api::ApiError;
use essence_commerce::CommerceError;
use thiserror::Error;

/// Errors returned by store operations that report to their caller.
///
/// Most store operations swallow failures into store-local error state;
/// `place_order` is the exception and uses this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Local validation failed; no request was made.
    #[error(transparent)]
    Validation(#[from] CommerceError),

    /// The backend rejected or the request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Another cart request is still in flight.
    #[error("Another cart request is in flight")]
    Busy,
}
