//! Shared Kernel - Domain-crossing minimal core
//!
//! Holds the error vocabulary shared by every backend crate:
//! - [`error::kind::ErrorKind`] classification mapped to HTTP status codes
//! - [`error::app_error::AppError`] unified error with user-facing message
//! - RFC 7807 problem responses for axum (`axum` feature)

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
