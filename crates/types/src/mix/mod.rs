//! Request window and error types for the mixing core

pub mod errors;
pub mod request;

pub use errors::MixError;
pub use request::MixRequest;
