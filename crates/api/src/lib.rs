//! Feed Mixer API
//!
//! Axum router, handlers and shared application state.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
