//! Feed Mixer Service
//!
//! Core logic for blending content: pattern expansion, demand aggregation,
//! concurrent dispatch with fallback, and order-preserving interleaving.

pub mod demand;
pub mod dispatch;
pub mod interleave;
pub mod mixer;
pub mod sequence;

pub use dispatch::ResultSets;
pub use mixer::MixerService;

#[cfg(test)]
mod testutil;
