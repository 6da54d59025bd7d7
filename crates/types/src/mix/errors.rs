//! Configuration-level errors surfaced by the mixing core
//!
//! Provider failures are never represented here; the dispatcher absorbs
//! them into shorter result sets.

use crate::providers::ProviderId;
use thiserror::Error;

/// Misconfigurations detected by the mixing core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MixError {
	#[error("the configured mix pattern is empty")]
	EmptyPattern,

	#[error("pattern references unregistered provider '{id}'")]
	UnknownProvider { id: ProviderId },
}
