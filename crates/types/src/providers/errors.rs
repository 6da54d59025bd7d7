//! Error types for provider operations

use crate::providers::ProviderId;
use thiserror::Error;

/// Errors returned by provider fetch capabilities and the registry
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("provider '{id}' is not registered")]
	NotRegistered { id: ProviderId },

	#[error("provider '{id}' is already registered")]
	AlreadyRegistered { id: ProviderId },

	#[error("provider '{id}' timed out")]
	Timeout { id: ProviderId },

	#[error("http request failed: {reason}")]
	Http { reason: String },

	#[error("invalid provider response: {reason}")]
	InvalidResponse { reason: String },

	#[error("invalid provider configuration: {reason}")]
	InvalidConfiguration { reason: String },

	#[error("provider unavailable: {reason}")]
	Unavailable { reason: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;
