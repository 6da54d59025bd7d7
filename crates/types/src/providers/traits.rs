//! Core provider trait for user implementations

use crate::content::ContentItem;
use crate::providers::{ProviderId, ProviderResult};
use async_trait::async_trait;
use std::fmt::Debug;

/// Capability exposed by every content source.
///
/// Implementations must not block indefinitely; returning fewer items than
/// requested is valid and not an error, while returning an error signals
/// total failure for this call.
#[async_trait]
pub trait ContentProvider: Send + Sync + Debug {
	/// Identifier under which this provider is registered
	fn id(&self) -> &ProviderId;

	/// Fetch up to `count` items for the given user key
	async fn fetch(&self, user_key: &str, count: usize) -> ProviderResult<Vec<ContentItem>>;

	/// Health check used by the readiness probe
	async fn health_check(&self) -> ProviderResult<bool> {
		Ok(true)
	}
}
