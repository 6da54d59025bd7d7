//! Concurrent provider dispatch with single-level fallback
//!
//! One task per distinct provider configuration, barrier-joined; every
//! provider-level failure is absorbed into an empty result set and never
//! surfaces as a request error.

use futures::future::join_all;
use mixer_providers::ProviderRegistry;
use mixer_types::{ContentItem, ProviderConfig, ProviderError, ProviderId, ProviderResult};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Items fetched per distinct provider configuration, consumed from the
/// front by the interleaver
pub type ResultSets = HashMap<ProviderConfig, VecDeque<ContentItem>>;

/// Fetch the demanded number of items for every distinct configuration.
///
/// Concurrency is bounded by the number of unique configurations, not by
/// the requested count. The optional deadline applies to each provider
/// call individually; expiry is treated exactly like a provider failure.
pub async fn fetch_all(
	demand: &HashMap<ProviderConfig, usize>,
	user_key: &str,
	registry: Arc<ProviderRegistry>,
	per_call_timeout: Option<Duration>,
) -> ResultSets {
	let tasks = demand.iter().map(|(config, amount)| {
		let config = config.clone();
		let amount = *amount;
		let user_key = user_key.to_string();
		let registry = Arc::clone(&registry);

		tokio::spawn(async move {
			debug!(provider = %config.provider, amount, "starting fetch task");
			let items =
				fetch_with_fallback(&registry, &config, &user_key, amount, per_call_timeout).await;
			(config, items)
		})
	});

	let mut results = ResultSets::with_capacity(demand.len());
	for joined in join_all(tasks).await {
		match joined {
			Ok((config, items)) => {
				results.insert(config, items);
			},
			Err(e) => {
				// A panicked task degrades to a missing slot, which the
				// interleaver treats as exhausted.
				warn!(error = %e, "fetch task failed to complete");
			},
		}
	}
	results
}

async fn fetch_with_fallback(
	registry: &ProviderRegistry,
	config: &ProviderConfig,
	user_key: &str,
	amount: usize,
	per_call_timeout: Option<Duration>,
) -> VecDeque<ContentItem> {
	match attempt(registry, &config.provider, user_key, amount, per_call_timeout).await {
		Ok(items) => items.into(),
		Err(primary_err) => {
			warn!(
				provider = %config.provider,
				error = %primary_err,
				"primary fetch failed"
			);

			let Some(fallback) = &config.fallback else {
				return VecDeque::new();
			};

			match attempt(registry, fallback, user_key, amount, per_call_timeout).await {
				Ok(items) => items.into(),
				Err(fallback_err) => {
					warn!(
						provider = %fallback,
						error = %fallback_err,
						"fallback fetch failed; slot left empty"
					);
					VecDeque::new()
				},
			}
		},
	}
}

async fn attempt(
	registry: &ProviderRegistry,
	id: &ProviderId,
	user_key: &str,
	amount: usize,
	per_call_timeout: Option<Duration>,
) -> ProviderResult<Vec<ContentItem>> {
	let provider = registry
		.get(id)
		.ok_or_else(|| ProviderError::NotRegistered { id: id.clone() })?;

	match per_call_timeout {
		Some(deadline) => tokio::time::timeout(deadline, provider.fetch(user_key, amount))
			.await
			.map_err(|_| ProviderError::Timeout { id: id.clone() })?,
		None => provider.fetch(user_key, amount).await,
	}
}
