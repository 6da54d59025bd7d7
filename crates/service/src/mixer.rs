//! Request orchestration: expand, aggregate, dispatch, interleave

use crate::{demand, dispatch, interleave, sequence};
use futures::future::join_all;
use mixer_providers::ProviderRegistry;
use mixer_types::{ContentItem, MixError, MixPattern, MixRequest};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Stateless per-request orchestrator over a fixed pattern and registry.
///
/// The pattern and registry are read-only after construction; every call to
/// [`MixerService::mix`] works on fresh intermediate state.
pub struct MixerService {
	pattern: MixPattern,
	registry: Arc<ProviderRegistry>,
	per_call_timeout: Option<Duration>,
}

impl MixerService {
	pub fn new(
		pattern: MixPattern,
		registry: Arc<ProviderRegistry>,
		per_call_timeout: Option<Duration>,
	) -> Self {
		Self {
			pattern,
			registry,
			per_call_timeout,
		}
	}

	/// Startup-time validation: the pattern must be non-empty and every
	/// primary and fallback provider must be registered.
	pub fn validate(&self) -> Result<(), MixError> {
		if self.pattern.is_empty() {
			return Err(MixError::EmptyPattern);
		}
		for config in self.pattern.iter() {
			if !self.registry.contains(&config.provider) {
				return Err(MixError::UnknownProvider {
					id: config.provider.clone(),
				});
			}
			if let Some(fallback) = &config.fallback {
				if !self.registry.contains(fallback) {
					return Err(MixError::UnknownProvider {
						id: fallback.clone(),
					});
				}
			}
		}
		Ok(())
	}

	/// Produce the blended, ordered item list for one request window.
	///
	/// Provider failures degrade the output length; only configuration
	/// faults are returned as errors.
	pub async fn mix(&self, request: MixRequest) -> Result<Vec<ContentItem>, MixError> {
		let sequence = sequence::expand(&self.pattern, request.count, request.offset)?;
		let demand = demand::aggregate(&sequence);

		debug!(
			count = request.count,
			offset = request.offset,
			distinct_configs = demand.len(),
			"dispatching provider fetches"
		);

		let results = dispatch::fetch_all(
			&demand,
			&request.user_key,
			Arc::clone(&self.registry),
			self.per_call_timeout,
		)
		.await;

		let items = interleave::interleave(&sequence, results);
		info!(
			requested = request.count,
			returned = items.len(),
			"mix completed"
		);

		Ok(items)
	}

	/// Run every registered provider's health check concurrently
	pub async fn health_check_all(&self) -> HashMap<String, bool> {
		let checks = self.registry.iter().map(|(id, provider)| {
			let id = id.clone();
			let provider = Arc::clone(provider);
			async move {
				let healthy = provider.health_check().await.unwrap_or(false);
				(id.to_string(), healthy)
			}
		});

		join_all(checks).await.into_iter().collect()
	}

	pub fn registry(&self) -> &ProviderRegistry {
		&self.registry
	}
}
