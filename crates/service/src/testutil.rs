//! Deterministic providers for service-level tests

use async_trait::async_trait;
use mixer_providers::ProviderRegistry;
use mixer_types::{ContentItem, ContentProvider, ProviderError, ProviderId, ProviderResult};
use serde_json::{json, Map};
use std::sync::Arc;
use std::time::Duration;

/// Provider returning numbered items attributed to itself, optionally
/// limited to a fixed inventory or delayed to exercise deadlines
#[derive(Debug)]
pub struct StaticProvider {
	id: ProviderId,
	inventory: Option<usize>,
	delay: Option<Duration>,
}

impl StaticProvider {
	pub fn new(id: impl Into<ProviderId>) -> Self {
		Self {
			id: id.into(),
			inventory: None,
			delay: None,
		}
	}

	pub fn with_inventory(mut self, inventory: usize) -> Self {
		self.inventory = Some(inventory);
		self
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}
}

#[async_trait]
impl ContentProvider for StaticProvider {
	fn id(&self) -> &ProviderId {
		&self.id
	}

	async fn fetch(&self, _user_key: &str, count: usize) -> ProviderResult<Vec<ContentItem>> {
		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}

		let available = self.inventory.map_or(count, |inv| count.min(inv));
		Ok((0..available)
			.map(|i| {
				let mut payload = Map::new();
				payload.insert("seq".to_string(), json!(i + 1));
				ContentItem::new(self.id.clone(), payload)
			})
			.collect())
	}
}

/// Provider whose every call fails
#[derive(Debug)]
pub struct FailingProvider {
	id: ProviderId,
}

impl FailingProvider {
	pub fn new(id: impl Into<ProviderId>) -> Self {
		Self { id: id.into() }
	}
}

#[async_trait]
impl ContentProvider for FailingProvider {
	fn id(&self) -> &ProviderId {
		&self.id
	}

	async fn fetch(&self, _user_key: &str, _count: usize) -> ProviderResult<Vec<ContentItem>> {
		Err(ProviderError::Unavailable {
			reason: "unable to fetch the items".to_string(),
		})
	}

	async fn health_check(&self) -> ProviderResult<bool> {
		Ok(false)
	}
}

pub fn registry_of(providers: Vec<Arc<dyn ContentProvider>>) -> Arc<ProviderRegistry> {
	let mut registry = ProviderRegistry::new();
	for provider in providers {
		registry.register(provider).unwrap();
	}
	Arc::new(registry)
}
