//! Mock providers for examples and testing
//!
//! Deterministic providers that can stand in for real upstream sources
//! without network access.

use async_trait::async_trait;
use serde_json::{json, Map};

use mixer_types::{ContentItem, ContentProvider, ProviderError, ProviderId, ProviderResult};

/// Provider returning predictable, numbered sample items
#[derive(Debug, Clone)]
pub struct SampleContentProvider {
	id: ProviderId,
	inventory: Option<usize>,
}

impl SampleContentProvider {
	pub fn new(id: impl Into<ProviderId>) -> Self {
		Self {
			id: id.into(),
			inventory: None,
		}
	}

	/// Limit how many items the provider can return per call, regardless
	/// of how many are requested
	pub fn with_inventory(mut self, inventory: usize) -> Self {
		self.inventory = Some(inventory);
		self
	}
}

#[async_trait]
impl ContentProvider for SampleContentProvider {
	fn id(&self) -> &ProviderId {
		&self.id
	}

	async fn fetch(&self, _user_key: &str, count: usize) -> ProviderResult<Vec<ContentItem>> {
		let available = self.inventory.map_or(count, |inv| count.min(inv));

		Ok((1..=available)
			.map(|n| {
				let mut payload = Map::new();
				payload.insert("id".to_string(), json!(format!("{}-{}", self.id, n)));
				payload.insert(
					"title".to_string(),
					json!(format!("Sample item {} from {}", n, self.id)),
				);
				payload.insert(
					"link".to_string(),
					json!(format!("https://{}.example.com/items/{}", self.id, n)),
				);
				ContentItem::new(self.id.clone(), payload)
			})
			.collect())
	}
}

/// Provider whose every fetch fails, for exercising fallback and
/// truncation behavior
#[derive(Debug, Clone)]
pub struct FailingContentProvider {
	id: ProviderId,
}

impl FailingContentProvider {
	pub fn new(id: impl Into<ProviderId>) -> Self {
		Self { id: id.into() }
	}
}

#[async_trait]
impl ContentProvider for FailingContentProvider {
	fn id(&self) -> &ProviderId {
		&self.id
	}

	async fn fetch(&self, _user_key: &str, _count: usize) -> ProviderResult<Vec<ContentItem>> {
		Err(ProviderError::Unavailable {
			reason: "unable to fetch the items, sorry".to_string(),
		})
	}

	async fn health_check(&self) -> ProviderResult<bool> {
		Ok(false)
	}
}
