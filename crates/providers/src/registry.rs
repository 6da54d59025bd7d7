//! Registry mapping provider identifiers to their fetch capabilities

use mixer_types::{ContentProvider, ProviderError, ProviderId, ProviderResult};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only table of registered content providers.
///
/// Built once at startup and never mutated during a request; the mixing
/// core only looks providers up by id.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
	providers: HashMap<ProviderId, Arc<dyn ContentProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self {
			providers: HashMap::new(),
		}
	}

	/// Register a provider under its own id; duplicate ids are a
	/// configuration error.
	pub fn register(&mut self, provider: Arc<dyn ContentProvider>) -> ProviderResult<()> {
		let id = provider.id().clone();
		if self.providers.contains_key(&id) {
			return Err(ProviderError::AlreadyRegistered { id });
		}
		self.providers.insert(id, provider);
		Ok(())
	}

	pub fn get(&self, id: &ProviderId) -> Option<Arc<dyn ContentProvider>> {
		self.providers.get(id).cloned()
	}

	pub fn contains(&self, id: &ProviderId) -> bool {
		self.providers.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&ProviderId, &Arc<dyn ContentProvider>)> {
		self.providers.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use mixer_types::ContentItem;

	#[derive(Debug)]
	struct NullProvider {
		id: ProviderId,
	}

	#[async_trait]
	impl ContentProvider for NullProvider {
		fn id(&self) -> &ProviderId {
			&self.id
		}

		async fn fetch(&self, _user_key: &str, _count: usize) -> ProviderResult<Vec<ContentItem>> {
			Ok(vec![])
		}
	}

	#[test]
	fn register_and_lookup() {
		let mut registry = ProviderRegistry::new();
		registry
			.register(Arc::new(NullProvider {
				id: ProviderId::new("news"),
			}))
			.unwrap();

		assert!(registry.contains(&ProviderId::new("news")));
		assert!(registry.get(&ProviderId::new("news")).is_some());
		assert!(registry.get(&ProviderId::new("ads")).is_none());
		assert_eq!(registry.len(), 1);
	}

	#[test]
	fn duplicate_registration_is_rejected() {
		let mut registry = ProviderRegistry::new();
		let make = || {
			Arc::new(NullProvider {
				id: ProviderId::new("news"),
			})
		};
		registry.register(make()).unwrap();

		let err = registry.register(make()).unwrap_err();
		assert!(matches!(err, ProviderError::AlreadyRegistered { .. }));
	}
}
