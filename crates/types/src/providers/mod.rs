//! Provider identifiers, per-slot configurations and the repeating mix pattern

pub mod errors;
pub mod traits;

pub use errors::{ProviderError, ProviderResult};
pub use traits::ContentProvider;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier naming a content source
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ProviderId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ProviderId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for ProviderId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// One slot of the mix pattern: a primary provider and an optional fallback
/// consulted once when the primary fails.
///
/// Equality is structural; two configurations with the same provider and
/// fallback land in the same demand bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderConfig {
	pub provider: ProviderId,
	pub fallback: Option<ProviderId>,
}

impl ProviderConfig {
	pub fn new(provider: impl Into<ProviderId>) -> Self {
		Self {
			provider: provider.into(),
			fallback: None,
		}
	}

	pub fn with_fallback(provider: impl Into<ProviderId>, fallback: impl Into<ProviderId>) -> Self {
		Self {
			provider: provider.into(),
			fallback: Some(fallback.into()),
		}
	}
}

/// The configured repeating sequence of provider configurations.
///
/// The pattern must be non-empty before the mixing core is exercised; an
/// empty pattern surfaces as [`crate::MixError::EmptyPattern`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MixPattern(Vec<ProviderConfig>);

impl MixPattern {
	pub fn new(entries: Vec<ProviderConfig>) -> Self {
		Self(entries)
	}

	pub fn entries(&self) -> &[ProviderConfig] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ProviderConfig> {
		self.0.iter()
	}
}

impl From<Vec<ProviderConfig>> for MixPattern {
	fn from(entries: Vec<ProviderConfig>) -> Self {
		Self(entries)
	}
}
