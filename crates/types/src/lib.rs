//! Feed Mixer Types
//!
//! Domain types shared across the feed mixer: provider identifiers and
//! configurations, the repeating mix pattern, content items, the provider
//! capability trait and the error taxonomy.

pub mod content;
pub mod mix;
pub mod providers;

pub use content::ContentItem;
pub use mix::{MixError, MixRequest};
pub use providers::{
	ContentProvider, MixPattern, ProviderConfig, ProviderError, ProviderId, ProviderResult,
};

// Re-export external dependencies used in public signatures
pub use async_trait;
pub use serde_json;
