//! Feed Mixer Providers
//!
//! The provider registry plus the HTTP-backed content provider used when
//! providers are declared in configuration.

pub mod http_provider;
pub mod registry;

pub use http_provider::HttpContentProvider;
pub use registry::ProviderRegistry;
pub use mixer_types::{ContentProvider, ProviderError, ProviderResult};
