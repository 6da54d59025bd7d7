//! HTTP-backed content provider
//!
//! Fetches items from an upstream JSON endpoint of the shape
//! `GET {endpoint}?user=<key>&count=<n>` returning an array of objects.

use async_trait::async_trait;
use mixer_types::{ContentItem, ContentProvider, ProviderError, ProviderId, ProviderResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Content provider backed by an upstream HTTP endpoint
#[derive(Debug)]
pub struct HttpContentProvider {
	id: ProviderId,
	endpoint: String,
	client: Client,
}

impl HttpContentProvider {
	pub fn new(
		id: impl Into<ProviderId>,
		endpoint: impl Into<String>,
		timeout_ms: u64,
		headers: Option<&HashMap<String, String>>,
	) -> ProviderResult<Self> {
		let mut default_headers = HeaderMap::new();
		if let Some(headers) = headers {
			for (name, value) in headers {
				let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
					ProviderError::InvalidConfiguration {
						reason: format!("invalid header name '{}': {}", name, e),
					}
				})?;
				let value =
					HeaderValue::from_str(value).map_err(|e| ProviderError::InvalidConfiguration {
						reason: format!("invalid header value for '{}': {}", name, e),
					})?;
				default_headers.insert(name, value);
			}
		}

		let client = Client::builder()
			.timeout(Duration::from_millis(timeout_ms))
			.default_headers(default_headers)
			.build()
			.map_err(|e| ProviderError::InvalidConfiguration {
				reason: format!("failed to build http client: {}", e),
			})?;

		Ok(Self {
			id: id.into(),
			endpoint: endpoint.into(),
			client,
		})
	}

	fn http_error(err: reqwest::Error) -> ProviderError {
		ProviderError::Http {
			reason: err.to_string(),
		}
	}
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
	fn id(&self) -> &ProviderId {
		&self.id
	}

	async fn fetch(&self, user_key: &str, count: usize) -> ProviderResult<Vec<ContentItem>> {
		debug!(provider = %self.id, count, "fetching items from upstream");

		let response = self
			.client
			.get(&self.endpoint)
			.query(&[("user", user_key), ("count", &count.to_string())])
			.send()
			.await
			.map_err(Self::http_error)?
			.error_for_status()
			.map_err(Self::http_error)?;

		let payloads: Vec<Map<String, Value>> =
			response
				.json()
				.await
				.map_err(|e| ProviderError::InvalidResponse {
					reason: format!("expected a JSON array of objects: {}", e),
				})?;

		// An upstream may return more than asked; cap at the demanded count
		Ok(payloads
			.into_iter()
			.take(count)
			.map(|payload| ContentItem::new(self.id.clone(), payload))
			.collect())
	}

	async fn health_check(&self) -> ProviderResult<bool> {
		let response = self
			.client
			.get(&self.endpoint)
			.query(&[("user", "health"), ("count", "0")])
			.send()
			.await
			.map_err(Self::http_error)?;

		Ok(response.status().is_success())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_header_name_is_a_configuration_error() {
		let mut headers = HashMap::new();
		headers.insert("bad header".to_string(), "value".to_string());

		let err =
			HttpContentProvider::new("news", "http://localhost:9/items", 1000, Some(&headers))
				.unwrap_err();
		assert!(matches!(err, ProviderError::InvalidConfiguration { .. }));
	}

	#[test]
	fn builds_with_valid_headers() {
		let mut headers = HashMap::new();
		headers.insert("x-api-key".to_string(), "secret".to_string());

		let provider =
			HttpContentProvider::new("news", "http://localhost:9/items", 1000, Some(&headers))
				.unwrap();
		assert_eq!(provider.id(), &ProviderId::new("news"));
	}
}
