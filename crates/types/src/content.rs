//! The content item returned to callers

use crate::providers::ProviderId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unit of content, attributed to the provider that produced it.
///
/// The payload is opaque to the mixer and serialized flattened next to the
/// `source` attribution, so an item looks like
/// `{ "source": "news", "title": "...", ... }` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
	pub source: ProviderId,
	#[serde(flatten)]
	pub payload: Map<String, Value>,
}

impl ContentItem {
	pub fn new(source: impl Into<ProviderId>, payload: Map<String, Value>) -> Self {
		Self {
			source: source.into(),
			payload,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn payload_fields_flatten_next_to_source() {
		let mut payload = Map::new();
		payload.insert("title".to_string(), json!("hello"));

		let item = ContentItem::new("news", payload);
		let encoded = serde_json::to_value(&item).unwrap();
		assert_eq!(encoded, json!({ "source": "news", "title": "hello" }));
	}

	#[test]
	fn items_round_trip_through_json() {
		let raw = json!({ "source": "videos", "id": 7, "url": "https://v/7" });
		let item: ContentItem = serde_json::from_value(raw.clone()).unwrap();
		assert_eq!(item.source, ProviderId::new("videos"));
		assert_eq!(serde_json::to_value(&item).unwrap(), raw);
	}
}
