//! Reassembly of per-configuration batches into the requested order

use crate::dispatch::ResultSets;
use mixer_types::{ContentItem, ProviderConfig};
use std::collections::VecDeque;

/// Walk the expanded sequence in order, plucking one item per slot from the
/// matching result set.
///
/// The output must be a contiguous prefix of the requested window, so the
/// first exhausted slot ends it; later positions are never skipped ahead to.
pub fn interleave(sequence: &[ProviderConfig], mut results: ResultSets) -> Vec<ContentItem> {
	let mut output = Vec::with_capacity(sequence.len());
	for config in sequence {
		match results.get_mut(config).and_then(VecDeque::pop_front) {
			Some(item) => output.push(item),
			None => break,
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use mixer_types::ProviderId;
	use serde_json::{json, Map};

	fn item(source: &str, seq: usize) -> ContentItem {
		let mut payload = Map::new();
		payload.insert("seq".to_string(), json!(seq));
		ContentItem::new(source, payload)
	}

	fn slot(items: Vec<ContentItem>) -> VecDeque<ContentItem> {
		items.into()
	}

	#[test]
	fn items_come_back_in_sequence_order() {
		let a = ProviderConfig::new("a");
		let b = ProviderConfig::new("b");
		let sequence = vec![a.clone(), a.clone(), b.clone(), a.clone()];

		let results = ResultSets::from([
			(a.clone(), slot(vec![item("a", 1), item("a", 2), item("a", 3)])),
			(b.clone(), slot(vec![item("b", 1)])),
		]);

		let output = interleave(&sequence, results);
		let sources: Vec<_> = output.iter().map(|i| i.source.as_str()).collect();
		assert_eq!(sources, ["a", "a", "b", "a"]);
		assert_eq!(output[0].payload["seq"], json!(1));
		assert_eq!(output[3].payload["seq"], json!(3));
	}

	#[test]
	fn exhausted_slot_truncates_the_output() {
		let a = ProviderConfig::new("a");
		let b = ProviderConfig::new("b");
		let sequence = vec![a.clone(), a.clone(), b.clone(), a.clone()];

		let results = ResultSets::from([
			(a.clone(), slot(vec![item("a", 1), item("a", 2), item("a", 3)])),
			(b.clone(), slot(vec![])),
		]);

		let output = interleave(&sequence, results);
		assert_eq!(output.len(), 2);
		assert!(output.iter().all(|i| i.source == ProviderId::new("a")));
	}

	#[test]
	fn missing_slot_counts_as_exhausted() {
		let a = ProviderConfig::new("a");
		let b = ProviderConfig::new("b");
		let sequence = vec![b.clone(), a.clone()];

		let results = ResultSets::from([(a, slot(vec![item("a", 1)]))]);
		assert!(interleave(&sequence, results).is_empty());
	}

	#[test]
	fn empty_sequence_produces_no_items() {
		assert!(interleave(&[], ResultSets::new()).is_empty());
	}
}
