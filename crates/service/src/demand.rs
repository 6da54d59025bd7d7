//! Per-configuration demand derived from an expanded sequence

use mixer_types::ProviderConfig;
use std::collections::HashMap;

/// Collapse an expanded sequence into the number of items required from
/// each distinct provider configuration.
///
/// The counts always sum to the sequence length; this is exactly the
/// quantity requested from each configuration's provider.
pub fn aggregate(sequence: &[ProviderConfig]) -> HashMap<ProviderConfig, usize> {
	let mut demand = HashMap::new();
	for config in sequence {
		*demand.entry(config.clone()).or_insert(0) += 1;
	}
	demand
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sequence;
	use mixer_types::MixPattern;

	#[test]
	fn demand_is_conserved() {
		let pattern = MixPattern::new(vec![
			ProviderConfig::new("a"),
			ProviderConfig::new("a"),
			ProviderConfig::with_fallback("b", "c"),
			ProviderConfig::new("c"),
		]);
		let expanded = sequence::expand(&pattern, 13, 5).unwrap();

		let demand = aggregate(&expanded);
		assert_eq!(demand.values().sum::<usize>(), expanded.len());
	}

	#[test]
	fn structurally_equal_configs_share_a_bucket() {
		let sequence = vec![
			ProviderConfig::with_fallback("a", "b"),
			ProviderConfig::with_fallback("a", "b"),
			ProviderConfig::new("a"),
		];

		let demand = aggregate(&sequence);
		assert_eq!(demand.len(), 2);
		assert_eq!(demand[&ProviderConfig::with_fallback("a", "b")], 2);
		assert_eq!(demand[&ProviderConfig::new("a")], 1);
	}

	#[test]
	fn empty_sequence_yields_empty_demand() {
		assert!(aggregate(&[]).is_empty());
	}
}
