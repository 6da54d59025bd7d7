//! Cyclic expansion of the mix pattern over a request window

use mixer_types::{MixError, MixPattern, ProviderConfig};

/// Expand the repeating pattern into the concrete ordered sequence covering
/// the `(offset, count)` window.
///
/// The pattern is treated as infinite by cyclic repetition; the result is
/// the slice of that stream from `offset` (inclusive) to `offset + count`
/// (exclusive), so `out[i] == pattern[(offset + i) % pattern.len()]`.
pub fn expand(
	pattern: &MixPattern,
	count: usize,
	offset: usize,
) -> Result<Vec<ProviderConfig>, MixError> {
	if pattern.is_empty() {
		return Err(MixError::EmptyPattern);
	}

	let entries = pattern.entries();
	Ok((0..count)
		.map(|i| entries[(offset + i) % entries.len()].clone())
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pattern() -> MixPattern {
		MixPattern::new(vec![
			ProviderConfig::new("a"),
			ProviderConfig::new("a"),
			ProviderConfig::new("b"),
			ProviderConfig::new("c"),
		])
	}

	#[test]
	fn expansion_cycles_through_the_pattern() {
		let pattern = pattern();
		let expanded = expand(&pattern, 10, 3).unwrap();

		assert_eq!(expanded.len(), 10);
		for (i, config) in expanded.iter().enumerate() {
			assert_eq!(config, &pattern.entries()[(3 + i) % pattern.len()]);
		}
	}

	#[test]
	fn zero_count_yields_an_empty_sequence() {
		assert!(expand(&pattern(), 0, 7).unwrap().is_empty());
	}

	#[test]
	fn adjacent_windows_compose() {
		let pattern = pattern();

		let mut first = expand(&pattern, 5, 2).unwrap();
		let second = expand(&pattern, 6, 7).unwrap();
		first.extend(second);

		assert_eq!(first, expand(&pattern, 11, 2).unwrap());
	}

	#[test]
	fn empty_pattern_is_a_configuration_error() {
		let empty = MixPattern::new(vec![]);
		assert_eq!(expand(&empty, 5, 0).unwrap_err(), MixError::EmptyPattern);
	}
}
