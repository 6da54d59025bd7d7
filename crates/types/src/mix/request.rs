//! The validated inbound request window

/// One mixing request: the `(offset, count)` window over the repeating
/// pattern plus the caller identity forwarded to providers.
///
/// Numeric validation happens at the HTTP layer; by the time a `MixRequest`
/// exists both values are well-formed non-negative integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixRequest {
	pub count: usize,
	pub offset: usize,
	pub user_key: String,
}

impl MixRequest {
	pub fn new(count: usize, offset: usize, user_key: impl Into<String>) -> Self {
		Self {
			count,
			offset,
			user_key: user_key.into(),
		}
	}
}
