/*!
# Argsift: Errors.

Queries never fail; these only come up while configuring a
[`Parser`](crate::Parser).
*/

use thiserror::Error;



#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
/// # Error!
pub enum SiftError {
	/// # Duplicate Alias.
	#[error("Duplicate alias: {0}")]
	DuplicateAlias(&'static str),

	/// # Invalid Alias.
	#[error("Invalid alias: {0:?}")]
	InvalidAlias(&'static str),

	/// # No Aliases.
	#[error("Missing aliases.")]
	NoAliases,
}

impl SiftError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateAlias(_) => "Duplicate alias.",
			Self::InvalidAlias(_) => "Invalid alias.",
			Self::NoAliases => "Missing aliases.",
		}
	}
}
