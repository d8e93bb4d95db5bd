/*!
# Argsift: Parser.

This module contains a builder-style alternative to calling [`Sift`]'s query
methods by hand: register the flags, options, and passthrough separators
your app cares about, each with a callback, then run them all against a
[`Sift`] in one go.
*/

use crate::{
	Sift,
	SiftError,
};
use std::collections::BTreeSet;
use tracing::debug;



/// # Flag Callback.
type FlagFn<'a> = Box<dyn FnMut(bool) + 'a>;

/// # Value Callback.
type ValueFn<'a> = Box<dyn FnMut(Option<String>) + 'a>;

/// # Trailing Callback.
type TrailingFn<'a> = Box<dyn FnMut(Vec<String>) + 'a>;



#[derive(Default)]
/// # Argument Parser.
///
/// `Parser` holds an ordered list of rules. When [`Parser::parse`] is called,
/// each rule is run against the [`Sift`] in the order it was added, and its
/// callback is invoked exactly once with the result — `true`/`false` for
/// flags, `Some`/`None` for values, and a (possibly empty) list for trailing
/// arguments.
///
/// Order matters because queries consume what they match. In particular, a
/// trailing rule for `"--"` should generally come first so that nothing after
/// the separator gets mistaken for a key.
///
/// ## Examples
///
/// ```
/// use argsift::{Parser, Sift};
///
/// let mut passthru = Vec::new();
/// let mut verbose = false;
/// let mut threads = None;
///
/// let leftover = Parser::default()
///     .with_trailing("--", |v| passthru = v).unwrap()
///     .with_flag(&["v", "verbose"], |v| verbose = v).unwrap()
///     .with_value(&["t", "threads"], |v| threads = v).unwrap()
///     .parse(Sift::new(["-t4", "--threads=8", "-v", "src", "--", "-v"]));
///
/// assert!(verbose);
/// assert_eq!(threads.as_deref(), Some("8"));
/// assert_eq!(passthru, ["-v"]);
/// assert_eq!(leftover.remaining(), ["-t4", "src"]);
/// ```
pub struct Parser<'a> {
	/// # Rules.
	rules: Vec<Rule<'a>>,

	/// # Registered Aliases.
	aliases: BTreeSet<&'static str>,

	/// # Registered Trailing Tokens.
	trailing: BTreeSet<&'static str>,
}

impl<'a> Parser<'a> {
	/// # With Flag.
	///
	/// Add a boolean flag to the rules, matched under any of the names.
	///
	/// ## Errors
	///
	/// This will return an error if the name list is empty, or any name is
	/// invalid or was previously registered.
	pub fn with_flag<F>(mut self, names: &[&'static str], cb: F)
	-> Result<Self, SiftError>
	where F: FnMut(bool) + 'a {
		let names = self.register(names)?;
		self.rules.push(Rule::Flag(names, Box::new(cb)));
		Ok(self)
	}

	/// # With Value.
	///
	/// Add a key/value option to the rules, matched under any of the names.
	///
	/// ## Errors
	///
	/// This will return an error if the name list is empty, or any name is
	/// invalid or was previously registered.
	pub fn with_value<F>(mut self, names: &[&'static str], cb: F)
	-> Result<Self, SiftError>
	where F: FnMut(Option<String>) + 'a {
		let names = self.register(names)?;
		self.rules.push(Rule::Value(names, Box::new(cb)));
		Ok(self)
	}

	/// # With Trailing.
	///
	/// Add a rule that splits off everything after the first `token` (exact
	/// match). See [`Sift::truncate_after`].
	///
	/// ## Errors
	///
	/// This will return an error if the token is empty or was previously
	/// registered as a trailing token.
	pub fn with_trailing<F>(mut self, token: &'static str, cb: F)
	-> Result<Self, SiftError>
	where F: FnMut(Vec<String>) + 'a {
		if token.is_empty() { return Err(SiftError::InvalidAlias(token)); }
		// A second split on the same token would always come up empty.
		if ! self.trailing.insert(token) { return Err(SiftError::DuplicateAlias(token)); }
		self.rules.push(Rule::Trailing(token, Box::new(cb)));
		Ok(self)
	}

	/// # Parse.
	///
	/// Run each rule against `sift` in order, then return it so any leftovers
	/// can be dealt with.
	pub fn parse(self, mut sift: Sift) -> Sift {
		for rule in self.rules {
			match rule {
				Rule::Flag(names, mut cb) => {
					let res = sift.flag(&names[..]);
					debug!(?names, found = res, "flag rule");
					cb(res);
				},
				Rule::Value(names, mut cb) => {
					let res = sift.value(&names[..]);
					debug!(?names, found = res.is_some(), "value rule");
					cb(res);
				},
				Rule::Trailing(token, mut cb) => {
					let res = sift.truncate_after(token);
					debug!(token, found = res.len(), "trailing rule");
					cb(res);
				},
			}
		}

		sift
	}

	/// # Register Names.
	///
	/// Validate and record the names, returning them boxed.
	fn register(&mut self, names: &[&'static str])
	-> Result<Box<[&'static str]>, SiftError> {
		if names.is_empty() { return Err(SiftError::NoAliases); }

		for &name in names {
			if ! valid_alias(name) { return Err(SiftError::InvalidAlias(name)); }
			if self.aliases.contains(name) { return Err(SiftError::DuplicateAlias(name)); }
		}

		// Duplicates within the same list are caught here.
		for &name in names {
			if ! self.aliases.insert(name) { return Err(SiftError::DuplicateAlias(name)); }
		}

		Ok(Box::from(names))
	}
}



/// # Parse Rule.
enum Rule<'a> {
	/// # Boolean Flag.
	Flag(Box<[&'static str]>, FlagFn<'a>),

	/// # Key With Value.
	Value(Box<[&'static str]>, ValueFn<'a>),

	/// # Everything After.
	Trailing(&'static str, TrailingFn<'a>),
}



/// # Valid Alias?
///
/// Aliases are the bare names; dashes are added by the matcher. They must be
/// non-empty and may not contain `=` or whitespace.
fn valid_alias(name: &str) -> bool {
	! name.is_empty() &&
	! name.starts_with('-') &&
	! name.chars().any(|c| c == '=' || c.is_whitespace())
}
