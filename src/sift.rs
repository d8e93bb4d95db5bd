/*!
# Argsift: Sift
*/

use crate::key::KeyMatch;
use std::ops::BitOr;
use tracing::trace;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Argument Sifter.
///
/// `Sift` is an agnostic, consuming CLI argument matcher. It holds no
/// information about expected or required arguments; instead, the
/// implementing library asks for whatever it cares about — in any order, as
/// many times as it likes — and each match is removed from the working set
/// as it is found.
///
/// Whatever is left over when you're done asking is available via
/// [`Sift::remaining`] or [`Sift::take`]. Nothing is ever reported as
/// "unexpected"; that's your call.
///
/// ## Keys
///
/// A key is an entry beginning with one or two dashes followed by one of the
/// names you're asking about. `-v` and `--v` are equivalent, as are
/// `-verbose` and `--verbose`. Three or more dashes never match.
///
/// Names are matched exactly. Asking for `t` will never match `--test`.
///
/// ## Values
///
/// A value can be attached with an `=` sign (`--key=val`), or passed as the
/// entry immediately following the key (`--key val`). In the former case,
/// everything after the first `=` is the value, so `--key=a=b` yields `a=b`,
/// and `--key=` yields an empty string (which is not the same as no value).
///
/// ## Examples
///
/// ```
/// use argsift::Sift;
///
/// let mut args = Sift::new(["-v", "--threads", "4", "--out=here", "path"]);
///
/// assert!(args.flag(&["v", "verbose"]));
/// assert_eq!(args.value(&["t", "threads"]).as_deref(), Some("4"));
/// assert_eq!(args.value(&["o", "out"]).as_deref(), Some("here"));
///
/// // Whatever nobody asked about is left behind.
/// assert_eq!(args.remaining(), ["path"]);
///
/// // The original set is never touched.
/// assert_eq!(args.original().len(), 5);
/// ```
pub struct Sift {
	/// # Original Arguments.
	original: Box<[String]>,

	/// # Unconsumed Arguments.
	remaining: Vec<String>,
}

impl<S: Into<String>> FromIterator<S> for Sift {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		let original: Box<[String]> = src.into_iter().map(Into::into).collect();
		let remaining = original.to_vec();
		Self { original, remaining }
	}
}

/// ## Instantiation.
impl Sift {
	#[must_use]
	/// # New.
	///
	/// Create a new instance from any list of string-like arguments.
	///
	/// To parse the current process's arguments, use [`args`] instead.
	///
	/// ## Examples
	///
	/// ```
	/// use argsift::Sift;
	///
	/// let args = Sift::new(vec!["--help".to_owned()]);
	/// assert_eq!(args.len(), 1);
	/// ```
	pub fn new<I, S>(src: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		src.into_iter().collect()
	}
}

/// ## Snapshots.
///
/// These methods provide read-only views of the data.
impl Sift {
	#[must_use]
	#[inline]
	/// # Original Arguments.
	///
	/// Return the arguments exactly as they were at construction.
	pub fn original(&self) -> &[String] { &self.original }

	#[must_use]
	#[inline]
	/// # Remaining Arguments.
	///
	/// Return the arguments that have not (yet) been consumed by a query.
	pub fn remaining(&self) -> &[String] { &self.remaining }

	#[must_use]
	#[inline]
	/// # Is Empty?
	///
	/// Returns `true` if every argument has been consumed (or there weren't
	/// any to begin with).
	pub fn is_empty(&self) -> bool { self.remaining.is_empty() }

	#[must_use]
	#[inline]
	/// # Length.
	///
	/// Return the number of remaining arguments.
	pub fn len(&self) -> usize { self.remaining.len() }

	#[must_use]
	#[inline]
	/// # First Remaining Entry.
	pub fn peek(&self) -> Option<&str> { self.remaining.first().map(String::as_str) }

	#[must_use]
	#[inline]
	/// # Into Remaining.
	///
	/// Consume the struct, returning the unconsumed arguments.
	pub fn take(self) -> Vec<String> { self.remaining }
}

/// ## Queries.
///
/// These methods look for things and remove whatever they find.
impl Sift {
	/// # Flag.
	///
	/// Returns `true` if any of the names is present as a flag — `-name` or
	/// `--name` with nothing attached — or `false` if not.
	///
	/// Every matching entry is removed, not just the first, so repeated flags
	/// collapse into a single `true`, and a second call for the same names
	/// will return `false`.
	///
	/// An empty name list never matches.
	///
	/// ## Examples
	///
	/// ```
	/// use argsift::Sift;
	///
	/// let mut args = Sift::new(["-v", "file", "--verbose"]);
	/// assert!(args.flag(&["v", "verbose"]));
	/// assert!(! args.flag(&["v", "verbose"]));
	/// assert_eq!(args.remaining(), ["file"]);
	/// ```
	pub fn flag<N: AsRef<str>>(&mut self, names: &[N]) -> bool {
		let before = self.remaining.len();
		self.remaining.retain(|raw| ! KeyMatch::is_bare(raw, names));
		let found = before - self.remaining.len();

		if found == 0 { false }
		else {
			trace!(found, names = ?Names(names), "consumed flag");
			true
		}
	}

	/// # Value.
	///
	/// Return the value supplied for the first key matching any of the
	/// names, scanning left to right, or `None` if there isn't one.
	///
	/// For `--name=val`, the entry is removed and `val` is returned. An
	/// explicitly empty `--name=` returns `Some("")`.
	///
	/// For `--name val`, both entries are removed and `val` is returned,
	/// whatever it happens to look like. If `--name` is the very last entry,
	/// it has no value to give; it is left in place (where [`Sift::flag`] can
	/// still find it) and the search comes up empty.
	///
	/// Only the first match is consumed; call again for the next one, or use
	/// [`Sift::values`] to collect them all.
	///
	/// An empty name list never matches.
	///
	/// ## Examples
	///
	/// ```
	/// use argsift::Sift;
	///
	/// let mut args = Sift::new(["--i=1", "-i", "2", "--i"]);
	/// assert_eq!(args.value(&["i", "interval"]).as_deref(), Some("1"));
	/// assert_eq!(args.value(&["i", "interval"]).as_deref(), Some("2"));
	/// assert_eq!(args.value(&["i", "interval"]), None);
	/// assert!(args.flag(&["i"]));
	/// ```
	pub fn value<N: AsRef<str>>(&mut self, names: &[N]) -> Option<String> {
		for idx in 0..self.remaining.len() {
			// Owned, so the borrow doesn't outlive the match.
			let hit = KeyMatch::find(&self.remaining[idx], names)
				.map(|m| match m {
					KeyMatch::Bare => None,
					KeyMatch::Inline(v) => Some(v.to_owned()),
				});

			match hit {
				// Glued.
				Some(Some(v)) => {
					let key = self.remaining.remove(idx);
					trace!(%key, value = %v, "consumed value");
					return Some(v);
				},
				// Consecutive.
				Some(None) if idx + 1 < self.remaining.len() => {
					let v = self.remaining.remove(idx + 1);
					let key = self.remaining.remove(idx);
					trace!(%key, value = %v, "consumed value");
					return Some(v);
				},
				_ => {},
			}
		}

		None
	}

	/// # Values.
	///
	/// Return every value supplied for any of the names, in order, consuming
	/// them all. This is useful for options that may be repeated.
	///
	/// ## Examples
	///
	/// ```
	/// use argsift::Sift;
	///
	/// let mut args = Sift::new(["-I", "a", "--include=b", "c"]);
	/// assert_eq!(args.values(&["I", "include"]), ["a", "b"]);
	/// assert_eq!(args.remaining(), ["c"]);
	/// ```
	pub fn values<N: AsRef<str>>(&mut self, names: &[N]) -> Vec<String> {
		std::iter::from_fn(|| self.value(names)).collect()
	}

	/// # Switches As Bitflags.
	///
	/// If you have a lot of flags that directly correspond to bitflags, you
	/// can pass them all to this method and receive the appropriate combined
	/// flag value back. Each alias set is checked (and consumed) via
	/// [`Sift::flag`].
	///
	/// Note: the default value of `N` is used as a starting point. For `u8`,
	/// `u16`, etc., that's just `0`, but if using a custom type, make sure its
	/// default state is the equivalent of "no flags".
	///
	/// ## Examples
	///
	/// ```
	/// use argsift::Sift;
	///
	/// let mut args = Sift::new(["-o", "--two"]);
	/// let flags: u8 = args.bitflags([
	///     (&["o", "one"][..], 0b0000_0001),
	///     (&["t", "two"][..], 0b0000_0010),
	///     (&["x", "three"][..], 0b0000_0100),
	/// ]);
	/// assert_eq!(flags, 0b0000_0011);
	/// ```
	pub fn bitflags<'a, N, I>(&mut self, pairs: I) -> N
	where
		N: BitOr<Output = N> + Default,
		I: IntoIterator<Item=(&'a [&'a str], N)>
	{
		pairs.into_iter()
			.fold(N::default(), |flags, (names, flag)|
				if self.flag(names) { flags | flag }
				else { flags }
			)
	}

	/// # Truncate After.
	///
	/// Find the first remaining entry exactly equal to `token` — no dash
	/// magic here — and split the set there. The token and everything after
	/// it are removed; everything after it is returned.
	///
	/// If the token isn't present, an empty vector is returned and nothing
	/// changes.
	///
	/// This is most often used with `"--"` to grab passthrough arguments.
	///
	/// ## Examples
	///
	/// ```
	/// use argsift::Sift;
	///
	/// let mut args = Sift::new(["x", "--", "y", "z"]);
	/// assert_eq!(args.truncate_after("--"), ["y", "z"]);
	/// assert_eq!(args.remaining(), ["x"]);
	/// ```
	pub fn truncate_after(&mut self, token: &str) -> Vec<String> {
		let Some(idx) = self.remaining.iter().position(|v| v == token) else {
			return Vec::new();
		};

		let out = self.remaining.split_off(idx + 1);
		self.remaining.truncate(idx);
		trace!(token, found = out.len(), "truncated");
		out
	}
}



/// # Debuggable Names.
///
/// This lets alias lists of any `AsRef<str>` type be logged.
struct Names<'a, N>(&'a [N]);

impl<N: AsRef<str>> std::fmt::Debug for Names<'_, N> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.0.iter().map(AsRef::as_ref)).finish()
	}
}



#[must_use]
/// # CLI Arguments.
///
/// Return a [`Sift`] seeded with [`std::env::args_os`], skipping the first
/// (command path) entry.
///
/// Arguments that aren't valid UTF-8 are converted lossily rather than
/// causing a panic.
pub fn args() -> Sift {
	std::env::args_os()
		.skip(1)
		.map(|v| v.into_string().unwrap_or_else(|v| v.to_string_lossy().into_owned()))
		.collect()
}
