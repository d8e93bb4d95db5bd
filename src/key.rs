/*!
# Argsift: Key Matching.
*/



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Key Match.
///
/// This enum classifies an argument entry that matched one of the names in an
/// alias set. Entries that don't match at all are simply `None` at the call
/// site.
///
/// The rules are deliberately narrow:
/// * An entry must begin with exactly one or two dashes;
/// * The dashes must be followed by the full name, byte for byte;
/// * The name must be followed by nothing at all, or by an `=`.
///
/// That last rule is what keeps the name `t` from matching `--test`.
pub(crate) enum KeyMatch<'a> {
	/// # Bare Key.
	///
	/// The entry is exactly `-name` or `--name`.
	Bare,

	/// # Key With Inline Value.
	///
	/// The entry is `-name=…` or `--name=…`. This holds everything after the
	/// first `=`, which may be empty or contain more `=` signs.
	Inline(&'a str),
}

impl<'a> KeyMatch<'a> {
	#[must_use]
	/// # Match Against Any Name.
	///
	/// Names are tried in order; the first match wins.
	pub(crate) fn find<N: AsRef<str>>(raw: &'a str, names: &[N]) -> Option<Self> {
		names.iter().find_map(|n| Self::from_name(raw, n.as_ref()))
	}

	#[must_use]
	/// # Is Bare?
	///
	/// Returns `true` if `raw` is a flag-shaped `-name` or `--name` for any of
	/// the names.
	pub(crate) fn is_bare<N: AsRef<str>>(raw: &'a str, names: &[N]) -> bool {
		names.iter().any(|n| matches!(Self::from_name(raw, n.as_ref()), Some(Self::Bare)))
	}

	#[must_use]
	/// # Match Against One Name.
	pub(crate) fn from_name(raw: &'a str, name: &str) -> Option<Self> {
		if name.is_empty() { return None; }

		// One dash is required; a second is optional. Both readings are tried
		// so a name may itself begin with a dash.
		let rest = raw.strip_prefix('-')?;
		Self::after_dashes(rest, name).or_else(||
			rest.strip_prefix('-').and_then(|rest| Self::after_dashes(rest, name))
		)
	}

	/// # Match After Dashes.
	fn after_dashes(rest: &'a str, name: &str) -> Option<Self> {
		let tail = rest.strip_prefix(name)?;
		if tail.is_empty() { Some(Self::Bare) }
		else { tail.strip_prefix('=').map(Self::Inline) }
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_from_name() {
		for (raw, expected) in [
			("-k", Some(KeyMatch::Bare)),
			("--k", Some(KeyMatch::Bare)),
			("-k=", Some(KeyMatch::Inline(""))),
			("--k=", Some(KeyMatch::Inline(""))),
			("--k=val", Some(KeyMatch::Inline("val"))),
			("--k=a=b", Some(KeyMatch::Inline("a=b"))),
			("--k==", Some(KeyMatch::Inline("="))),
			("k", None),
			("---k", None),
			("---k=v", None),
			("--kv", None),
			("--kv=v", None),
			("-K", None),
			("", None),
			("-", None),
			("--", None),
		] {
			assert_eq!(
				KeyMatch::from_name(raw, "k"),
				expected,
				"Bug: {raw:?} matched wrong.",
			);
		}
	}

	#[test]
	fn t_prefix() {
		// A short name must never match a longer one sharing its start.
		assert_eq!(KeyMatch::from_name("--test", "t"), None);
		assert_eq!(KeyMatch::from_name("--test=ing", "t"), None);
		assert_eq!(KeyMatch::from_name("-test", "t"), None);
		assert_eq!(KeyMatch::from_name("--test", "test"), Some(KeyMatch::Bare));
	}

	#[test]
	fn t_dashed_names() {
		assert_eq!(KeyMatch::from_name("--split-flag", "split-flag"), Some(KeyMatch::Bare));
		assert_eq!(KeyMatch::from_name("-single-dash", "single-dash"), Some(KeyMatch::Bare));

		// A name with its own dash still only gets two in front.
		assert_eq!(KeyMatch::from_name("--x", "-x"), Some(KeyMatch::Bare));
		assert_eq!(KeyMatch::from_name("---x", "-x"), Some(KeyMatch::Bare));
		assert_eq!(KeyMatch::from_name("----x", "-x"), None);
	}

	#[test]
	fn t_special_chars() {
		// Nothing in a name is treated as a pattern.
		assert_eq!(KeyMatch::from_name("--a.c", "a.c"), Some(KeyMatch::Bare));
		assert_eq!(KeyMatch::from_name("--abc", "a.c"), None);
		assert_eq!(KeyMatch::from_name("--x", ".*"), None);
		assert_eq!(KeyMatch::from_name("--(a|b)=1", "(a|b)"), Some(KeyMatch::Inline("1")));
	}

	#[test]
	fn t_empty_name() {
		for raw in ["-", "--", "-=", "--=v"] {
			assert_eq!(KeyMatch::from_name(raw, ""), None, "Bug: empty name matched {raw:?}.");
		}
	}

	#[test]
	fn t_find() {
		let names = ["f", "fetch"];
		assert_eq!(KeyMatch::find("--fetch", &names), Some(KeyMatch::Bare));
		assert_eq!(KeyMatch::find("-f=1", &names), Some(KeyMatch::Inline("1")));
		assert_eq!(KeyMatch::find("--fetcher", &names), None);

		let none: [&str; 0] = [];
		assert_eq!(KeyMatch::find("--fetch", &none), None);

		assert!(KeyMatch::is_bare("-f", &names));
		assert!(! KeyMatch::is_bare("-f=", &names));
		assert!(! KeyMatch::is_bare("--fetch=x", &names));
		assert!(! KeyMatch::is_bare("--fetch", &none));
	}

	#[test]
	fn t_is_bare_owned() {
		// Entries borrowed from owned, short-lived strings.
		let names = vec![String::from("f"), String::from("fetch")];
		let mut raw: Vec<String> = ["-f", "x", "--fetch", "--fetch=1"].into_iter()
			.map(String::from)
			.collect();
		raw.retain(|v| ! KeyMatch::is_bare(v, &names));
		assert_eq!(raw, ["x", "--fetch=1"]);
	}
}
