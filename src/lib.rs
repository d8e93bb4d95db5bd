/*!
# Argsift

This crate provides a tiny, consuming CLI argument matcher called [`Sift`],
offering a middle ground between the standard library's barebones
[`std::env::args_os`] helper and full-service crates like
[clap](https://crates.io/crates/clap).

[`Sift`] holds onto the raw arguments and lets you ask, in whatever order
you like, whether a flag is present or what value was given for an option.
Each answer removes the matching entries from the working set, so asking
again yields the next match (or nothing), and whatever is left at the end is
yours to deal with.

It does not validate, coerce, or complain. Unexpected arguments are simply
left over.

If that sounds terrible, just use [clap](https://crates.io/crates/clap)
instead. Haha.



## Syntax

* Keys may be prefixed with one or two dashes: `-v`, `--v`, `-verbose`, and `--verbose` are all the same;
* Values may be glued with an `=` (`--key=val`) or passed as the next entry (`--key val`);
* Everything after the first `=` is the value, so `--key=a=b` yields `a=b`;
* `--key=` yields an empty value, which is different from no value at all;
* Names must match exactly: `t` will never match `--test`.



## Example

```
use argsift::Sift;

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    verbose: bool,
    threads: Option<String>,
    passthru: Vec<String>,
    paths: Vec<String>,
}

// Most of the time this would be `argsift::args()`.
let mut args = Sift::new(["-v", "--threads=4", "/foo", "--", "-x"]);

let mut settings = Settings::default();
settings.passthru = args.truncate_after("--");
settings.verbose = args.flag(&["v", "verbose"]);
settings.threads = args.value(&["t", "threads"]);

// Whatever is left over, maybe you want to assume it's a path?
settings.paths = args.take();

assert!(settings.verbose);
assert_eq!(settings.threads.as_deref(), Some("4"));
assert_eq!(settings.passthru, ["-x"]);
assert_eq!(settings.paths, ["/foo"]);
```

If you'd rather declare everything up front, see [`Parser`].
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod error;
mod key;
mod parse;
mod sift;
mod usage;

pub use error::SiftError;
pub use parse::Parser;
pub use sift::{
	args,
	Sift,
};
pub use usage::Usage;



#[cfg(test)]
mod tests {
	// Dev dependencies used by the benches and demos.
	use brunch as _;
	use tracing_subscriber as _;
}
