/*!
# Argsift: Usage.
*/

use std::{
	borrow::Cow,
	io::{
		self,
		Write,
	},
	process::ExitCode,
};
use tracing::warn;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Usage Text.
///
/// This is a thin wrapper around a pre-written help screen. It doesn't
/// generate anything; it just decides where the text goes and what exit code
/// follows.
///
/// A zero status is a request for help, so the text goes to `stdout`. Any
/// other status means something went wrong, so the text goes to `stderr`.
///
/// ## Examples
///
/// ```no_run
/// use argsift::Usage;
/// use std::process::ExitCode;
///
/// const USAGE: Usage = Usage::new_static("Usage: app [-h] [--out PATH]");
///
/// fn main() -> ExitCode {
///     let mut args = argsift::args();
///     if args.flag(&["h", "help"]) { return USAGE.print(0); }
///     if args.value(&["out"]).is_none() { return USAGE.print(1); }
///     ExitCode::SUCCESS
/// }
/// ```
pub struct Usage(Cow<'static, str>);

impl From<String> for Usage {
	#[inline]
	fn from(src: String) -> Self { Self(Cow::Owned(src)) }
}

impl From<&'static str> for Usage {
	#[inline]
	fn from(src: &'static str) -> Self { Self(Cow::Borrowed(src)) }
}

impl Usage {
	#[must_use]
	/// # New (Static).
	pub const fn new_static(text: &'static str) -> Self { Self(Cow::Borrowed(text)) }

	#[must_use]
	#[inline]
	/// # As String Slice.
	pub fn as_str(&self) -> &str { &self.0 }

	/// # Print.
	///
	/// Write the text to `stdout` if `status` is zero, `stderr` otherwise, and
	/// return the corresponding exit code.
	///
	/// Write errors are logged but otherwise ignored; there's nowhere else to
	/// report them.
	pub fn print(&self, status: u8) -> ExitCode {
		self.print_to(status, io::stdout().lock(), io::stderr().lock())
	}

	/// # Print To.
	///
	/// Same as [`Usage::print`], but with the output and error writers
	/// supplied by the caller.
	pub fn print_to<O: Write, E: Write>(&self, status: u8, out: O, err: E)
	-> ExitCode {
		let res =
			if status == 0 { self.write_to(out) }
			else { self.write_to(err) };

		if let Err(e) = res { warn!(status, error = %e, "unable to print usage"); }
		ExitCode::from(status)
	}

	/// # Write To.
	///
	/// Write the text, plus a trailing line break if it doesn't have one, to
	/// any writer.
	///
	/// ## Errors
	///
	/// This bubbles up any I/O errors from the writer.
	pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
		writer.write_all(self.0.as_bytes())?;
		if ! self.0.ends_with('\n') { writer.write_all(b"\n")?; }
		writer.flush()
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_write_to() {
		for (src, expected) in [
			("Usage: app", "Usage: app\n"),
			("Usage: app\n", "Usage: app\n"),
			("", "\n"),
		] {
			let mut out = Vec::new();
			Usage::new_static(src).write_to(&mut out).expect("Usage::write_to failed.");
			assert_eq!(String::from_utf8(out).expect("Invalid UTF-8."), expected);
		}
	}

	#[test]
	fn t_print() {
		let usage = Usage::new_static("Usage: app");

		// Help goes to stdout.
		let mut out: Vec<u8> = Vec::new();
		let mut err: Vec<u8> = Vec::new();
		let code = usage.print_to(0, &mut out, &mut err);
		assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
		assert_eq!(out, b"Usage: app\n");
		assert!(err.is_empty(), "Nothing should have been written to stderr.");

		// Failure goes to stderr.
		for status in [1_u8, 2, 255] {
			let mut out: Vec<u8> = Vec::new();
			let mut err: Vec<u8> = Vec::new();
			let code = usage.print_to(status, &mut out, &mut err);
			assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::from(status)));
			assert_ne!(format!("{code:?}"), format!("{:?}", ExitCode::SUCCESS));
			assert!(out.is_empty(), "Nothing should have been written to stdout ({status}).");
			assert_eq!(err, b"Usage: app\n");
		}
	}

	#[test]
	fn t_from() {
		let a = Usage::from("Usage: app");
		let b = Usage::from(String::from("Usage: app"));
		assert_eq!(a, b);
		assert_eq!(a.as_str(), "Usage: app");
	}
}
