/*!
# Argsift: Debug

This example runs a few common queries against whatever arguments it is fed,
then prints the results and the leftovers.

Set `RUST_LOG=argsift=trace` to watch the matches as they happen.
*/

use argsift::{
	Parser,
	SiftError,
	Usage,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;



/// # Help Screen.
const USAGE: Usage = Usage::new_static(
	"Usage: debug [-h|--help] [-v|--verbose] [-o|--out <PATH>] [ARGS]… [-- <PASSTHRU>…]"
);



fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let mut help = false;
	let mut verbose = false;
	let mut out = None;
	let mut passthru = Vec::new();

	let leftover = match parser(&mut help, &mut verbose, &mut out, &mut passthru) {
		Ok(p) => p.parse(argsift::args()),
		Err(e) => {
			eprintln!("\x1b[1;91mError:\x1b[0m {e}");
			return ExitCode::FAILURE;
		},
	};

	if help { return USAGE.print(0); }

	println!("\x1b[2mVerbose:\x1b[0m  {verbose}");
	println!("\x1b[2mOut:\x1b[0m      {out:?}");
	println!("\x1b[2mPassthru:\x1b[0m {passthru:?}");
	println!("\x1b[2mOriginal:\x1b[0m {:?}", leftover.original());
	println!("\x1b[2mLeftover:\x1b[0m {:?}", leftover.remaining());

	ExitCode::SUCCESS
}

/// # Parser.
fn parser<'a>(
	help: &'a mut bool,
	verbose: &'a mut bool,
	out: &'a mut Option<String>,
	passthru: &'a mut Vec<String>,
) -> Result<Parser<'a>, SiftError> {
	Parser::default()
		.with_trailing("--", move |v| *passthru = v)?
		.with_flag(&["h", "help"], move |v| *help = v)?
		.with_flag(&["v", "verbose"], move |v| *verbose = v)?
		.with_value(&["o", "out"], move |v| *out = v)
}
