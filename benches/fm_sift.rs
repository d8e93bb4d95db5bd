/*!
# Benchmark: `argsift::Sift`
*/

use brunch::{
	Bench,
	benches,
};
use argsift::Sift;

fn sift() -> Sift {
	Sift::new([
		"-k",
		"--key=val",
		"-x",
		"out",
		"--quiet",
		"/foo/bar",
		"/bar/baz",
		"--",
		"--end",
	])
}

benches!(
	Bench::new("argsift::Sift::new(9)")
		.run(sift),

	Bench::spacer(),

	Bench::new("argsift::Sift::flag(q, quiet)")
		.run_seeded_with(sift, |mut s| s.flag(&["q", "quiet"])),

	Bench::new("argsift::Sift::value(x)")
		.run_seeded_with(sift, |mut s| s.value(&["x"])),

	Bench::new("argsift::Sift::value(key)")
		.run_seeded_with(sift, |mut s| s.value(&["key"])),

	Bench::new("argsift::Sift::truncate_after(--)")
		.run_seeded_with(sift, |mut s| s.truncate_after("--")),
);
