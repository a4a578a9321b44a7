#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mp3tag::config::{ParseOptions, ScanStrategy};

fuzz_target!(|data: Vec<u8>| {
	let parse_options = ParseOptions::new().scan_strategy(ScanStrategy::Heuristic);
	let _ = mp3tag::read_from(&mut Cursor::new(data), parse_options);
});
