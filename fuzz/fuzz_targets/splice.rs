#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mp3tag::config::{ParseOptions, WriteOptions};

fuzz_target!(|data: Vec<u8>| {
	let mut reader = Cursor::new(data);
	let Ok(tag) = mp3tag::read_from(&mut reader, ParseOptions::new()) else {
		return;
	};

	let Some(key) = tag.frames().iter().map(|f| f.key()).find(|k| k.is_editable()) else {
		return;
	};

	let mut writer = Cursor::new(Vec::new());
	if tag
		.splice(&mut reader, &mut writer, key, "fuzz", WriteOptions::new())
		.is_ok()
	{
		mp3tag::read_from(&mut writer, ParseOptions::new()).unwrap();
	}
});
