#![allow(dead_code)]

use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const AUDIO: &[u8] = b"\xFF\xFB\x90\x64\x00\x00\x00\x00audio data";

/// Build a frame with a zero flags field and Latin-1 encoding byte
pub fn frame(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
	let mut frame = id.to_vec();
	frame.extend((payload.len() as u32 + 1).to_be_bytes());
	frame.extend([0, 0, 0]);
	frame.extend(payload);
	frame
}

/// Build an ID3v2.3 file whose declared tag size matches `frames`
pub fn mp3(frames: &[Vec<u8>]) -> Vec<u8> {
	let frames = frames.concat();
	mp3_with_size(&frames, frames.len() as u32)
}

/// Build an ID3v2.3 file with an arbitrary declared tag size
pub fn mp3_with_size(frames: &[u8], declared: u32) -> Vec<u8> {
	let mut bytes = b"ID3\x03\x00\x00".to_vec();
	bytes.extend(declared.to_be_bytes());
	bytes.extend(frames);
	bytes.extend(AUDIO);
	bytes
}

/// A tag with every field filled in
pub fn full_tag() -> Vec<u8> {
	mp3(&[
		frame(b"TIT2", b"Foo title\0"),
		frame(b"TRCK", b"1"),
		frame(b"TPE1", b"Bar artist\0"),
		frame(b"TALB", b"Baz album\0"),
		frame(b"TYER", b"1984"),
		frame(b"COMM", b"eng\0Qux comment"),
		frame(b"TCON", b"Rock"),
		frame(b"TIME", b"1200"),
		frame(b"APIC", b"image/jpeg\0\x03Front cover\0\xFF\xD8\xFF\xE0"),
	])
}

/// Write `content` to `name` in a new temporary directory
///
/// The directory is removed once the returned [`TempDir`] is dropped.
pub fn temp_mp3(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join(name);

	let mut file = File::create(&path).unwrap();
	file.write_all(content).unwrap();

	(dir, path)
}

/// Verify that the directory holding `path` contains nothing but `path`
pub fn assert_no_leftovers(path: &Path) {
	let entries = std::fs::read_dir(path.parent().unwrap())
		.unwrap()
		.map(|entry| entry.unwrap().path())
		.collect::<Vec<_>>();

	assert_eq!(entries, [path.to_path_buf()]);
}
