#![allow(missing_docs)]

mod util;

use mp3tag::config::{ParseOptions, ParsingMode, SanitizePolicy, ScanStrategy};
use mp3tag::error::{ArgumentError, ErrorKind, FormatError};
use mp3tag::frame::FieldKey;
use mp3tag::picture::PictureType;

use std::io::Cursor;

#[test_log::test]
fn read_path() {
	let (_dir, path) = util::temp_mp3("full.mp3", &util::full_tag());
	let tag = mp3tag::read_from_path(&path, ParseOptions::new()).unwrap();

	assert_eq!(tag.header().version_string(), "ID3 v2.3");
	assert_eq!(tag.title().as_deref(), Some("Foo title"));
	assert_eq!(tag.track().as_deref(), Some("1"));
	assert_eq!(tag.artist().as_deref(), Some("Bar artist"));
	assert_eq!(tag.album().as_deref(), Some("Baz album"));
	assert_eq!(tag.year().as_deref(), Some("1984"));
	assert_eq!(tag.comment().as_deref(), Some("Qux comment"));
	assert_eq!(tag.genre().as_deref(), Some("Rock"));
	assert_eq!(tag.time().as_deref(), Some("1200"));

	let picture = tag.picture().unwrap().unwrap();
	assert_eq!(picture.mime_type(), "image/jpeg");
	assert_eq!(picture.pic_type(), PictureType::CoverFront);
	assert_eq!(picture.description(), "Front cover");
	assert_eq!(picture.data(), b"\xFF\xD8\xFF\xE0");
}

#[test_log::test]
fn frames_in_table_order() {
	let bytes = util::mp3(&[
		util::frame(b"TCON", b"Rock"),
		util::frame(b"TIT2", b"Title"),
		util::frame(b"TPE1", b"Artist"),
	]);
	let tag = mp3tag::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();

	let keys = tag.frames().iter().map(|f| f.key()).collect::<Vec<_>>();
	assert_eq!(keys, [FieldKey::Title, FieldKey::Artist, FieldKey::Genre]);
}

#[test_log::test]
fn wrong_extension() {
	let (_dir, path) = util::temp_mp3("full.flac", &util::full_tag());

	let err = mp3tag::read_from_path(&path, ParseOptions::new()).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Argument(ArgumentError::BadExtension(_))
	));
}

#[test_log::test]
fn uppercase_extension() {
	let (_dir, path) = util::temp_mp3("FULL.MP3", &util::full_tag());
	assert!(mp3tag::read_from_path(&path, ParseOptions::new()).is_ok());
}

#[test_log::test]
fn not_id3() {
	let mut bytes = util::full_tag();
	bytes[..3].copy_from_slice(b"TAG");

	let err = mp3tag::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Format(FormatError::BadMagic)));
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();

	let err =
		mp3tag::read_from_path(dir.path().join("missing.mp3"), ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}

#[test_log::test]
fn empty_tag() {
	let bytes = util::mp3_with_size(&[0; 64], 64);
	let tag = mp3tag::read_from(&mut Cursor::new(bytes), ParseOptions::new()).unwrap();

	assert!(tag.frames().is_empty());
	assert!(tag.title().is_none());
}

#[test_log::test]
fn truncated_frame() {
	// Declares 100 bytes, the stream has far fewer
	let mut frames = util::frame(b"TIT2", b"Title");
	frames.extend(b"TALB\x00\x00\x00\x64\x00\x00\x00Alb");
	let mut bytes = b"ID3\x03\x00\x00".to_vec();
	bytes.extend((frames.len() as u32 + 200).to_be_bytes());
	bytes.extend(&frames);

	// Whatever made it into the stream is kept
	let tag = mp3tag::read_from(&mut Cursor::new(&bytes), ParseOptions::new()).unwrap();
	assert_eq!(tag.title().as_deref(), Some("Title"));
	assert_eq!(tag.album().as_deref(), Some("Alb"));
	assert_eq!(tag.get(FieldKey::Album).unwrap().size(), 100);

	let heuristic = ParseOptions::new()
		.scan_strategy(ScanStrategy::Heuristic)
		.parsing_mode(ParsingMode::Strict);
	let err = mp3tag::read_from(&mut Cursor::new(&bytes), heuristic).unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::FrameOutOfBounds)
	));
}

#[test_log::test]
fn sanitize_policies() {
	let bytes = util::mp3(&[
		util::frame(b"TIT2", b"\0Caf\xE9"),
		util::frame(b"TPE1", b"Caf\xE9"),
		util::frame(b"APIC", b"image/png\0\x03\0\xFF\x00"),
	]);

	let tag = mp3tag::read_from(&mut Cursor::new(&bytes), ParseOptions::new()).unwrap();
	assert_eq!(tag.title().as_deref(), Some(""));

	let strip = ParseOptions::new().sanitize(SanitizePolicy::StripNul);
	let tag = mp3tag::read_from(&mut Cursor::new(&bytes), strip).unwrap();
	assert_eq!(tag.title().as_deref(), Some("Caf\u{e9}"));
	// Binary payloads are never touched
	assert_eq!(tag.picture().unwrap().unwrap().data(), b"\xFF\x00");

	let mask = ParseOptions::new().sanitize(SanitizePolicy::MaskHighBit);
	let tag = mp3tag::read_from(&mut Cursor::new(&bytes), mask).unwrap();
	assert_eq!(tag.artist().as_deref(), Some("Caf\u{7f}"));
	assert_eq!(tag.picture().unwrap().unwrap().data(), b"\xFF\x00");
}

#[test_log::test]
fn heuristic_scan_of_legacy_file() {
	// The title grew past the declared end of the tag
	let title = util::frame(b"TIT2", b"A title that kept growing");
	let mut frames = title.clone();
	frames.extend(util::frame(b"TPE1", b"Artist"));
	let bytes = util::mp3_with_size(&frames, title.len() as u32 - 10);

	let tag = mp3tag::read_from(&mut Cursor::new(&bytes), ParseOptions::new()).unwrap();
	assert!(tag.frames().is_empty());

	let heuristic = ParseOptions::new().scan_strategy(ScanStrategy::Heuristic);
	let tag = mp3tag::read_from(&mut Cursor::new(&bytes), heuristic).unwrap();
	assert_eq!(tag.title().as_deref(), Some("A title that kept growing"));
	// Starts past the declared end
	assert!(tag.artist().is_none());
}
