#![allow(missing_docs)]

mod util;

use mp3tag::config::{ParseOptions, WriteOptions};
use mp3tag::edit::EditRequest;
use mp3tag::error::{ArgumentError, ErrorKind, FormatError};
use mp3tag::frame::FieldKey;

#[test_log::test]
fn edit_every_editable_field() {
	let (_dir, path) = util::temp_mp3("full.mp3", &util::full_tag());

	for key in FieldKey::ALL.into_iter().filter(|key| key.is_editable()) {
		let value = format!("New {key}");
		mp3tag::edit_path(
			&path,
			key,
			&value,
			ParseOptions::new(),
			WriteOptions::new(),
		)
		.unwrap();

		let tag = mp3tag::read_from_path(&path, ParseOptions::new()).unwrap();
		assert_eq!(tag.text(key), Some(value));
	}

	let tag = mp3tag::read_from_path(&path, ParseOptions::new()).unwrap();
	assert_eq!(tag.title().as_deref(), Some("New title"));
	assert_eq!(tag.comment().as_deref(), Some("New comment"));
	assert_eq!(tag.time().as_deref(), Some("1200"));
	assert_eq!(tag.picture().unwrap().unwrap().description(), "Front cover");

	// Frames were resized, but the audio is untouched
	let content = std::fs::read(&path).unwrap();
	assert!(content.ends_with(util::AUDIO));
	assert_eq!(
		u64::from(tag.header().size()) + 10,
		(content.len() - util::AUDIO.len()) as u64
	);

	util::assert_no_leftovers(&path);
}

#[test_log::test]
fn edit_from_option() {
	let (_dir, path) = util::temp_mp3("full.mp3", &util::full_tag());

	let edit = EditRequest::from_option('a', Some(String::from("Someone else"))).unwrap();
	edit.apply_to_path(&path, ParseOptions::new(), WriteOptions::new())
		.unwrap();

	let tag = mp3tag::read_from_path(&path, ParseOptions::new()).unwrap();
	assert_eq!(tag.artist().as_deref(), Some("Someone else"));
	assert_eq!(tag.title().as_deref(), Some("Foo title"));
}

#[test_log::test]
fn unknown_field_leaves_file_alone() {
	let original = util::full_tag();
	let (_dir, path) = util::temp_mp3("full.mp3", &original);

	let err = EditRequest::from_id("TPE2", "Foo").unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::UnknownField(_))
	));

	assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test_log::test]
fn missing_field_leaves_file_alone() {
	let original = util::mp3(&[util::frame(b"TIT2", b"Title")]);
	let (_dir, path) = util::temp_mp3("title.mp3", &original);

	let err = mp3tag::edit_path(
		&path,
		FieldKey::Genre,
		"Rock",
		ParseOptions::new(),
		WriteOptions::new(),
	)
	.unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Format(FormatError::FieldNotFound(FieldKey::Genre))
	));

	assert_eq!(std::fs::read(&path).unwrap(), original);
	util::assert_no_leftovers(&path);
}

#[test_log::test]
fn read_only_field_leaves_file_alone() {
	let original = util::full_tag();
	let (_dir, path) = util::temp_mp3("full.mp3", &original);

	let err = mp3tag::edit_path(
		&path,
		FieldKey::Image,
		"image/png",
		ParseOptions::new(),
		WriteOptions::new(),
	)
	.unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Argument(ArgumentError::ReadOnlyField(FieldKey::Image))
	));

	assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test_log::test]
fn wrong_extension_leaves_file_alone() {
	let original = util::full_tag();
	let (_dir, path) = util::temp_mp3("full.ogg", &original);

	let err = mp3tag::edit_path(
		&path,
		FieldKey::Title,
		"Title",
		ParseOptions::new(),
		WriteOptions::new(),
	)
	.unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Argument(ArgumentError::BadExtension(ext)) if ext == "ogg"
	));

	assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test_log::test]
fn edit_latin1_value() {
	let (_dir, path) = util::temp_mp3("full.mp3", &util::full_tag());

	mp3tag::edit_path(
		&path,
		FieldKey::Album,
		"Caf\u{e9} del Mar",
		ParseOptions::new(),
		WriteOptions::new(),
	)
	.unwrap();

	let tag = mp3tag::read_from_path(&path, ParseOptions::new()).unwrap();
	assert_eq!(tag.album().as_deref(), Some("Caf\u{e9} del Mar"));
}

#[test_log::test]
fn value_outside_latin1_leaves_file_alone() {
	let original = util::full_tag();
	let (_dir, path) = util::temp_mp3("full.mp3", &original);

	let err = mp3tag::edit_path(
		&path,
		FieldKey::Title,
		"\u{1f3b5}",
		ParseOptions::new(),
		WriteOptions::new(),
	)
	.unwrap_err();
	assert!(matches!(
		err.kind(),
		ErrorKind::Argument(ArgumentError::NotLatin1(_))
	));

	assert_eq!(std::fs::read(&path).unwrap(), original);
	util::assert_no_leftovers(&path);
}

#[cfg(unix)]
#[test_log::test]
fn permissions_preserved() {
	use std::os::unix::fs::PermissionsExt as _;

	let (_dir, path) = util::temp_mp3("full.mp3", &util::full_tag());
	std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

	mp3tag::edit_path(
		&path,
		FieldKey::Genre,
		"Jazz",
		ParseOptions::new(),
		WriteOptions::new(),
	)
	.unwrap();

	let mode = std::fs::metadata(&path).unwrap().permissions().mode();
	assert_eq!(mode & 0o777, 0o640);
}
