//! Reading and editing files on disk

use crate::config::{ParseOptions, WriteOptions};
use crate::error::Result;
use crate::frame::FieldKey;
use crate::macros::err;
use crate::read::parse_id3v2;
use crate::tag::Id3v2Tag;
use crate::util::text::latin1_encode;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Read the tag from the start of `reader`
///
/// # Errors
///
/// * The stream doesn't start with an ID3v2 header
/// * A frame is malformed, and the [`ParsingMode`](crate::config::ParsingMode) doesn't allow recovery
/// * `reader` fails
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> mp3tag::error::Result<()> {
/// use mp3tag::config::ParseOptions;
/// use std::fs::File;
///
/// let mut file = File::open("test.mp3")?;
/// let tag = mp3tag::read_from(&mut file, ParseOptions::new())?;
///
/// println!("Title: {:?}", tag.title());
/// # Ok(()) }
/// ```
pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Id3v2Tag>
where
	R: Read + Seek,
{
	parse_id3v2(reader, parse_options)
}

/// Read the tag of the file at `path`
///
/// # Errors
///
/// * `path` has an extension other than ".mp3"
/// * See [`read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> mp3tag::error::Result<()> {
/// use mp3tag::config::ParseOptions;
///
/// let tag = mp3tag::read_from_path("test.mp3", ParseOptions::new())?;
/// println!("Version: {}", tag.header().version_string());
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P, parse_options: ParseOptions) -> Result<Id3v2Tag>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	verify_extension(path)?;

	let mut reader = BufReader::new(File::open(path)?);
	parse_id3v2(&mut reader, parse_options)
}

/// Replace the value of a single field in the file at `path`
///
/// The edited file is assembled in a temporary file next to the original, which then replaces
/// the original in a single rename. If anything fails, the original is left untouched.
///
/// # Errors
///
/// * `path` has an extension other than ".mp3"
/// * `key` is read-only
/// * `value` can't be encoded as Latin-1
/// * `key` is not present in the tag
/// * See [`read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> mp3tag::error::Result<()> {
/// use mp3tag::config::{ParseOptions, WriteOptions};
/// use mp3tag::frame::FieldKey;
///
/// mp3tag::edit_path(
/// 	"test.mp3",
/// 	FieldKey::Artist,
/// 	"Foo artist",
/// 	ParseOptions::new(),
/// 	WriteOptions::new(),
/// )?;
/// # Ok(()) }
/// ```
pub fn edit_path<P>(
	path: P,
	key: FieldKey,
	value: &str,
	parse_options: ParseOptions,
	write_options: WriteOptions,
) -> Result<()>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	verify_extension(path)?;

	if !key.is_editable() {
		err!(Argument(ReadOnlyField(key)));
	}

	latin1_encode(value)?;

	let mut reader = BufReader::new(File::open(path)?);
	let tag = parse_id3v2(&mut reader, parse_options)?;

	// Checked early to avoid creating a temporary file for nothing
	if tag.get(key).is_none() {
		err!(Format(FieldNotFound(key)));
	}

	let mut temp_file = NamedTempFile::new_in(temp_dir_for(path))?;
	log::debug!(
		"Writing edited file to {}",
		temp_file.path().display()
	);

	{
		let mut writer = BufWriter::new(temp_file.as_file_mut());
		tag.splice(&mut reader, &mut writer, key, value, write_options)?;
		writer.flush()?;
	}

	let permissions = reader.get_ref().metadata()?.permissions();
	drop(reader);

	let temp = temp_file.as_file();
	temp.set_permissions(permissions)?;
	temp.sync_all()?;

	temp_file.persist(path)?;
	log::debug!("Replaced {}", path.display());

	Ok(())
}

// Must be on the same filesystem as `path` for the rename to be atomic
fn temp_dir_for(path: &Path) -> &Path {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	}
}

fn verify_extension(path: &Path) -> Result<()> {
	match path.extension() {
		Some(ext) if !ext.eq_ignore_ascii_case("mp3") => {
			err!(Argument(BadExtension(ext.to_string_lossy().into_owned())))
		},
		_ => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::{temp_dir_for, verify_extension};
	use crate::error::{ArgumentError, ErrorKind};

	use std::path::Path;

	#[test_log::test]
	fn extensions() {
		assert!(verify_extension(Path::new("song.mp3")).is_ok());
		assert!(verify_extension(Path::new("SONG.MP3")).is_ok());
		// No extension at all is fine
		assert!(verify_extension(Path::new("song")).is_ok());

		let err = verify_extension(Path::new("song.flac")).unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Argument(ArgumentError::BadExtension(ext)) if ext == "flac"
		));
	}

	#[test_log::test]
	fn temp_file_next_to_original() {
		assert_eq!(temp_dir_for(Path::new("/music/song.mp3")), Path::new("/music"));
		assert_eq!(temp_dir_for(Path::new("album/song.mp3")), Path::new("album"));
		// A bare file name has an empty parent
		assert_eq!(temp_dir_for(Path::new("song.mp3")), Path::new("."));
	}
}
