//! Validated edit requests

use crate::config::{ParseOptions, WriteOptions};
use crate::error::Result;
use crate::frame::FieldKey;
use crate::macros::err;
use crate::util::text::latin1_encode;

use std::path::Path;

/// A single field edit, checked before any file is touched
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditRequest {
	key: FieldKey,
	value: String,
}

impl EditRequest {
	/// Create an edit for `key`
	///
	/// # Errors
	///
	/// * `key` is read-only, see [`FieldKey::is_editable`]
	/// * `value` can't be encoded as Latin-1
	pub fn new(key: FieldKey, value: impl Into<String>) -> Result<Self> {
		if !key.is_editable() {
			err!(Argument(ReadOnlyField(key)));
		}

		let value = value.into();
		latin1_encode(&value)?;

		Ok(Self { key, value })
	}

	/// Create an edit from a command line option letter and its value
	///
	/// # Errors
	///
	/// * `option` is not one of `t T a A y c g`
	/// * `value` is `None`
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::edit::EditRequest;
	/// use mp3tag::frame::FieldKey;
	///
	/// # fn main() -> mp3tag::error::Result<()> {
	/// let edit = EditRequest::from_option('A', Some(String::from("Foo album")))?;
	///
	/// assert_eq!(edit.key(), FieldKey::Album);
	/// assert_eq!(edit.value(), "Foo album");
	/// # Ok(()) }
	/// ```
	pub fn from_option(option: char, value: Option<String>) -> Result<Self> {
		let Some(key) = FieldKey::from_option(option) else {
			err!(Argument(UnknownOption(option)));
		};

		let Some(value) = value else {
			err!(Argument(MissingValue));
		};

		Self::new(key, value)
	}

	/// Create an edit from a frame ID, such as "TIT2"
	///
	/// # Errors
	///
	/// * `id` is not one of the known frame IDs
	/// * The field is read-only
	pub fn from_id(id: &str, value: impl Into<String>) -> Result<Self> {
		Self::new(id.parse()?, value)
	}

	/// The field to edit
	pub fn key(&self) -> FieldKey {
		self.key
	}

	/// The new value
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Apply the edit to the file at `path`
	///
	/// # Errors
	///
	/// See [`edit_path`](crate::edit_path)
	pub fn apply_to_path<P>(
		&self,
		path: P,
		parse_options: ParseOptions,
		write_options: WriteOptions,
	) -> Result<()>
	where
		P: AsRef<Path>,
	{
		crate::file::edit_path(path, self.key, &self.value, parse_options, write_options)
	}
}
