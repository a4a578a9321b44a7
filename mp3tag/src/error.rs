//! Contains the errors that can arise within mp3tag
//!
//! The primary error is [`Mp3TagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::frame::FieldKey;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Mp3TagError>`
pub type Result<T> = std::result::Result<T, Mp3TagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The caller provided invalid input, see [`ArgumentError`]
	Argument(ArgumentError),
	/// The file contents don't match what was expected, see [`FormatError`]
	Format(FormatError),

	/// Attempting to read/write an abnormally large amount of data
	TooMuchData,

	/// Failure to allocate enough memory
	Alloc(TryReserveError),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors caused by the caller's input, before any file contents are considered
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgumentError {
	/// The path has an extension other than `.mp3`
	BadExtension(String),
	/// An edit was requested without a replacement value
	MissingValue,
	/// The option letter doesn't map to an editable field
	UnknownOption(char),
	/// The field exists, but cannot be edited (time and image)
	ReadOnlyField(FieldKey),
	/// The new value has a character that Latin-1 can't represent
	NotLatin1(char),
}

impl Display for ArgumentError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadExtension(ext) => write!(f, "Expected an MP3 file, found extension \"{ext}\""),
			Self::MissingValue => write!(f, "No value was provided for the edit"),
			Self::UnknownOption(option) => write!(f, "Unknown option '-{option}'"),
			Self::ReadOnlyField(key) => write!(f, "The {key} field cannot be edited"),
			Self::NotLatin1(c) => write!(f, "'{c}' (U+{:04X}) cannot be stored as Latin-1", u32::from(*c)),
		}
	}
}

/// Errors that arise from the contents of a file
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
	/// The file doesn't start with an "ID3" header
	BadMagic,
	/// The requested field was never located in the tag
	FieldNotFound(FieldKey),
	/// The requested frame ID isn't one of the known fields
	UnknownField(String),
	/// A frame ID contains characters outside of `'A'..='Z'` and `'0'..='9'`
	BadFrameId([u8; 4]),
	/// A frame's declared size is too small to hold its fixed content
	BadFrameLength,
	/// A frame's payload extends past the end of the tag or the stream
	FrameOutOfBounds,
	/// An APIC payload couldn't be split into its parts
	NotAPicture,
}

impl Display for FormatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::BadMagic => write!(f, "Expected an ID3v2 tag, found invalid data"),
			Self::FieldNotFound(key) => {
				write!(f, "The {key} field (\"{}\") is not present in the tag", key.id())
			},
			Self::UnknownField(id) => write!(f, "\"{id}\" is not a supported field"),
			Self::BadFrameId(id) => write!(f, "Failed to parse a frame ID: 0x{id:x?}"),
			Self::BadFrameLength => write!(
				f,
				"Frame isn't long enough to extract the necessary information"
			),
			Self::FrameOutOfBounds => write!(f, "Frame extends past the end of the tag"),
			Self::NotAPicture => write!(f, "Picture: Encountered invalid data"),
		}
	}
}

/// Errors that could occur within mp3tag
pub struct Mp3TagError {
	pub(crate) kind: ErrorKind,
}

impl Mp3TagError {
	/// Create an `Mp3TagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::error::{ErrorKind, Mp3TagError};
	///
	/// let too_much_data = Mp3TagError::new(ErrorKind::TooMuchData);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::error::{ErrorKind, FormatError, Mp3TagError};
	///
	/// let bad_magic = Mp3TagError::from(FormatError::BadMagic);
	/// if let ErrorKind::Format(FormatError::BadMagic) = bad_magic.kind() {
	/// 	println!("Not an ID3v2 tag!");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for Mp3TagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			ErrorKind::Alloc(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for Mp3TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<ArgumentError> for Mp3TagError {
	fn from(input: ArgumentError) -> Self {
		Self {
			kind: ErrorKind::Argument(input),
		}
	}
}

impl From<FormatError> for Mp3TagError {
	fn from(input: FormatError) -> Self {
		Self {
			kind: ErrorKind::Format(input),
		}
	}
}

impl From<std::io::Error> for Mp3TagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<tempfile::PersistError> for Mp3TagError {
	fn from(input: tempfile::PersistError) -> Self {
		// The temporary file is dropped (and removed) along with the error
		Self {
			kind: ErrorKind::Io(input.error),
		}
	}
}

impl From<std::collections::TryReserveError> for Mp3TagError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for Mp3TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::Argument(ref err) => write!(f, "Argument: {err}"),
			ErrorKind::Format(ref err) => write!(f, "ID3v2: {err}"),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read/write an abnormally large amount of data"
			),
		}
	}
}
