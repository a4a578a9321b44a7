//! ID3v2 frames and the fields they map to

pub(crate) mod read;

use crate::error::{FormatError, Mp3TagError};
use crate::util::text::{latin1_decode_terminated, split_terminated};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The size of a frame header: 4 byte key, 4 byte size, 2 flag bytes
pub(crate) const FRAME_HEADER_SIZE: u64 = 10;

/// The fixed prefix every payload sits behind: 2 flag bytes and the encoding byte
pub(crate) const FIXED_PREFIX_LEN: u64 = 3;

/// Distance from the start of the size field to the start of the payload
pub(crate) const SIZE_FIELD_TO_PAYLOAD: u64 = 4 + FIXED_PREFIX_LEN;

/// The fields mp3tag understands
///
/// Each field is stored in a single frame, identified by a 4 character ID.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
	/// `TIT2`
	Title,
	/// `TRCK`
	Track,
	/// `TPE1`
	Artist,
	/// `TALB`
	Album,
	/// `TYER`
	Year,
	/// `COMM`
	Comment,
	/// `TCON`
	Genre,
	/// `TIME`
	Time,
	/// `APIC`
	Image,
}

impl FieldKey {
	/// The number of known fields
	pub const COUNT: usize = 9;

	/// Every known field, in table order
	pub const ALL: [FieldKey; Self::COUNT] = [
		Self::Title,
		Self::Track,
		Self::Artist,
		Self::Album,
		Self::Year,
		Self::Comment,
		Self::Genre,
		Self::Time,
		Self::Image,
	];

	/// The frame ID for this field
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::frame::FieldKey;
	///
	/// assert_eq!(FieldKey::Title.id(), "TIT2");
	/// assert_eq!(FieldKey::Image.id(), "APIC");
	/// ```
	pub const fn id(self) -> &'static str {
		match self {
			Self::Title => "TIT2",
			Self::Track => "TRCK",
			Self::Artist => "TPE1",
			Self::Album => "TALB",
			Self::Year => "TYER",
			Self::Comment => "COMM",
			Self::Genre => "TCON",
			Self::Time => "TIME",
			Self::Image => "APIC",
		}
	}

	/// Find the field stored under the frame ID `id`
	pub fn from_id(id: &[u8]) -> Option<Self> {
		Self::ALL.into_iter().find(|key| key.id().as_bytes() == id)
	}

	/// Whether or not `byte` starts any known frame ID
	pub(crate) fn starts_id(byte: u8) -> bool {
		Self::ALL.iter().any(|key| key.id().as_bytes()[0] == byte)
	}

	/// The command line option letter for the field, if it can be edited
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::frame::FieldKey;
	///
	/// assert_eq!(FieldKey::Album.option(), Some('A'));
	/// assert_eq!(FieldKey::Time.option(), None);
	/// ```
	pub const fn option(self) -> Option<char> {
		match self {
			Self::Title => Some('t'),
			Self::Track => Some('T'),
			Self::Artist => Some('a'),
			Self::Album => Some('A'),
			Self::Year => Some('y'),
			Self::Comment => Some('c'),
			Self::Genre => Some('g'),
			Self::Time | Self::Image => None,
		}
	}

	/// Find the editable field for a command line option letter
	pub fn from_option(option: char) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|key| key.option() == Some(option))
	}

	/// Whether the field can be edited
	///
	/// Time and image frames are read-only.
	pub const fn is_editable(self) -> bool {
		self.option().is_some()
	}

	/// Bytes between the fixed prefix and the text, beyond what other fields carry
	///
	/// Comments store a 3 byte language code and a NUL terminated (empty) short description.
	pub(crate) const fn extra_prefix_len(self) -> u32 {
		match self {
			Self::Comment => 4,
			_ => 0,
		}
	}

	pub(crate) const fn index(self) -> usize {
		self as usize
	}
}

impl Display for FieldKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Title => "title",
			Self::Track => "track",
			Self::Artist => "artist",
			Self::Album => "album",
			Self::Year => "year",
			Self::Comment => "comment",
			Self::Genre => "genre",
			Self::Time => "time",
			Self::Image => "image",
		};

		f.write_str(name)
	}
}

impl FromStr for FieldKey {
	type Err = Mp3TagError;

	/// Parse a frame ID, such as "TIT2"
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_id(s.as_bytes()).ok_or_else(|| FormatError::UnknownField(s.to_owned()).into())
	}
}

/// A single frame located in a tag
///
/// The offsets are only meaningful for the stream the frame was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
	pub(crate) key: FieldKey,
	pub(crate) size: u32,
	pub(crate) payload_offset: u64,
	pub(crate) payload_len: u64,
	pub(crate) content: Vec<u8>,
}

impl Frame {
	/// The field this frame holds
	pub fn key(&self) -> FieldKey {
		self.key
	}

	/// The declared frame size, which includes the encoding byte
	pub fn size(&self) -> u32 {
		self.size
	}

	/// The absolute offset of the first payload byte
	pub fn payload_offset(&self) -> u64 {
		self.payload_offset
	}

	/// The number of payload bytes stored in the file
	///
	/// This is `size - 1`, unless the stream ends before the payload does.
	pub fn payload_len(&self) -> u64 {
		self.payload_len
	}

	/// The absolute offset of the frame's ID
	pub fn frame_offset(&self) -> u64 {
		self.payload_offset - FRAME_HEADER_SIZE - 1
	}

	/// The absolute offset of the first byte after the frame
	pub fn end(&self) -> u64 {
		self.payload_offset + self.payload_len()
	}

	pub(crate) fn size_field_offset(&self) -> u64 {
		self.payload_offset - SIZE_FIELD_TO_PAYLOAD
	}

	/// The payload, after sanitization
	pub fn content(&self) -> &[u8] {
		&self.content
	}

	/// The payload decoded as text
	///
	/// This is `None` for [`FieldKey::Image`]. For comments, the language code and the
	/// description are skipped.
	///
	/// # Examples
	///
	/// ```rust
	/// # fn main() -> mp3tag::error::Result<()> {
	/// use mp3tag::config::ParseOptions;
	/// use mp3tag::frame::FieldKey;
	/// use std::io::Cursor;
	///
	/// let mut file = Vec::new();
	/// file.extend(b"ID3\x03\x00\x00\x00\x00\x00\x0E");
	/// file.extend(b"TIT2\x00\x00\x00\x04\x00\x00\x00Hi\0");
	///
	/// let tag = mp3tag::read_from(&mut Cursor::new(file), ParseOptions::new())?;
	/// let title = tag.get(FieldKey::Title).unwrap();
	///
	/// assert_eq!(title.text().as_deref(), Some("Hi"));
	/// # Ok(()) }
	/// ```
	pub fn text(&self) -> Option<String> {
		match self.key {
			FieldKey::Image => None,
			FieldKey::Comment => {
				// Language code
				let rest = self.content.get(3..).unwrap_or_default();

				let (description, text) = split_terminated(rest);

				// Without a terminator, it's all text
				let text = if description.len() == rest.len() { rest } else { text };

				Some(latin1_decode_terminated(text))
			},
			_ => Some(latin1_decode_terminated(&self.content)),
		}
	}
}
