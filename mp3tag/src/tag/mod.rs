//! The frames of a tag, keyed by field


use crate::config::WriteOptions;
use crate::error::Result;
use crate::frame::{FieldKey, Frame};
use crate::header::Id3v2Header;
use crate::picture::Picture;

use std::io::{Read, Seek, Write};

macro_rules! impl_text_accessor {
	($($name:ident => $key:ident),+ $(,)?) => {
		paste::paste! {
			$(
				#[doc = "Returns the " $name ", if the tag has a `" $key "` frame"]
				pub fn $name(&self) -> Option<String> {
					self.text(FieldKey::$key)
				}
			)+
		}
	}
}

/// At most one [`Frame`] for each [`FieldKey`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameTable {
	slots: [Option<Frame>; FieldKey::COUNT],
}

impl FrameTable {
	/// Get the frame for `key`
	pub fn get(&self, key: FieldKey) -> Option<&Frame> {
		self.slots[key.index()].as_ref()
	}

	/// Store a frame, unless one already exists for its key
	///
	/// The first frame wins. If the slot is taken, `frame` is handed back.
	pub(crate) fn insert(&mut self, frame: Frame) -> Option<Frame> {
		let slot = &mut self.slots[frame.key().index()];
		if slot.is_some() {
			return Some(frame);
		}

		*slot = Some(frame);
		None
	}

	/// The number of fields present
	pub fn len(&self) -> usize {
		self.slots.iter().flatten().count()
	}

	/// Whether no known field was found
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterate over the present frames, in [`FieldKey::ALL`] order
	pub fn iter(&self) -> impl Iterator<Item = &Frame> {
		self.slots.iter().flatten()
	}
}

/// An ID3v2 tag, as read from the start of a file
///
/// The frame offsets refer to the stream the tag was read from. Writing consumes the tag,
/// since the offsets no longer hold for the rewritten stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Tag {
	pub(crate) header: Id3v2Header,
	pub(crate) frames: FrameTable,
}

impl Id3v2Tag {
	/// The tag header
	pub fn header(&self) -> &Id3v2Header {
		&self.header
	}

	/// All located frames
	pub fn frames(&self) -> &FrameTable {
		&self.frames
	}

	/// Get the frame for `key`
	pub fn get(&self, key: FieldKey) -> Option<&Frame> {
		self.frames.get(key)
	}

	/// Get the text of the frame for `key`
	///
	/// See [`Frame::text`].
	pub fn text(&self, key: FieldKey) -> Option<String> {
		self.get(key).and_then(Frame::text)
	}

	impl_text_accessor!(
		title => Title,
		track => Track,
		artist => Artist,
		album => Album,
		year => Year,
		comment => Comment,
		genre => Genre,
		time => Time,
	);

	/// Decode the attached picture, if the tag has an `APIC` frame
	///
	/// # Errors
	///
	/// The frame is present, but its payload isn't a valid picture
	pub fn picture(&self) -> Result<Option<Picture<'_>>> {
		match self.get(FieldKey::Image) {
			Some(frame) => Picture::parse(frame.content()).map(Some),
			None => Ok(None),
		}
	}

	/// Replace the value of `key`, copying `reader` into `writer`
	///
	/// `reader` must be the stream this tag was read from. Everything but the frame for `key`
	/// (and, depending on [`WriteOptions::update_tag_size`], the declared tag size) is copied
	/// verbatim.
	///
	/// # Errors
	///
	/// * `key` is not present in the tag
	/// * `value` can't be encoded as Latin-1
	/// * The new frame or tag size doesn't fit in 32 bits
	/// * `reader` ends early, or `writer` fails
	///
	/// # Examples
	///
	/// ```rust
	/// # fn main() -> mp3tag::error::Result<()> {
	/// use mp3tag::config::{ParseOptions, WriteOptions};
	/// use mp3tag::frame::FieldKey;
	/// use std::io::Cursor;
	///
	/// let mut file = Vec::new();
	/// file.extend(b"ID3\x03\x00\x00\x00\x00\x00\x0E");
	/// file.extend(b"TIT2\x00\x00\x00\x04\x00\x00\x00Hi\0");
	///
	/// let mut reader = Cursor::new(file);
	/// let tag = mp3tag::read_from(&mut reader, ParseOptions::new())?;
	///
	/// let mut writer = Cursor::new(Vec::new());
	/// tag.splice(&mut reader, &mut writer, FieldKey::Title, "Hello", WriteOptions::new())?;
	///
	/// let edited = mp3tag::read_from(&mut writer, ParseOptions::new())?;
	/// assert_eq!(edited.title().as_deref(), Some("Hello"));
	/// # Ok(()) }
	/// ```
	pub fn splice<R, W>(
		self,
		reader: &mut R,
		writer: &mut W,
		key: FieldKey,
		value: &str,
		write_options: WriteOptions,
	) -> Result<()>
	where
		R: Read + Seek,
		W: Write + Seek,
	{
		crate::write::splice_frame(reader, writer, &self, key, value, write_options)
	}
}
