use crate::config::WriteOptions;
use crate::error::Result;
use crate::frame::{FIXED_PREFIX_LEN, FieldKey};
use crate::header::SIZE_OFFSET;
use crate::macros::err;
use crate::tag::Id3v2Tag;
use crate::util::text::latin1_encode;

use std::io::{Read, Seek, SeekFrom, Write};

use byteorder::{BigEndian, WriteBytesExt};

/// Copy `reader` into `writer`, replacing the text of the `key` frame with `value` encoded as Latin-1
///
/// Both streams are rewound first, and `writer` is expected to be empty.
pub(crate) fn splice_frame<R, W>(
	reader: &mut R,
	writer: &mut W,
	tag: &Id3v2Tag,
	key: FieldKey,
	value: &str,
	write_options: WriteOptions,
) -> Result<()>
where
	R: Read + Seek,
	W: Write + Seek,
{
	if !key.is_editable() {
		err!(Argument(ReadOnlyField(key)));
	}

	// Text is always read as Latin-1, regardless of the encoding byte
	let value = latin1_encode(value)?;

	let Some(frame) = tag.get(key) else {
		err!(Format(FieldNotFound(key)));
	};

	let extra_prefix_len = u64::from(key.extra_prefix_len());
	let old_payload_len = frame.payload_len();
	if old_payload_len < extra_prefix_len {
		err!(Format(BadFrameLength));
	}

	let Ok(new_size) = u32::try_from(value.len() as u64 + 1 + extra_prefix_len) else {
		err!(TooMuchData);
	};

	log::debug!(
		"Replacing {key} frame at offset {}, size: {} -> {new_size}",
		frame.frame_offset(),
		frame.size()
	);

	reader.rewind()?;
	writer.rewind()?;

	// Everything up to the frame's size
	copy_exact(reader, writer, frame.size_field_offset())?;

	writer.write_u32::<BigEndian>(new_size)?;
	reader.seek(SeekFrom::Current(4))?;

	// Flags, encoding, and for comments the language and description
	copy_exact(reader, writer, FIXED_PREFIX_LEN + extra_prefix_len)?;

	writer.write_all(&value)?;

	// Skip the old text, and copy everything after it
	reader.seek(SeekFrom::Current((old_payload_len - extra_prefix_len) as i64))?;
	std::io::copy(reader, writer)?;

	// A frame past the declared end was never counted in the tag size
	if write_options.update_tag_size && frame.frame_offset() < tag.header().tag_end() {
		let new_tag_size =
			i64::from(tag.header().size()) + i64::from(new_size) - i64::from(frame.size());
		let Ok(new_tag_size) = u32::try_from(new_tag_size) else {
			err!(TooMuchData);
		};

		log::trace!("Updating tag size: {} -> {new_tag_size}", tag.header().size());

		writer.seek(SeekFrom::Start(SIZE_OFFSET))?;
		writer.write_u32::<BigEndian>(new_tag_size)?;
		writer.seek(SeekFrom::End(0))?;
	}

	writer.flush()?;
	Ok(())
}

fn copy_exact<R, W>(reader: &mut R, writer: &mut W, len: u64) -> Result<()>
where
	R: Read,
	W: Write,
{
	let copied = std::io::copy(&mut reader.by_ref().take(len), writer)?;
	if copied != len {
		return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
	}

	Ok(())
}
