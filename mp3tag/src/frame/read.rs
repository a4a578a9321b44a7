use super::{FIXED_PREFIX_LEN, FieldKey, Frame};
use crate::config::{ParseOptions, ParsingMode};
use crate::error::{FormatError, Result};
use crate::macros::{parse_mode_choice, try_vec};

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

/// Decode the frame whose ID starts at `offset`
///
/// Returns `Ok(None)` when the ID isn't one of the known fields. This isn't an error,
/// the caller is expected to keep looking.
///
/// Malformed frames of a known field are handled according to the [`ParsingMode`].
pub(crate) fn read_frame<R>(
	reader: &mut R,
	offset: u64,
	stream_len: u64,
	parse_options: ParseOptions,
) -> Result<Option<Frame>>
where
	R: Read + Seek,
{
	if offset + 4 > stream_len {
		return Ok(None);
	}

	reader.seek(SeekFrom::Start(offset))?;

	let mut id = [0; 4];
	reader.read_exact(&mut id)?;

	let Some(key) = FieldKey::from_id(&id) else {
		log::trace!("No field for ID {:?} at offset {offset}", String::from_utf8_lossy(&id));
		return Ok(None);
	};

	let parsing_mode = parse_options.parsing_mode;

	// ID + size + flags + encoding
	let payload_offset = offset + 8 + FIXED_PREFIX_LEN;
	if payload_offset > stream_len {
		return malformed(key, offset, FormatError::FrameOutOfBounds, parsing_mode);
	}

	let size = reader.read_u32::<BigEndian>()?;
	reader.seek(SeekFrom::Current(FIXED_PREFIX_LEN as i64))?;

	// The size covers the encoding byte, so there must be at least 1
	if size == 0 {
		return malformed(key, offset, FormatError::BadFrameLength, parsing_mode);
	}

	let declared_len = u64::from(size) - 1;
	let available = stream_len - payload_offset;
	if declared_len > available {
		if parsing_mode == ParsingMode::Strict {
			return Err(FormatError::FrameOutOfBounds.into());
		}

		log::warn!(
			"{key} frame at offset {offset} is cut off by the end of the stream, keeping {available} of {declared_len} bytes"
		);
	}

	let payload_len = declared_len.min(available);

	log::trace!("Reading {key} frame at offset {offset}, size: {size}");

	let mut content = try_vec![0; payload_len as usize];
	reader.read_exact(&mut content)?;

	if key != FieldKey::Image {
		parse_options.sanitize.apply(&mut content);
	}

	Ok(Some(Frame {
		key,
		size,
		payload_offset,
		payload_len,
		content,
	}))
}

fn malformed(
	key: FieldKey,
	offset: u64,
	err: FormatError,
	parsing_mode: ParsingMode,
) -> Result<Option<Frame>> {
	parse_mode_choice!(
		parsing_mode,
		STRICT: Err(err.into()),
		DEFAULT: {
			log::warn!("Skipping malformed {key} frame at offset {offset}: {err}");
			Ok(None)
		}
	)
}
