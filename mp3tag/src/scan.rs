use crate::config::{ParseOptions, ParsingMode, ScanStrategy};
use crate::error::{FormatError, Result};
use crate::frame::read::read_frame;
use crate::frame::{FRAME_HEADER_SIZE, FieldKey, Frame};
use crate::header::{HEADER_SIZE, Id3v2Header};
use crate::macros::{parse_mode_choice, try_vec};

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ByteOrder};

/// Locate every known frame in the tag region, in the order they appear
///
/// Duplicates are kept, it is up to the caller to decide which one wins.
pub(crate) fn scan_frames<R>(
	reader: &mut R,
	header: Id3v2Header,
	stream_len: u64,
	parse_options: ParseOptions,
) -> Result<Vec<Frame>>
where
	R: Read + Seek,
{
	let tag_end = header.tag_end();
	if tag_end > stream_len {
		log::warn!(
			"Tag declares {} bytes, but the stream ends at {stream_len}",
			header.size()
		);
	}

	let scanner = FrameScanner {
		tag_end: tag_end.min(stream_len),
		stream_len,
		parse_options,
	};

	let mut frames = Vec::new();
	match parse_options.scan_strategy {
		ScanStrategy::Structural => {
			if let Some(resume_at) = scanner.walk(reader, &mut frames)? {
				log::warn!("Falling back to a heuristic scan at offset {resume_at}");
				scanner.heuristic(reader, resume_at, &mut frames)?;
			}
		},
		ScanStrategy::Heuristic => scanner.heuristic(reader, HEADER_SIZE, &mut frames)?,
	}

	log::debug!("Found {} known frames", frames.len());
	Ok(frames)
}

struct FrameScanner {
	tag_end: u64,
	stream_len: u64,
	parse_options: ParseOptions,
}

impl FrameScanner {
	/// Walk the frame headers, jumping from one frame boundary to the next
	///
	/// Returns the offset to resume a heuristic scan at, if the walk was cut short
	/// and the parsing mode allows falling back.
	fn walk<R>(&self, reader: &mut R, frames: &mut Vec<Frame>) -> Result<Option<u64>>
	where
		R: Read + Seek,
	{
		let parsing_mode = self.parse_options.parsing_mode;

		let mut pos = HEADER_SIZE;
		while pos + FRAME_HEADER_SIZE <= self.tag_end {
			reader.seek(SeekFrom::Start(pos))?;

			let mut frame_header = [0; FRAME_HEADER_SIZE as usize];
			reader.read_exact(&mut frame_header)?;

			// Assume we just started reading padding
			if frame_header[0] == 0 {
				log::trace!("Reached padding at offset {pos}");
				break;
			}

			let id = [
				frame_header[0],
				frame_header[1],
				frame_header[2],
				frame_header[3],
			];
			if !id
				.iter()
				.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
			{
				return self.interrupted(pos, FormatError::BadFrameId(id));
			}

			let size = BigEndian::read_u32(&frame_header[4..8]);
			let next = pos + FRAME_HEADER_SIZE + u64::from(size);

			// The stream ends inside a known frame, there's nothing after it to find
			if next > self.stream_len
				&& parsing_mode != ParsingMode::Strict
				&& FieldKey::from_id(&id).is_some()
			{
				if let Some(frame) = read_frame(reader, pos, self.stream_len, self.parse_options)? {
					frames.push(frame);
				}

				break;
			}

			if next > self.tag_end {
				return self.interrupted(pos, FormatError::FrameOutOfBounds);
			}

			if size == 0 {
				parse_mode_choice!(
					parsing_mode,
					STRICT: return Err(FormatError::BadFrameLength.into()),
					DEFAULT: log::debug!("Encountered a zero length frame at offset {pos}, skipping")
				);
			} else if FieldKey::from_id(&id).is_some() {
				if let Some(frame) = read_frame(reader, pos, self.stream_len, self.parse_options)? {
					frames.push(frame);
				}
			} else {
				log::trace!(
					"Skipping unknown frame {:?} at offset {pos}",
					String::from_utf8_lossy(&id)
				);
			}

			pos = next;
		}

		Ok(None)
	}

	fn interrupted(&self, pos: u64, err: FormatError) -> Result<Option<u64>> {
		let parsing_mode = self.parse_options.parsing_mode;
		parse_mode_choice!(
			parsing_mode,
			STRICT: Err(err.into()),
			RELAXED: {
				log::warn!("Malformed frame at offset {pos}: {err}");
				Ok(Some(pos))
			},
			DEFAULT: {
				log::warn!("Malformed frame at offset {pos}, ignoring the rest of the tag: {err}");
				Ok(None)
			}
		)
	}

	/// Check every byte from `start` until the end of the tag for the start of a known ID
	///
	/// A recognized frame is skipped in its entirety. An unrecognized candidate skips its
	/// 4 ID bytes.
	fn heuristic<R>(&self, reader: &mut R, start: u64, frames: &mut Vec<Frame>) -> Result<()>
	where
		R: Read + Seek,
	{
		if start >= self.tag_end {
			return Ok(());
		}

		reader.seek(SeekFrom::Start(start))?;

		let mut region = try_vec![0; (self.tag_end - start) as usize];
		reader.read_exact(&mut region)?;

		let mut pos = start;
		while pos < self.tag_end {
			let byte = region[(pos - start) as usize];
			if !FieldKey::starts_id(byte) {
				pos += 1;
				continue;
			}

			match read_frame(reader, pos, self.stream_len, self.parse_options)? {
				Some(frame) => {
					pos = frame.end();
					frames.push(frame);
				},
				None => pos += 4,
			}
		}

		Ok(())
	}
}
