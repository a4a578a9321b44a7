use crate::config::ParseOptions;
use crate::error::Result;
use crate::header::Id3v2Header;
use crate::scan::scan_frames;
use crate::tag::{FrameTable, Id3v2Tag};
use crate::util::io::SeekStreamLen;

use std::io::{Read, Seek};

/// Read the tag at the very start of `reader`
///
/// The reader is rewound first, frame offsets are always relative to the start of the stream.
pub(crate) fn parse_id3v2<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Id3v2Tag>
where
	R: Read + Seek,
{
	let stream_len = reader.stream_len_hack()?;
	reader.rewind()?;

	let header = Id3v2Header::parse(reader)?;

	log::debug!(
		"Parsing ID3v2 tag, size: {}, version: {}, strategy: {:?}",
		header.size(),
		header.version_string(),
		parse_options.scan_strategy
	);

	let mut frames = FrameTable::default();
	for frame in scan_frames(reader, header, stream_len, parse_options)? {
		if let Some(duplicate) = frames.insert(frame) {
			log::warn!(
				"Ignoring duplicate {} frame at offset {}, keeping the first one",
				duplicate.key(),
				duplicate.frame_offset()
			);
		}
	}

	Ok(Id3v2Tag { header, frames })
}
