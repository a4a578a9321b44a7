//! Attached pictures
//!
//! Picture data is never interpreted, only the text that describes it is decoded.

use crate::error::Result;
use crate::macros::err;
use crate::util::text::{latin1_decode_terminated, split_terminated};

/// The picture type, according to ID3v2 APIC
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PictureType {
	Other,
	Icon,
	OtherIcon,
	CoverFront,
	CoverBack,
	Leaflet,
	Media,
	LeadArtist,
	Artist,
	Conductor,
	Band,
	Composer,
	Lyricist,
	RecordingLocation,
	DuringRecording,
	DuringPerformance,
	ScreenCapture,
	BrightFish,
	Illustration,
	BandLogo,
	PublisherLogo,
	Undefined(u8),
}

impl PictureType {
	/// Get a `u8` from a `PictureType` according to ID3v2 APIC
	pub fn as_u8(&self) -> u8 {
		match self {
			Self::Other => 0,
			Self::Icon => 1,
			Self::OtherIcon => 2,
			Self::CoverFront => 3,
			Self::CoverBack => 4,
			Self::Leaflet => 5,
			Self::Media => 6,
			Self::LeadArtist => 7,
			Self::Artist => 8,
			Self::Conductor => 9,
			Self::Band => 10,
			Self::Composer => 11,
			Self::Lyricist => 12,
			Self::RecordingLocation => 13,
			Self::DuringRecording => 14,
			Self::DuringPerformance => 15,
			Self::ScreenCapture => 16,
			Self::BrightFish => 17,
			Self::Illustration => 18,
			Self::BandLogo => 19,
			Self::PublisherLogo => 20,
			Self::Undefined(i) => *i,
		}
	}

	/// Get a `PictureType` from a u8 according to ID3v2 APIC
	pub fn from_u8(byte: u8) -> Self {
		match byte {
			0 => Self::Other,
			1 => Self::Icon,
			2 => Self::OtherIcon,
			3 => Self::CoverFront,
			4 => Self::CoverBack,
			5 => Self::Leaflet,
			6 => Self::Media,
			7 => Self::LeadArtist,
			8 => Self::Artist,
			9 => Self::Conductor,
			10 => Self::Band,
			11 => Self::Composer,
			12 => Self::Lyricist,
			13 => Self::RecordingLocation,
			14 => Self::DuringRecording,
			15 => Self::DuringPerformance,
			16 => Self::ScreenCapture,
			17 => Self::BrightFish,
			18 => Self::Illustration,
			19 => Self::BandLogo,
			20 => Self::PublisherLogo,
			i => Self::Undefined(i),
		}
	}
}

/// A picture borrowed from an `APIC` frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture<'a> {
	pub(crate) mime_type: String,
	pub(crate) pic_type: PictureType,
	pub(crate) description: String,
	pub(crate) data: &'a [u8],
}

impl<'a> Picture<'a> {
	/// Split an `APIC` payload into its parts
	///
	/// NOTE: This expects the payload *after* the text encoding byte
	///
	/// ```text
	/// <mime type> 00 <picture type> <description> 00 <data>
	/// ```
	///
	/// # Errors
	///
	/// * The MIME type or description is missing its terminator
	/// * There is no picture type
	pub fn parse(content: &'a [u8]) -> Result<Self> {
		let Some(mime_end) = content.iter().position(|b| *b == 0) else {
			err!(Format(NotAPicture));
		};

		let Some((&pic_type, rest)) = content[mime_end + 1..].split_first() else {
			err!(Format(NotAPicture));
		};

		if !rest.contains(&0) {
			err!(Format(NotAPicture));
		}

		let (description, data) = split_terminated(rest);

		Ok(Self {
			mime_type: latin1_decode_terminated(&content[..mime_end]),
			pic_type: PictureType::from_u8(pic_type),
			description: latin1_decode_terminated(description),
			data,
		})
	}

	/// The MIME type, such as "image/jpeg"
	pub fn mime_type(&self) -> &str {
		&self.mime_type
	}

	/// The picture type
	pub fn pic_type(&self) -> PictureType {
		self.pic_type
	}

	/// The description, may be empty
	pub fn description(&self) -> &str {
		&self.description
	}

	/// The raw picture data
	pub fn data(&self) -> &'a [u8] {
		self.data
	}
}
