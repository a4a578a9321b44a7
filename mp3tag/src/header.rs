//! The fixed-size ID3v2 tag header

use crate::error::Result;
use crate::macros::err;

use std::io::Read;

use byteorder::{BigEndian, ByteOrder};

/// The size of the tag header, frames start immediately after it
pub const HEADER_SIZE: u64 = 10;

/// Offset of the declared tag size within the header
pub(crate) const SIZE_OFFSET: u64 = 6;

const MAGIC: &[u8; 3] = b"ID3";

/// An ID3v2 tag header
///
/// ```text
/// offset  size  meaning
/// 0       3     "ID3"
/// 3       1     major version
/// 4       1     revision
/// 5       1     flags (unused)
/// 6       4     declared tag size
/// ```
///
/// NOTE: The declared size is a plain big-endian integer, it is **not** synchsafe.
/// This matches how the editor writes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Header {
	pub(crate) major_version: u8,
	pub(crate) revision: u8,
	pub(crate) flags: u8,
	/// The size of the tag contents (**DOES NOT INCLUDE THE HEADER**)
	pub(crate) size: u32,
}

impl Id3v2Header {
	/// Read a header from the current position of `reader`
	///
	/// # Errors
	///
	/// * `reader` has fewer than 10 bytes remaining
	/// * The data doesn't start with "ID3"
	pub fn parse<R>(reader: &mut R) -> Result<Self>
	where
		R: Read,
	{
		log::debug!("Parsing ID3v2 header");

		let mut header = [0; HEADER_SIZE as usize];
		reader.read_exact(&mut header)?;

		if &header[..3] != MAGIC {
			err!(Format(BadMagic));
		}

		let major_version = header[3];
		if !matches!(major_version, 3 | 4) {
			log::warn!(
				"Found an unexpected ID3v2 major version ({major_version}), reading frames as ID3v2.3"
			);
		}

		let size = BigEndian::read_u32(&header[SIZE_OFFSET as usize..]);
		log::debug!("Declared tag size: {size}");

		Ok(Self {
			major_version,
			revision: header[4],
			flags: header[5],
			size,
		})
	}

	/// The major version, the `3` in ID3v2.3
	pub fn major_version(&self) -> u8 {
		self.major_version
	}

	/// The revision number
	pub fn revision(&self) -> u8 {
		self.revision
	}

	/// The raw flags byte, it is never interpreted
	pub fn flags(&self) -> u8 {
		self.flags
	}

	/// The declared size of the tag contents, **excluding** the 10 byte header
	pub fn size(&self) -> u32 {
		self.size
	}

	/// The absolute offset where the tag region ends
	pub fn tag_end(&self) -> u64 {
		HEADER_SIZE + u64::from(self.size)
	}

	/// A human-readable version, such as "ID3 v2.3"
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::header::Id3v2Header;
	///
	/// # fn main() -> mp3tag::error::Result<()> {
	/// let bytes = [b'I', b'D', b'3', 3, 0, 0, 0, 0, 0, 0];
	/// let header = Id3v2Header::parse(&mut &bytes[..])?;
	///
	/// assert_eq!(header.version_string(), "ID3 v2.3");
	/// # Ok(()) }
	/// ```
	pub fn version_string(&self) -> String {
		format!("ID3 v2.{}", self.major_version)
	}
}
