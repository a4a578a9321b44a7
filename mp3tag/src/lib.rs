//! Read and edit the ID3v2 text fields of MP3 files.
//!
//! mp3tag understands nine fields: title, track, artist, album, year, comment, genre, time,
//! and an attached picture. Seven of them can be edited in place, by splicing a new frame
//! into the file while every other byte is kept as-is.
//!
//! # Format notes
//!
//! * Tag and frame sizes are plain big-endian integers, they are **not** synchsafe.
//! * Extended headers, footers, and unsynchronisation are not supported.
//! * Text is read and written as Latin-1, values with characters above U+00FF are rejected.
//!
//! # Examples
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! # fn main() -> mp3tag::error::Result<()> {
//! use mp3tag::config::ParseOptions;
//!
//! let tag = mp3tag::read_from_path("test.mp3", ParseOptions::new())?;
//!
//! if let Some(title) = tag.title() {
//! 	println!("Title: {title}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Editing a file
//!
//! ```rust,no_run
//! # fn main() -> mp3tag::error::Result<()> {
//! use mp3tag::config::{ParseOptions, WriteOptions};
//! use mp3tag::edit::EditRequest;
//!
//! // As it would come from the command line: `-t "New title"`
//! let edit = EditRequest::from_option('t', Some(String::from("New title")))?;
//! edit.apply_to_path("test.mp3", ParseOptions::new(), WriteOptions::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading tags with irregular frame layouts
//!
//! By default, frames are located by walking from one frame header to the next. Files written
//! by tools that did not keep the tag size up to date can be read with a heuristic scan instead,
//! see [`ScanStrategy`](config::ScanStrategy) and [`ParsingMode`](config::ParsingMode).
//!
//! ```rust,no_run
//! # fn main() -> mp3tag::error::Result<()> {
//! use mp3tag::config::{ParseOptions, ScanStrategy};
//!
//! let parse_options = ParseOptions::new().scan_strategy(ScanStrategy::Heuristic);
//! let tag = mp3tag::read_from_path("old.mp3", parse_options)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod edit;
pub mod error;
pub mod file;
pub mod frame;
pub mod header;
pub(crate) mod macros;
pub mod picture;
mod read;
mod scan;
pub mod tag;
mod util;
mod write;

pub use crate::file::{edit_path, read_from, read_from_path};

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use mp3tag::prelude::*;
	//! ```

	pub use crate::config::{ParseOptions, WriteOptions};
	pub use crate::edit::EditRequest;
	pub use crate::frame::FieldKey;
	pub use crate::tag::Id3v2Tag;
}
