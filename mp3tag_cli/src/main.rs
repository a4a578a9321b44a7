#![allow(missing_docs)]

use mp3tag::config::{ParseOptions, WriteOptions};
use mp3tag::edit::EditRequest;
use mp3tag::error::Mp3TagError;
use mp3tag::tag::Id3v2Tag;

use structopt::StructOpt;
use structopt::clap::AppSettings;

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const RULE: &str = "=================================================================";

#[derive(Debug, StructOpt)]
#[structopt(
	name = "mp3tag",
	about = "View and edit the ID3v2 tag of an MP3 file",
	global_settings = &[AppSettings::DisableVersion]
)]
struct Opt {
	/// Modifies a Title tag
	#[structopt(short = "t", value_name = "value")]
	title: Option<String>,

	/// Modifies a Track tag
	#[structopt(short = "T", value_name = "value")]
	track: Option<String>,

	/// Modifies an Artist tag
	#[structopt(short = "a", value_name = "value")]
	artist: Option<String>,

	/// Modifies an Album tag
	#[structopt(short = "A", value_name = "value")]
	album: Option<String>,

	/// Modifies a Year tag
	#[structopt(short = "y", value_name = "value")]
	year: Option<String>,

	/// Modifies a Comment tag
	#[structopt(short = "c", value_name = "value")]
	comment: Option<String>,

	/// Modifies a Genre tag
	#[structopt(short = "g", value_name = "value")]
	genre: Option<String>,

	/// Prints version info
	#[structopt(short = "v")]
	version: bool,

	#[structopt(parse(from_os_str))]
	path: Option<PathBuf>,
}

impl Opt {
	/// The requested edits, as option letter and value
	fn edits(&self) -> Vec<(char, &str)> {
		[
			('t', &self.title),
			('T', &self.track),
			('a', &self.artist),
			('A', &self.album),
			('y', &self.year),
			('c', &self.comment),
			('g', &self.genre),
		]
		.into_iter()
		.filter_map(|(option, value)| value.as_deref().map(|value| (option, value)))
		.collect()
	}
}

#[derive(Debug)]
enum CliError {
	NoPath,
	TooManyEdits(usize),
	Tag(Mp3TagError),
}

impl Display for CliError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NoPath => write!(f, "Please input an MP3 file"),
			Self::TooManyEdits(count) => write!(
				f,
				"Only one field can be edited at a time, {count} were given"
			),
			Self::Tag(err) => write!(f, "{err}"),
		}
	}
}

impl From<Mp3TagError> for CliError {
	fn from(err: Mp3TagError) -> Self {
		Self::Tag(err)
	}
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	if opt.version {
		println!("mp3tag {}", env!("CARGO_PKG_VERSION"));
		return;
	}

	if let Err(err) = run(&opt) {
		eprintln!("ERROR: {err}\n");

		if Opt::clap().write_help(&mut std::io::stderr()).is_ok() {
			eprintln!();
		}

		std::process::exit(1);
	}
}

fn run(opt: &Opt) -> Result<(), CliError> {
	let Some(path) = &opt.path else {
		return Err(CliError::NoPath);
	};

	match opt.edits().as_slice() {
		[] => {
			let tag = mp3tag::read_from_path(path, ParseOptions::new())?;
			print_report(path, &tag);
		},
		[(option, value)] => {
			let edit = EditRequest::from_option(*option, Some((*value).to_owned()))?;
			log::debug!("Setting {} to {:?}", edit.key(), edit.value());

			edit.apply_to_path(path, ParseOptions::new(), WriteOptions::new())?;
			println!("INFO: Tag successfully updated!");
		},
		edits => return Err(CliError::TooManyEdits(edits.len())),
	}

	Ok(())
}

fn print_report(path: &Path, tag: &Id3v2Tag) {
	for line in report(path, tag) {
		println!("{line}");
	}
}

fn report(path: &Path, tag: &Id3v2Tag) -> Vec<String> {
	let field = |value: Option<String>| value.unwrap_or_else(|| String::from("None"));

	// A broken picture shouldn't hide the rest of the tag
	let image = match tag.picture() {
		Ok(Some(picture)) => format!("{} {}", picture.mime_type(), picture.description()),
		Ok(None) => String::from("None"),
		Err(err) => {
			log::warn!("Unable to read the attached picture: {err}");
			String::from("None")
		},
	};

	vec![
		String::from(RULE),
		format!("File\t: {}", path.display()),
		format!("Version\t: {}", tag.header().version_string()),
		String::from(RULE),
		format!("Title\t: {}", field(tag.title())),
		format!("Track\t: {}", field(tag.track())),
		format!("Artist\t: {}", field(tag.artist())),
		format!("Album\t: {}", field(tag.album())),
		format!("Year\t: {}", field(tag.year())),
		format!("Genre\t: {}", field(tag.genre())),
		format!("Comment\t: {}", field(tag.comment())),
		format!("Time\t: {}", field(tag.time())),
		format!("Image\t: {image}"),
		String::from(RULE),
	]
}
