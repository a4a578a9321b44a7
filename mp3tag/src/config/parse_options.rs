/// Options to control how mp3tag parses a tag
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) scan_strategy: ScanStrategy,
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) sanitize: SanitizePolicy,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	scan_strategy: ScanStrategy::Structural,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	sanitize: SanitizePolicy::Preserve,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default scan strategy
	pub const DEFAULT_SCAN_STRATEGY: ScanStrategy = ScanStrategy::Structural;

	/// Default parsing mode
	pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::BestAttempt;

	/// Default sanitization policy
	pub const DEFAULT_SANITIZE_POLICY: SanitizePolicy = SanitizePolicy::Preserve;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			scan_strategy: Self::DEFAULT_SCAN_STRATEGY,
			parsing_mode: Self::DEFAULT_PARSING_MODE,
			sanitize: Self::DEFAULT_SANITIZE_POLICY,
		}
	}

	/// The strategy used to locate frames, see [`ScanStrategy`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::config::{ParseOptions, ScanStrategy};
	///
	/// // These files were written by a tool that never updated the tag size
	/// let parsing_options = ParseOptions::new().scan_strategy(ScanStrategy::Heuristic);
	/// ```
	pub fn scan_strategy(&mut self, scan_strategy: ScanStrategy) -> Self {
		self.scan_strategy = scan_strategy;
		*self
	}

	/// The parsing mode to use, see [`ParsingMode`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::config::{ParseOptions, ParsingMode};
	///
	/// // By default, `parsing_mode` is ParsingMode::BestAttempt. Here, we need absolute correctness.
	/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// The sanitization applied to text payloads, see [`SanitizePolicy`] for details
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::config::{ParseOptions, SanitizePolicy};
	///
	/// // I only want printable ASCII in my output
	/// let parsing_options = ParseOptions::new().sanitize(SanitizePolicy::MaskHighBit);
	/// ```
	pub fn sanitize(&mut self, sanitize: SanitizePolicy) -> Self {
		self.sanitize = sanitize;
		*self
	}
}

/// How frames are located within the tag region
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ScanStrategy {
	/// Walk frame headers, advancing by each frame's declared size
	///
	/// Only true frame boundaries are visited, so payload contents can never be mistaken for a key.
	#[default]
	Structural,
	/// Check every byte of the tag region for the start of a known key
	///
	/// This is how older versions located frames. It tolerates tags whose frames don't line up,
	/// at the cost of possibly matching a key inside of another frame's payload.
	Heuristic,
}

/// The parsing strictness mode
///
/// This can be set with [`ParseOptions::parsing_mode`].
///
/// # Examples
///
/// ```rust,no_run
/// use mp3tag::config::{ParseOptions, ParsingMode};
///
/// # fn main() -> mp3tag::error::Result<()> {
/// // We only want to read well-formed tags
/// let parsing_options = ParseOptions::new().parsing_mode(ParsingMode::Strict);
/// let tag = mp3tag::read_from_path("foo.mp3", parsing_options)?;
/// # Ok(()) }
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// This mode will eagerly error on any malformed frame: invalid frame IDs, empty frames,
	/// and frames that extend past the tag region or the end of the stream.
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// Malformed frames are logged and skipped. During a structural walk, the first malformed
	/// frame header ends the walk, as there is no reliable way to find the next one.
	#[default]
	BestAttempt,
	/// Least eager to error, may produce invalid/partial output
	///
	/// Same as [`ParsingMode::BestAttempt`], except a structural walk that hits a malformed frame
	/// header continues with a heuristic scan over the rest of the tag region.
	Relaxed,
}

/// The sanitization applied to text payloads as they are read
///
/// Attached pictures are never sanitized.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum SanitizePolicy {
	/// Keep the payload exactly as it is stored
	#[default]
	Preserve,
	/// Remove all NUL bytes from the payload
	StripNul,
	/// Replace every byte above 127 with 127
	MaskHighBit,
}

impl SanitizePolicy {
	pub(crate) fn apply(self, payload: &mut Vec<u8>) {
		match self {
			Self::Preserve => {},
			Self::StripNul => payload.retain(|b| *b != 0),
			Self::MaskHighBit => {
				for b in payload.iter_mut().filter(|b| **b > 127) {
					*b = 127;
				}
			},
		}
	}
}
