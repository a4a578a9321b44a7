/// Options to control how mp3tag writes to a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) update_tag_size: bool,
}

impl WriteOptions {
	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			update_tag_size: true,
		}
	}

	/// Whether to rewrite the tag header's declared size after an edit
	///
	/// When a field's new value has a different length than the old one, the tag grows or shrinks
	/// by the same amount. Disabling this leaves the declared size untouched, which matches files
	/// written by older versions, but leaves the header out of sync with the frames.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp3tag::config::WriteOptions;
	///
	/// // Another tool depends on the header staying byte-for-byte identical
	/// let write_options = WriteOptions::new().update_tag_size(false);
	/// ```
	pub fn update_tag_size(mut self, update_tag_size: bool) -> Self {
		self.update_tag_size = update_tag_size;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	/// 	update_tag_size: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
