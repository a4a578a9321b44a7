macro_rules! try_vec {
	($elem:expr; $size:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size)? }};
}

// Shorthand for return Err(Mp3TagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)                -> return Err(Mp3TagError::new(ErrorKind::Variant))
// - err!(Format(FormatVariant))  -> return Err(FormatError::FormatVariant.into())
// - err!(Argument(ArgVariant))   -> return Err(ArgumentError::ArgVariant.into())
macro_rules! err {
	(Format($($variant:tt)+)) => {
		return Err(crate::error::Mp3TagError::from(
			crate::error::FormatError::$($variant)+,
		))
	};
	(Argument($($variant:tt)+)) => {
		return Err(crate::error::Mp3TagError::from(
			crate::error::ArgumentError::$($variant)+,
		))
	};
	($variant:ident) => {
		return Err(crate::error::Mp3TagError::new(
			crate::error::ErrorKind::$variant,
		))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, if `STRICT` or `RELAXED` are missing, it will
// 		 fall through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {err, parse_mode_choice, try_vec};
