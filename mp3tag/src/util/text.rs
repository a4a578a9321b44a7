use crate::error::Result;
use crate::macros::err;

/// Encode `text` as Latin-1
///
/// Every character must be at most U+00FF.
pub(crate) fn latin1_encode(text: &str) -> Result<Vec<u8>> {
	let mut encoded = Vec::with_capacity(text.len());
	for c in text.chars() {
		let Ok(byte) = u8::try_from(c) else {
			err!(Argument(NotLatin1(c)));
		};

		encoded.push(byte);
	}

	Ok(encoded)
}

/// Decode a Latin-1 string, stopping at the first NUL
pub(crate) fn latin1_decode_terminated(bytes: &[u8]) -> String {
	let (text, _) = split_terminated(bytes);
	text.iter().map(|c| char::from(*c)).collect()
}

/// Split `bytes` at the first NUL, the NUL itself belongs to neither half
///
/// If there is no NUL, the entire input is the first half.
pub(crate) fn split_terminated(bytes: &[u8]) -> (&[u8], &[u8]) {
	match bytes.iter().position(|b| *b == 0) {
		Some(null_pos) => (&bytes[..null_pos], &bytes[null_pos + 1..]),
		None => (bytes, &bytes[bytes.len()..]),
	}
}

#[cfg(test)]
mod tests {
	use super::{latin1_decode_terminated, latin1_encode, split_terminated};
	use crate::error::{ArgumentError, ErrorKind};

	#[test_log::test]
	fn latin1_stops_at_nul() {
		assert_eq!(latin1_decode_terminated(b"Hi\0junk"), "Hi");
		assert_eq!(latin1_decode_terminated(b"Caf\xE9"), "Café");
		assert_eq!(latin1_decode_terminated(b"\0"), "");
	}

	#[test_log::test]
	fn split_without_nul() {
		let (head, tail) = split_terminated(b"image/png");
		assert_eq!(head, b"image/png");
		assert!(tail.is_empty());

		let (head, tail) = split_terminated(b"eng\0text");
		assert_eq!(head, b"eng");
		assert_eq!(tail, b"text");
	}

	#[test_log::test]
	fn latin1_encode_range() {
		assert_eq!(latin1_encode("Caf\u{e9}").unwrap(), b"Caf\xE9");
		assert_eq!(latin1_encode("\u{ff}").unwrap(), b"\xFF");

		let err = latin1_encode("Caf\u{e9} \u{2615}").unwrap_err();
		assert!(matches!(
			err.kind(),
			ErrorKind::Argument(ArgumentError::NotLatin1('\u{2615}'))
		));
	}
}
