use crate::error::Result;
use crate::macros::err;

use crate::config::global_options;

/// **DO NOT USE DIRECTLY**
///
/// Creates a `Vec` of the specified length, containing copies of `element`.
///
/// This should be used through [`try_vec!`](crate::macros::try_vec)
pub(crate) fn fallible_vec_from_element<T>(element: T, expected_size: usize) -> Result<Vec<T>>
where
	T: Clone,
{
	if expected_size == 0 {
		return Ok(Vec::new());
	}

	if expected_size > unsafe { global_options().allocation_limit } {
		err!(TooMuchData);
	}

	let mut v = Vec::new();
	v.try_reserve_exact(expected_size)?;
	v.resize(expected_size, element);

	Ok(v)
}

#[cfg(test)]
mod tests {
	use crate::config::{GlobalOptions, apply_global_options};
	use crate::error::ErrorKind;
	use crate::util::alloc::fallible_vec_from_element;

	#[test_log::test]
	fn vec_fallible_repeat() {
		let u8_vec_len_20 = fallible_vec_from_element(0u8, 20).unwrap();
		assert_eq!(u8_vec_len_20.len(), 20);
		assert!(u8_vec_len_20.iter().all(|e| *e == 0));

		let u8_large_vec = fallible_vec_from_element(0u8, u32::MAX as usize);
		assert!(u8_large_vec.is_err());
	}

	#[test_log::test]
	fn respects_allocation_limit() {
		apply_global_options(GlobalOptions::new().allocation_limit(16));

		let err = fallible_vec_from_element(0u8, 17).unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::TooMuchData));
		assert_eq!(fallible_vec_from_element(0u8, 16).unwrap().len(), 16);

		apply_global_options(GlobalOptions::default());
	}
}
