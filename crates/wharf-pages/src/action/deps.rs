//! Argument tuples of an action
//!
//! An action re-runs its producer only when the argument tuple changes by
//! value, and never while one of the arguments is absent. Both checks are
//! expressed here: value equality through `PartialEq`, absence through
//! [`Presence`].

use serde_json::Value;

/// A single argument that may be absent
pub trait Presence {
	/// Returns false for an absent value (`None`, JSON `null`)
	fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
	fn is_present(&self) -> bool {
		self.is_some()
	}
}

impl Presence for Value {
	fn is_present(&self) -> bool {
		!self.is_null()
	}
}

impl<T: Presence + ?Sized> Presence for &T {
	fn is_present(&self) -> bool {
		(**self).is_present()
	}
}

macro_rules! always_present {
	($($ty:ty),* $(,)?) => {
		$(
			impl Presence for $ty {
				fn is_present(&self) -> bool {
					true
				}
			}
		)*
	};
}

always_present!(
	String, str, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
	f64,
);

impl<T> Presence for Vec<T> {
	fn is_present(&self) -> bool {
		true
	}
}

/// The argument tuple of an action
///
/// Implemented for `()` and for tuples of up to six [`Presence`] elements.
///
/// ```
/// use wharf_pages::Dependencies;
///
/// assert!(().is_complete());
/// assert!((Some(7), "C001".to_string()).is_complete());
/// assert!(!(None::<u32>, "C001".to_string()).is_complete());
/// ```
pub trait Dependencies: Clone + PartialEq + 'static {
	/// Whether every argument is present
	fn is_complete(&self) -> bool;
}

impl Dependencies for () {
	fn is_complete(&self) -> bool {
		true
	}
}

macro_rules! tuple_dependencies {
	($($name:ident),+) => {
		impl<$($name),+> Dependencies for ($($name,)+)
		where
			$($name: Presence + Clone + PartialEq + 'static),+
		{
			#[allow(non_snake_case)]
			fn is_complete(&self) -> bool {
				let ($($name,)+) = self;
				true $(&& $name.is_present())+
			}
		}
	};
}

tuple_dependencies!(A);
tuple_dependencies!(A, B);
tuple_dependencies!(A, B, C);
tuple_dependencies!(A, B, C, D);
tuple_dependencies!(A, B, C, D, E);
tuple_dependencies!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case((Some(1), Some("JO-1")), true)]
	#[case((None, Some("JO-1")), false)]
	#[case((Some(1), None), false)]
	fn test_option_pairs(#[case] args: (Option<i32>, Option<&'static str>), #[case] expected: bool) {
		assert_eq!(args.is_complete(), expected);
	}

	#[rstest]
	fn test_json_null_is_absent() {
		assert!(!(json!(null),).is_complete());
		assert!((json!({ "code": "C001" }),).is_complete());
		assert!((json!(""),).is_complete());
	}

	#[rstest]
	fn test_plain_values_are_present() {
		assert!(("C001".to_string(), 3_u32, true, vec![1, 2]).is_complete());
	}

	#[rstest]
	fn test_value_equality_of_fresh_tuples() {
		let first = ("C001".to_string(), Some(vec![1, 2]));
		let second = (String::from("C001"), Some(vec![1, 2]));
		assert!(first == second);
	}
}
