//! Enum whitelists for categorical fields
//!
//! A whitelist is the ordered list of display strings a categorical field
//! may take (truck types, container sizes, ...). It is defined once per
//! domain concept and shared by reference. The table layer treats it as
//! metadata: values are rendered unchanged, and values outside the list
//! are only marked so the rendering surface can highlight them.

use std::fmt;

/// Ordered, immutable list of allowed display strings
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumWhitelist {
	name: &'static str,
	values: &'static [&'static str],
}

impl EnumWhitelist {
	/// Creates a whitelist; usable in `const` and `static` items
	pub const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
		Self { name, values }
	}

	/// Name of the domain concept (e.g. `truck_type`)
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Allowed values in declaration order
	pub fn values(&self) -> &'static [&'static str] {
		self.values
	}

	/// Whether `value` is one of the allowed values (exact, case-sensitive)
	pub fn contains(&self, value: &str) -> bool {
		self.values.contains(&value)
	}

	/// Position of `value` in the list
	pub fn position(&self, value: &str) -> Option<usize> {
		self.values.iter().position(|v| *v == value)
	}

	/// Number of allowed values
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether the list is empty
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over the allowed values
	pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.values.iter().copied()
	}
}

impl fmt::Debug for EnumWhitelist {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EnumWhitelist")
			.field("name", &self.name)
			.field("values", &self.values)
			.finish()
	}
}

/// Truck types used by vehicle master data and loading orders
pub const TRUCK_TYPES: EnumWhitelist = EnumWhitelist::new(
	"truck_type",
	&["Fuso", "Engkel", "Tronton", "Trailer", "CDD", "CDE", "Wingbox"],
);

/// Container sizes used by packing lists and job orders
pub const CONTAINER_SIZES: EnumWhitelist =
	EnumWhitelist::new("container_size", &["20'", "40'", "40' HC", "45'"]);

/// Cargo units used on delivery notes
pub const CARGO_UNITS: EnumWhitelist =
	EnumWhitelist::new("cargo_unit", &["Kg", "Ton", "M3", "Colly", "Pcs"]);

/// Lifecycle of operational documents
pub const DOCUMENT_STATUSES: EnumWhitelist =
	EnumWhitelist::new("document_status", &["Draft", "Confirmed", "Printed", "Cancelled"]);
