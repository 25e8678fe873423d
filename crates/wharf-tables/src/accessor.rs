//! Field accessors
//!
//! Records handed to the table layer are DTOs of arbitrary shape, most of
//! them nested JSON where relations are optional (a delivery note's job
//! order may have no inquiry yet). Resolution therefore treats every
//! missing or non-container segment as "no value" instead of failing.
//!
//! Paths are dot-delimited and case-sensitive. There is no escaping: an
//! object key containing a literal `.` cannot be addressed by a path. Use
//! [`Accessor::lens`] for such fields, or for typed DTOs in general.

use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;

/// A parsed, dot-delimited path into a nested record
///
/// Segments are looked up as object keys; on arrays a segment that parses
/// as an index selects the element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
	raw: String,
	segments: Vec<String>,
}

impl FieldPath {
	/// Parses a dotted path. The empty path addresses the record itself.
	pub fn parse(path: impl Into<String>) -> Self {
		let raw = path.into();
		let segments = if raw.is_empty() {
			Vec::new()
		} else {
			raw.split('.').map(str::to_string).collect()
		};
		Self { raw, segments }
	}

	/// The path as written
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// The individual segments
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Walks the path through `record`
	///
	/// Returns `None` as soon as a segment is missing or the current value
	/// is not a container.
	pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
		self.segments
			.iter()
			.try_fold(record, |current, segment| step(current, segment))
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.raw)
	}
}

impl From<&str> for FieldPath {
	fn from(path: &str) -> Self {
		Self::parse(path)
	}
}

impl From<String> for FieldPath {
	fn from(path: String) -> Self {
		Self::parse(path)
	}
}

fn step<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
	match current {
		Value::Object(map) => map.get(segment),
		Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
		_ => None,
	}
}

/// Resolves a dotted path into a JSON record
///
/// ```
/// use serde_json::json;
/// use wharf_tables::resolve;
///
/// let record = json!({ "jobOrder": null });
/// assert_eq!(resolve(&record, "jobOrder.inquiryDetail.eta"), None);
///
/// let record = json!({ "port": { "name": "Tanjung Priok" } });
/// assert_eq!(resolve(&record, "port.name"), Some(&json!("Tanjung Priok")));
/// ```
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
	if path.is_empty() {
		return Some(record);
	}
	path.split('.')
		.try_fold(record, |current, segment| step(current, segment))
}

/// Records whose fields can be addressed by dotted paths
pub trait Record {
	/// Returns the value at `path`, or `None` when any segment is missing
	fn field(&self, path: &FieldPath) -> Option<Value>;
}

impl Record for Value {
	fn field(&self, path: &FieldPath) -> Option<Value> {
		path.resolve(self).cloned()
	}
}

impl Record for Map<String, Value> {
	fn field(&self, path: &FieldPath) -> Option<Value> {
		let Some((first, rest)) = path.segments().split_first() else {
			return Some(Value::Object(self.clone()));
		};
		rest.iter()
			.try_fold(self.get(first)?, |current, segment| step(current, segment))
			.cloned()
	}
}

/// Extracts one field from a row of type `R`
///
/// Either walks a [`FieldPath`] through a [`Record`] or applies a typed
/// lens supplied at the call site.
pub struct Accessor<R> {
	key: String,
	get: Rc<dyn Fn(&R) -> Option<Value>>,
}

impl<R: Record + 'static> Accessor<R> {
	/// Accessor walking a dotted path; the path doubles as the column key
	pub fn path(path: impl Into<FieldPath>) -> Self {
		let path = path.into();
		Self {
			key: path.as_str().to_string(),
			get: Rc::new(move |row: &R| row.field(&path)),
		}
	}
}

impl<R> Accessor<R> {
	/// Accessor backed by a typed lens
	///
	/// ```
	/// use wharf_tables::Accessor;
	///
	/// struct Vessel {
	///     name: String,
	///     gross_tonnage: Option<u32>,
	/// }
	///
	/// let tonnage = Accessor::lens("grossTonnage", |v: &Vessel| v.gross_tonnage);
	/// let vessel = Vessel { name: "KM Bahari".into(), gross_tonnage: None };
	/// assert_eq!(tonnage.get(&vessel), None);
	/// ```
	pub fn lens<V, F>(key: impl Into<String>, f: F) -> Self
	where
		V: Into<Value>,
		F: Fn(&R) -> Option<V> + 'static,
	{
		Self {
			key: key.into(),
			get: Rc::new(move |row: &R| f(row).map(Into::into)),
		}
	}

	/// The column key this accessor reads
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Reads the field from `row`
	pub fn get(&self, row: &R) -> Option<Value> {
		(self.get)(row)
	}
}

impl<R> Clone for Accessor<R> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			get: Rc::clone(&self.get),
		}
	}
}

impl<R> fmt::Debug for Accessor<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Accessor")
			.field("key", &self.key)
			.finish_non_exhaustive()
	}
}

impl<R: Record + 'static> From<&str> for Accessor<R> {
	fn from(path: &str) -> Self {
		Self::path(path)
	}
}

impl<R: Record + 'static> From<String> for Accessor<R> {
	fn from(path: String) -> Self {
		Self::path(path)
	}
}

impl<R: Record + 'static> From<FieldPath> for Accessor<R> {
	fn from(path: FieldPath) -> Self {
		Self::path(path)
	}
}
