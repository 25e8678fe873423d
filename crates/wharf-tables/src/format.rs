//! Value formatters
//!
//! Every formatter treats `None`, JSON `null` and the empty string as the
//! same "no value" case and renders it as an empty string. Values outside
//! a formatter's domain (a non-numeric money field, an unparseable date)
//! fall back to their raw string form. Formatting never fails.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use std::fmt::{Display, Write};
use wharf_conf::DisplaySettings;
use wharf_conf::validation::MAX_FRACTION_DIGITS;

use crate::whitelist::EnumWhitelist;

/// Semantic kind of a field, selecting its formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// Rendered as is
	Text,
	/// Categorical value documented by a whitelist; rendered as is
	Enum(EnumWhitelist),
	/// Date part of a date-like value
	Date,
	/// Time part of a timestamp or time-of-day value
	Time,
	/// Date and time of a timestamp
	DateTime,
	/// Currency amount
	Money,
	/// Yes / no token
	Boolean,
}

/// Returns true for the "no value" case: missing, `null` or blank string
pub fn is_blank(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => true,
		Some(Value::String(s)) => s.trim().is_empty(),
		Some(_) => false,
	}
}

/// Parses user input of a masked money field
///
/// Every non-digit character is stripped; what remains is read as an
/// integer amount. Returns `None` when no digit is left or the amount does
/// not fit in a `u64`.
///
/// ```
/// use wharf_tables::parse_money;
///
/// assert_eq!(parse_money("Rp 1.250.000"), Some(1_250_000));
/// assert_eq!(parse_money("12a3"), Some(123));
/// assert_eq!(parse_money("Rp"), None);
/// ```
pub fn parse_money(text: &str) -> Option<u64> {
	let digits: String = text.chars().filter(char::is_ascii_digit).collect();
	if digits.is_empty() {
		return None;
	}
	match digits.parse::<u64>() {
		Ok(amount) => Some(amount),
		Err(_) => {
			tracing::debug!(input = text, "money input overflows u64");
			None
		}
	}
}

/// Raw string form of a JSON value
fn plain(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Renders a chrono format item, or `None` if the pattern is invalid
fn render(item: impl Display) -> Option<String> {
	let mut out = String::new();
	write!(out, "{}", item).ok()?;
	Some(out)
}

fn group_thousands(mut n: u128, separator: char) -> String {
	if n == 0 {
		return "0".to_string();
	}
	let mut groups = Vec::new();
	while n > 0 {
		groups.push(n % 1000);
		n /= 1000;
	}
	let mut out = String::new();
	for (i, group) in groups.iter().rev().enumerate() {
		if i == 0 {
			write!(out, "{}", group).ok();
		} else {
			out.push(separator);
			write!(out, "{:03}", group).ok();
		}
	}
	out
}

enum Temporal {
	Date(NaiveDate),
	DateTime(NaiveDateTime),
	Time(NaiveTime),
}

const DATETIME_PATTERNS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M",
];

const TIME_PATTERNS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

fn parse_temporal(value: &Value) -> Option<Temporal> {
	match value {
		Value::Number(n) => {
			let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
			DateTime::from_timestamp_millis(millis).map(|dt| Temporal::DateTime(dt.naive_utc()))
		}
		Value::String(s) => {
			let s = s.trim();
			if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
				return Some(Temporal::DateTime(dt.naive_local()));
			}
			for pattern in DATETIME_PATTERNS {
				if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
					return Some(Temporal::DateTime(dt));
				}
			}
			if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
				return Some(Temporal::Date(date));
			}
			TIME_PATTERNS
				.iter()
				.find_map(|pattern| NaiveTime::parse_from_str(s, pattern).ok())
				.map(Temporal::Time)
		}
		_ => None,
	}
}

fn money_amount(value: &Value) -> Option<f64> {
	let amount = match value {
		Value::Number(n) => n.as_f64()?,
		Value::String(s) => s.trim().parse::<f64>().ok()?,
		_ => return None,
	};
	amount.is_finite().then_some(amount)
}

/// Sign and magnitude of an integral JSON number, kept exact beyond 2^53
fn whole_amount(value: &Value) -> Option<(bool, u128)> {
	let Value::Number(n) = value else {
		return None;
	};
	n.as_u64()
		.map(|u| (false, u128::from(u)))
		.or_else(|| n.as_i64().map(|i| (i < 0, u128::from(i.unsigned_abs()))))
}

/// Renders field values according to [`DisplaySettings`]
#[derive(Debug, Clone, Default)]
pub struct Formatter {
	settings: DisplaySettings,
}

impl Formatter {
	/// Creates a formatter from `settings`
	///
	/// Fraction digits above [`MAX_FRACTION_DIGITS`] are clamped so settings
	/// built in code without [`DisplaySettings::validate`] still render.
	pub fn new(mut settings: DisplaySettings) -> Self {
		let digits = &mut settings.currency.fraction_digits;
		if *digits > MAX_FRACTION_DIGITS {
			tracing::warn!(
				fraction_digits = *digits,
				max = MAX_FRACTION_DIGITS,
				"clamping currency fraction digits"
			);
			*digits = MAX_FRACTION_DIGITS;
		}
		Self { settings }
	}

	/// The settings in use
	pub fn settings(&self) -> &DisplaySettings {
		&self.settings
	}

	/// Formats `value` according to `kind`
	pub fn format(&self, kind: &FieldKind, value: Option<&Value>) -> String {
		match kind {
			FieldKind::Text => self.format_text(value, None),
			FieldKind::Enum(whitelist) => self.format_text(value, Some(whitelist)),
			FieldKind::Date => self.format_date(value),
			FieldKind::Time => self.format_time(value),
			FieldKind::DateTime => self.format_datetime(value),
			FieldKind::Money => self.format_money(value),
			FieldKind::Boolean => self.format_boolean(value),
		}
	}

	/// Text is rendered unchanged; the whitelist is documentation only
	pub fn format_text(&self, value: Option<&Value>, _whitelist: Option<&EnumWhitelist>) -> String {
		match value {
			Some(v) if !is_blank(Some(v)) => plain(v),
			_ => String::new(),
		}
	}

	/// Date part of a date-only string, timestamp or epoch milliseconds
	pub fn format_date(&self, value: Option<&Value>) -> String {
		self.format_temporal(value, |t| match t {
			Temporal::Date(d) => render(d.format(&self.settings.date_format)),
			Temporal::DateTime(dt) => render(dt.date().format(&self.settings.date_format)),
			Temporal::Time(_) => None,
		})
	}

	/// Time part of a timestamp or time-of-day string
	pub fn format_time(&self, value: Option<&Value>) -> String {
		self.format_temporal(value, |t| match t {
			Temporal::Time(time) => render(time.format(&self.settings.time_format)),
			Temporal::DateTime(dt) => render(dt.time().format(&self.settings.time_format)),
			Temporal::Date(_) => None,
		})
	}

	/// Date and time of a timestamp; date-only values render the date
	pub fn format_datetime(&self, value: Option<&Value>) -> String {
		self.format_temporal(value, |t| match t {
			Temporal::DateTime(dt) => render(dt.format(&self.settings.datetime_format)),
			Temporal::Date(d) => render(d.format(&self.settings.date_format)),
			Temporal::Time(time) => render(time.format(&self.settings.time_format)),
		})
	}

	fn format_temporal<F>(&self, value: Option<&Value>, f: F) -> String
	where
		F: FnOnce(Temporal) -> Option<String>,
	{
		let Some(value) = value.filter(|v| !is_blank(Some(*v))) else {
			return String::new();
		};
		parse_temporal(value)
			.and_then(f)
			.unwrap_or_else(|| plain(value))
	}

	/// Currency text of a numeric amount (`Rp 1.250.000`)
	pub fn format_money(&self, value: Option<&Value>) -> String {
		let Some(value) = value.filter(|v| !is_blank(Some(*v))) else {
			return String::new();
		};
		if let Some((negative, units)) = whole_amount(value) {
			return self.render_money(negative, units.saturating_mul(self.money_scale()));
		}
		match money_amount(value) {
			Some(amount) => self.format_money_amount(amount),
			None => plain(value),
		}
	}

	/// Currency text of an amount
	pub fn format_money_amount(&self, amount: f64) -> String {
		// saturating cast; amounts beyond u128 are not money
		let scaled = (amount.abs() * self.money_scale() as f64).round() as u128;
		self.render_money(amount < 0.0, scaled)
	}

	/// Currency text of a whole amount, exact for every `u64`
	pub fn format_money_units(&self, units: u64) -> String {
		self.render_money(false, u128::from(units).saturating_mul(self.money_scale()))
	}

	fn money_scale(&self) -> u128 {
		let digits = self.settings.currency.fraction_digits.min(MAX_FRACTION_DIGITS);
		10u128.pow(u32::from(digits))
	}

	fn render_money(&self, negative: bool, scaled: u128) -> String {
		let currency = &self.settings.currency;
		let scale = self.money_scale();

		let mut out = String::new();
		if negative && scaled != 0 {
			out.push('-');
		}
		if !currency.symbol.is_empty() {
			out.push_str(&currency.symbol);
			out.push(' ');
		}
		out.push_str(&group_thousands(
			scaled / scale,
			currency.thousands_separator,
		));
		if scale > 1 {
			let width = scale.ilog10() as usize;
			out.push(currency.decimal_separator);
			write!(out, "{:0width$}", scaled % scale, width = width).ok();
		}
		out
	}

	/// Undecorated amount shown while a money input is focused
	///
	/// Rounded to a whole amount, no symbol and no separators. Integers
	/// are kept exact; fractional amounts saturate at the same width as
	/// [`Formatter::format_money_amount`].
	pub fn format_money_raw(&self, value: Option<&Value>) -> String {
		let Some(value) = value.filter(|v| !is_blank(Some(*v))) else {
			return String::new();
		};
		let (negative, units) = match whole_amount(value) {
			Some(whole) => whole,
			None => match money_amount(value) {
				Some(amount) => (amount < 0.0, amount.abs().round() as u128),
				None => return plain(value),
			},
		};
		if negative && units != 0 {
			format!("-{}", units)
		} else {
			units.to_string()
		}
	}

	/// Yes / no token of a boolean (or `"true"` / `"false"` string)
	pub fn format_boolean(&self, value: Option<&Value>) -> String {
		let tokens = &self.settings.boolean;
		match value {
			Some(Value::Bool(b)) => tokens.token(*b).to_string(),
			Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => tokens.yes.clone(),
			Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => tokens.no.clone(),
			Some(v) if !is_blank(Some(v)) => plain(v),
			_ => String::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::whitelist::TRUCK_TYPES;
	use proptest::prelude::*;
	use rstest::*;
	use serde_json::json;
	use wharf_conf::CurrencySettings;

	#[fixture]
	fn formatter() -> Formatter {
		Formatter::default()
	}

	#[rstest]
	#[case(FieldKind::Text)]
	#[case(FieldKind::Enum(TRUCK_TYPES))]
	#[case(FieldKind::Date)]
	#[case(FieldKind::Time)]
	#[case(FieldKind::DateTime)]
	#[case(FieldKind::Money)]
	#[case(FieldKind::Boolean)]
	fn test_no_value_renders_empty(formatter: Formatter, #[case] kind: FieldKind) {
		assert_eq!(formatter.format(&kind, None), "");
		assert_eq!(formatter.format(&kind, Some(&Value::Null)), "");
		assert_eq!(formatter.format(&kind, Some(&json!(""))), "");
	}

	#[rstest]
	fn test_enum_value_unchanged(formatter: Formatter) {
		let kind = FieldKind::Enum(TRUCK_TYPES);
		assert_eq!(formatter.format(&kind, Some(&json!("Fuso"))), "Fuso");
		assert_eq!(formatter.format(&kind, Some(&json!("Pickup"))), "Pickup");
	}

	#[rstest]
	#[case(json!(42), "42")]
	#[case(json!(true), "true")]
	#[case(json!("PT Samudera"), "PT Samudera")]
	fn test_text(formatter: Formatter, #[case] value: Value, #[case] expected: &str) {
		assert_eq!(formatter.format_text(Some(&value), None), expected);
	}

	#[rstest]
	#[case(json!("2024-03-01"), "01-03-2024")]
	#[case(json!("2024-03-01T08:30:00"), "01-03-2024")]
	#[case(json!("2024-03-01 08:30:00.250"), "01-03-2024")]
	#[case(json!("2024-03-01T23:30:00+07:00"), "01-03-2024")]
	#[case(json!(1_709_251_200_000_i64), "01-03-2024")]
	#[case(json!("next tuesday"), "next tuesday")]
	fn test_date(formatter: Formatter, #[case] value: Value, #[case] expected: &str) {
		assert_eq!(formatter.format_date(Some(&value)), expected);
	}

	#[rstest]
	#[case(json!("2024-03-01T08:30:00"), "08:30")]
	#[case(json!("2024-03-01T23:30:00+07:00"), "23:30")]
	#[case(json!("14:05:59"), "14:05")]
	#[case(json!("14:05"), "14:05")]
	#[case(json!("2024-03-01"), "2024-03-01")]
	fn test_time(formatter: Formatter, #[case] value: Value, #[case] expected: &str) {
		assert_eq!(formatter.format_time(Some(&value)), expected);
	}

	#[rstest]
	fn test_datetime(formatter: Formatter) {
		assert_eq!(
			formatter.format_datetime(Some(&json!("2024-03-01T08:30:00Z"))),
			"01-03-2024 08:30"
		);
		assert_eq!(
			formatter.format_datetime(Some(&json!("2024-03-01"))),
			"01-03-2024"
		);
	}

	#[rstest]
	fn test_invalid_pattern_falls_back_to_raw() {
		let mut settings = DisplaySettings::default();
		settings.date_format = "%Q".to_string();
		let formatter = Formatter::new(settings);
		assert_eq!(
			formatter.format_date(Some(&json!("2024-03-01"))),
			"2024-03-01"
		);
	}

	#[rstest]
	#[case(json!(0), "Rp 0")]
	#[case(json!(950), "Rp 950")]
	#[case(json!(1000), "Rp 1.000")]
	#[case(json!(1_250_000), "Rp 1.250.000")]
	#[case(json!(1_250_000.6), "Rp 1.250.001")]
	#[case(json!(-15_000), "-Rp 15.000")]
	#[case(json!("2500000"), "Rp 2.500.000")]
	#[case(json!("n/a"), "n/a")]
	fn test_money(formatter: Formatter, #[case] value: Value, #[case] expected: &str) {
		assert_eq!(formatter.format_money(Some(&value)), expected);
	}

	#[rstest]
	fn test_money_with_fraction_digits() {
		let mut settings = DisplaySettings::default();
		settings.currency = CurrencySettings {
			fraction_digits: 2,
			..CurrencySettings::rupiah()
		};
		let formatter = Formatter::new(settings);
		assert_eq!(formatter.format_money_amount(1234.5), "Rp 1.234,50");
		assert_eq!(formatter.format_money_amount(0.004), "Rp 0,00");
	}

	#[rstest]
	fn test_money_raw_has_no_decoration(formatter: Formatter) {
		assert_eq!(formatter.format_money_raw(Some(&json!(1_250_000))), "1250000");
		assert_eq!(formatter.format_money_raw(Some(&json!(99.5))), "100");
		assert_eq!(formatter.format_money_raw(None), "");
	}

	#[rstest]
	fn test_oversized_fraction_digits_are_clamped() {
		let mut settings = DisplaySettings::default();
		settings.currency.fraction_digits = 40;
		let formatter = Formatter::new(settings);

		assert_eq!(formatter.settings().currency.fraction_digits, MAX_FRACTION_DIGITS);
		assert_eq!(formatter.format_money(Some(&json!(1000))), "Rp 1.000,0000");
		assert_eq!(formatter.format_money_amount(12.5), "Rp 12,5000");
	}

	#[rstest]
	#[case(json!(9_007_199_254_740_993u64), "Rp 9.007.199.254.740.993", "9007199254740993")]
	#[case(json!(u64::MAX), "Rp 18.446.744.073.709.551.615", "18446744073709551615")]
	#[case(json!(i64::MIN), "-Rp 9.223.372.036.854.775.808", "-9223372036854775808")]
	fn test_large_integers_stay_exact(
		formatter: Formatter,
		#[case] value: Value,
		#[case] blurred: &str,
		#[case] focused: &str,
	) {
		assert_eq!(formatter.format_money(Some(&value)), blurred);
		assert_eq!(formatter.format_money_raw(Some(&value)), focused);
		assert_eq!(parse_money(blurred), parse_money(focused));
	}

	#[rstest]
	fn test_huge_fractional_amount_agrees_focused_and_blurred(formatter: Formatter) {
		let value = json!(1.0e30);
		let blurred = formatter.format_money(Some(&value));
		let focused = formatter.format_money_raw(Some(&value));
		assert_eq!(blurred.trim_start_matches("Rp ").replace('.', ""), focused);
	}

	#[rstest]
	#[case(json!(true), "Yes")]
	#[case(json!(false), "No")]
	#[case(json!("TRUE"), "Yes")]
	#[case(json!("false"), "No")]
	#[case(json!(1), "1")]
	fn test_boolean(formatter: Formatter, #[case] value: Value, #[case] expected: &str) {
		assert_eq!(formatter.format_boolean(Some(&value)), expected);
	}

	#[rstest]
	#[case("Rp 1.250.000", Some(1_250_000))]
	#[case("1250000", Some(1_250_000))]
	#[case("-5", Some(5))]
	#[case("", None)]
	#[case("99999999999999999999999", None)]
	fn test_parse_money(#[case] input: &str, #[case] expected: Option<u64>) {
		assert_eq!(parse_money(input), expected);
	}

	proptest! {
		/// Property: stripping digits from formatted money gives the rounded amount
		#[test]
		fn prop_money_round_trip(amount in 0.0f64..1.0e12) {
			let formatter = Formatter::default();
			let formatted = formatter.format_money_amount(amount);
			prop_assert_eq!(parse_money(&formatted), Some(amount.round() as u64));
		}

		/// Property: the focused form carries no symbol or separator
		#[test]
		fn prop_money_raw_is_digits(amount in 0.0f64..1.0e12) {
			let formatter = Formatter::default();
			let raw = formatter.format_money_raw(Some(&json!(amount)));
			prop_assert!(raw.chars().all(|c| c.is_ascii_digit()));
			prop_assert_eq!(parse_money(&raw), Some(amount.round() as u64));
		}
	}
}
