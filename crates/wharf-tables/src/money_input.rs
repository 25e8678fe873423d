//! Masked money input
//!
//! The editing counterpart of a money column. While the control is
//! focused it shows the bare number so the operator can type freely; on
//! blur it shows the currency text. Every keystroke is reparsed with
//! [`parse_money`], which keeps only the digits.

use serde_json::Value;
use std::rc::Rc;

use crate::format::{Formatter, parse_money};

/// State of a masked money input control
#[derive(Debug, Clone)]
pub struct MoneyInput {
	value: Option<u64>,
	focused: bool,
	formatter: Rc<Formatter>,
}

impl MoneyInput {
	/// Creates an unfocused input holding `value`
	pub fn new(value: Option<u64>, formatter: Rc<Formatter>) -> Self {
		Self {
			value,
			focused: false,
			formatter,
		}
	}

	/// Creates an input from a record value; non-numeric values start empty
	pub fn from_value(value: Option<&Value>, formatter: Rc<Formatter>) -> Self {
		let amount = value.and_then(|v| match v {
			Value::Number(n) => n
				.as_u64()
				.or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
			Value::String(s) => s.trim().parse::<f64>().ok().and_then(|f| {
				(f.is_finite() && f >= 0.0).then(|| f.round() as u64)
			}),
			_ => None,
		});
		Self::new(amount, formatter)
	}

	/// Current amount
	pub fn value(&self) -> Option<u64> {
		self.value
	}

	/// Whether the control has focus
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Control gained focus: switch to the raw display
	pub fn focus(&mut self) {
		self.focused = true;
	}

	/// Control lost focus: switch to the currency display
	pub fn blur(&mut self) {
		self.focused = false;
	}

	/// Applies the control's new text and returns the parsed amount
	pub fn input(&mut self, text: &str) -> Option<u64> {
		self.value = parse_money(text);
		self.value
	}

	/// Text the control shows in its current focus state
	pub fn display(&self) -> String {
		match (self.value, self.focused) {
			(None, _) => String::new(),
			(Some(amount), true) => amount.to_string(),
			(Some(amount), false) => self.formatter.format_money_units(amount),
		}
	}
}
