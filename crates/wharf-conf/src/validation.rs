//! Settings validation
//!
//! Settings are checked once at load time so formatters can assume a
//! consistent configuration afterwards.

use crate::settings::DisplaySettings;

/// Validation result
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors raised while loading or validating settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// TOML source could not be deserialized
	#[error("Failed to parse settings: {0}")]
	Parse(String),

	/// Settings file could not be read
	#[error("Failed to read settings file '{path}': {message}")]
	Io {
		/// Path of the file
		path: String,
		/// Underlying I/O error message
		message: String,
	},

	/// A setting holds an unusable value
	#[error("Invalid value for '{key}': {message}")]
	Invalid {
		/// Name of the offending setting
		key: String,
		/// What is wrong with it
		message: String,
	},

	/// Several problems found in one pass
	#[error("Multiple validation errors: {0:?}")]
	Multiple(Vec<SettingsError>),
}

/// Largest supported number of currency fraction digits
pub const MAX_FRACTION_DIGITS: u8 = 4;

impl DisplaySettings {
	/// Checks the settings for internal consistency
	///
	/// Every problem is collected; a single problem is returned as is,
	/// several are wrapped in [`SettingsError::Multiple`].
	pub fn validate(&self) -> SettingsResult<()> {
		let mut errors = Vec::new();

		for (key, pattern) in [
			("date_format", &self.date_format),
			("time_format", &self.time_format),
			("datetime_format", &self.datetime_format),
		] {
			if pattern.trim().is_empty() {
				errors.push(invalid(key, "format pattern must not be empty"));
			}
		}

		let currency = &self.currency;
		if currency.thousands_separator == currency.decimal_separator {
			errors.push(invalid(
				"currency.thousands_separator",
				"must differ from the decimal separator",
			));
		}
		for (key, sep) in [
			("currency.thousands_separator", currency.thousands_separator),
			("currency.decimal_separator", currency.decimal_separator),
		] {
			if sep.is_ascii_digit() {
				errors.push(invalid(key, "separator must not be a digit"));
			}
		}
		if currency.fraction_digits > MAX_FRACTION_DIGITS {
			errors.push(invalid(
				"currency.fraction_digits",
				&format!("must be at most {}", MAX_FRACTION_DIGITS),
			));
		}

		if self.boolean.yes == self.boolean.no {
			errors.push(invalid("boolean", "yes and no tokens must differ"));
		}

		match errors.len() {
			0 => Ok(()),
			1 => Err(errors.remove(0)),
			_ => Err(SettingsError::Multiple(errors)),
		}
	}
}

fn invalid(key: &str, message: &str) -> SettingsError {
	SettingsError::Invalid {
		key: key.to_string(),
		message: message.to_string(),
	}
}
