//! Display settings structures

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::env::Env;
use crate::validation::{SettingsError, SettingsResult};

/// Settings controlling how table cells are rendered
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
	/// BCP 47 locale tag, informational for the rendering surface
	pub locale: String,

	/// Currency used by money columns and masked money inputs
	pub currency: CurrencySettings,

	/// `chrono` pattern for date-only values
	pub date_format: String,

	/// `chrono` pattern for time-of-day values
	pub time_format: String,

	/// `chrono` pattern for timestamps rendered with both parts
	pub datetime_format: String,

	/// Tokens used by boolean columns
	pub boolean: BooleanTokens,
}

/// Currency rendering rules
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
	/// Symbol prefixed to formatted amounts (e.g. `Rp`)
	pub symbol: String,

	/// ISO 4217 code
	pub code: String,

	/// Separator inserted between groups of three integer digits
	pub thousands_separator: char,

	/// Separator between integer and fraction digits
	pub decimal_separator: char,

	/// Number of fraction digits rendered after the decimal separator
	pub fraction_digits: u8,
}

/// Display tokens for `true` / `false`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BooleanTokens {
	/// Shown for `true`
	pub yes: String,
	/// Shown for `false`
	pub no: String,
}

impl Default for DisplaySettings {
	fn default() -> Self {
		Self {
			locale: "id-ID".to_string(),
			currency: CurrencySettings::default(),
			date_format: "%d-%m-%Y".to_string(),
			time_format: "%H:%M".to_string(),
			datetime_format: "%d-%m-%Y %H:%M".to_string(),
			boolean: BooleanTokens::default(),
		}
	}
}

impl Default for CurrencySettings {
	fn default() -> Self {
		Self::rupiah()
	}
}

impl CurrencySettings {
	/// Indonesian Rupiah without fraction digits (`Rp 1.250.000`)
	pub fn rupiah() -> Self {
		Self {
			symbol: "Rp".to_string(),
			code: "IDR".to_string(),
			thousands_separator: '.',
			decimal_separator: ',',
			fraction_digits: 0,
		}
	}
}

impl Default for BooleanTokens {
	fn default() -> Self {
		Self {
			yes: "Yes".to_string(),
			no: "No".to_string(),
		}
	}
}

impl BooleanTokens {
	/// Returns the token for the given value
	pub fn token(&self, value: bool) -> &str {
		if value { &self.yes } else { &self.no }
	}
}

impl DisplaySettings {
	/// Parses settings from a TOML document, filling missing keys with defaults
	///
	/// The result is validated before it is returned.
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self =
			toml::from_str(source).map_err(|e| SettingsError::Parse(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads and parses a TOML settings file
	pub fn from_toml_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
			path: path.display().to_string(),
			message: e.to_string(),
		})?;
		tracing::debug!(path = %path.display(), "loading display settings");
		Self::from_toml_str(&source)
	}

	/// Defaults overridden by `WHARF_*` process environment variables
	pub fn from_env() -> SettingsResult<Self> {
		let mut settings = Self::default();
		settings.apply_env(&Env::process())?;
		settings.validate()?;
		Ok(settings)
	}

	/// Applies environment overrides on top of the current values
	///
	/// Recognised keys (after the prefix): `LOCALE`, `DATE_FORMAT`,
	/// `TIME_FORMAT`, `DATETIME_FORMAT`, `CURRENCY_SYMBOL`, `CURRENCY_CODE`,
	/// `CURRENCY_FRACTION_DIGITS`, `BOOLEAN_YES`, `BOOLEAN_NO`.
	pub fn apply_env(&mut self, env: &Env) -> SettingsResult<()> {
		let string_fields: [(&str, &mut String); 8] = [
			("LOCALE", &mut self.locale),
			("DATE_FORMAT", &mut self.date_format),
			("TIME_FORMAT", &mut self.time_format),
			("DATETIME_FORMAT", &mut self.datetime_format),
			("CURRENCY_SYMBOL", &mut self.currency.symbol),
			("CURRENCY_CODE", &mut self.currency.code),
			("BOOLEAN_YES", &mut self.boolean.yes),
			("BOOLEAN_NO", &mut self.boolean.no),
		];
		for (key, field) in string_fields {
			if let Some(value) = env.get(key) {
				*field = value;
			}
		}

		if let Some(raw) = env.get("CURRENCY_FRACTION_DIGITS") {
			self.currency.fraction_digits =
				raw.trim().parse().map_err(|_| SettingsError::Invalid {
					key: env.key_name("CURRENCY_FRACTION_DIGITS"),
					message: format!("expected a small integer, got '{}'", raw),
				})?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults_are_rupiah() {
		let settings = DisplaySettings::default();
		assert_eq!(settings.locale, "id-ID");
		assert_eq!(settings.currency.symbol, "Rp");
		assert_eq!(settings.currency.thousands_separator, '.');
		assert_eq!(settings.currency.fraction_digits, 0);
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings = DisplaySettings::from_toml_str(
			r#"
			time_format = "%H:%M:%S"

			[currency]
			fraction_digits = 2
			"#,
		)
		.unwrap();

		assert_eq!(settings.time_format, "%H:%M:%S");
		assert_eq!(settings.currency.fraction_digits, 2);
		assert_eq!(settings.currency.symbol, "Rp");
		assert_eq!(settings.date_format, "%d-%m-%Y");
	}

	#[rstest]
	fn test_malformed_toml_is_parse_error() {
		let result = DisplaySettings::from_toml_str("date_format = ");
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	fn test_env_overrides() {
		let env = Env::from_pairs([
			("WHARF_BOOLEAN_YES", "Ya"),
			("WHARF_BOOLEAN_NO", "Tidak"),
			("WHARF_CURRENCY_FRACTION_DIGITS", "2"),
		]);
		let mut settings = DisplaySettings::default();
		settings.apply_env(&env).unwrap();

		assert_eq!(settings.boolean.token(true), "Ya");
		assert_eq!(settings.boolean.token(false), "Tidak");
		assert_eq!(settings.currency.fraction_digits, 2);
	}

	#[rstest]
	fn test_env_rejects_bad_fraction_digits() {
		let env = Env::from_pairs([("WHARF_CURRENCY_FRACTION_DIGITS", "many")]);
		let mut settings = DisplaySettings::default();
		let err = settings.apply_env(&env).unwrap_err();
		assert!(err.to_string().contains("WHARF_CURRENCY_FRACTION_DIGITS"));
	}
}
