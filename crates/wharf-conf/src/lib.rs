//! # Display Settings
//!
//! Configuration for how wharf tables render values: locale, currency,
//! date/time patterns and boolean tokens.
//!
//! Settings are plain serde structures with defaults matching an
//! Indonesian back office (`id-ID`, Rupiah without fraction digits).
//! They can be loaded from TOML, overridden from `WHARF_*` environment
//! variables and must pass [`DisplaySettings::validate`] before use.
//!
//! ```
//! use wharf_conf::DisplaySettings;
//!
//! let settings = DisplaySettings::from_toml_str(
//!     r#"
//!     date_format = "%Y-%m-%d"
//!
//!     [boolean]
//!     yes = "Ya"
//!     no = "Tidak"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.date_format, "%Y-%m-%d");
//! assert_eq!(settings.currency.symbol, "Rp");
//! ```

#![warn(missing_docs)]

pub mod env;
pub mod settings;
pub mod validation;

pub use env::Env;
pub use settings::{BooleanTokens, CurrencySettings, DisplaySettings};
pub use validation::{SettingsError, SettingsResult};
