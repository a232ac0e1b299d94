//! Settings for neviraller.
//!
//! - Schema and built-in defaults in [`schema`]
//! - File discovery and parsing in [`loader`]
//!
//! # Example
//!
//! ```
//! use neviraller::config::{parse_settings, Settings};
//! use std::path::Path;
//!
//! let settings = parse_settings("fetch_timeout_secs: 5", Path::new("config.yml")).unwrap();
//! assert_eq!(settings.fetch_timeout_secs, 5);
//! assert_eq!(settings.binary_name, Settings::default().binary_name);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_settings, load_settings_file, parse_settings, user_settings_path};
pub use schema::Settings;
