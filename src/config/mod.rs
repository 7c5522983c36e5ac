//! Configuration for the speech client.
//!
//! Values come from an optional JSON file in the home directory, the
//! environment, and explicit overrides such as command-line flags.

mod settings;

pub use settings::{
    API_KEY_ENV, BASE_URL_ENV, Config, ConfigError, ConfigFile, DEFAULT_BASE_URL, Overrides,
};
