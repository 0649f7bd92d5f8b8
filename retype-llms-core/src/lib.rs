#![doc = "retype-llms-core: core logic library for retype-llms."]

//! Locates, parses and validates a Retype project config, derives the
//! effective settings for a run and assembles the `llms.txt` summary files.
//! The CI host glue (inputs, outputs, exit status) lives in the `retype-llms`
//! crate.
//!
//! # Usage
//! [`find_config`] -> [`load_config`] -> [`DerivedSettings::derive`].

pub mod config;
pub mod error;
pub mod llms;
pub mod load;
pub mod locate;
pub mod pages;
pub mod schema;
pub mod settings;
pub mod validate;

pub use config::RetypeConfig;
pub use error::ConfigError;
pub use load::{load_config, parse_config_str};
pub use locate::{find_config, CONFIG_FILENAMES};
pub use settings::{Advisory, DerivedSettings, Overrides};
