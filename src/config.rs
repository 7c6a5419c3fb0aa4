#![forbid(unsafe_code)]

//! Configuration loading for nameshift

pub mod migration_toml;

pub use migration_toml::Config;
