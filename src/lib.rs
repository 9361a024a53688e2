#![cfg_attr(not(test), no_std)]

pub mod battery;
pub mod board;
pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod pins;
pub mod platform;
pub mod version;

pub use config::DeviceConfig;
pub use error::ConfigurationError;
