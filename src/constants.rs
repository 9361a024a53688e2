/// Crate version, distinct from the server-facing firmware version in `cfg.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serial debug logging, selected at build time with the `debug-log` feature
pub const DEBUG_LOG_ENABLED: bool = cfg!(feature = "debug-log");

/// Number of push buttons on the remote
pub const BUTTON_COUNT: usize = 4;

/// Battery ADC + buttons + status LED
pub const ASSIGNED_PIN_COUNT: usize = BUTTON_COUNT + 2;
