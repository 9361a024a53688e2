use core::time::Duration;

use static_cell::StaticCell;

use crate::battery::BatteryDivider;
use crate::board::BoardProfile;
use crate::constants::{ASSIGNED_PIN_COUNT, BUTTON_COUNT, DEBUG_LOG_ENABLED};
use crate::endpoint::Endpoint;
use crate::error::{ConfigurationError, PinRole, Resistor};
use crate::pins::{AdcUnit, Gpio};
use crate::version::FirmwareVersion;

pub struct BuildConfig {
    // Board revision the firmware is built for
    pub board: BoardProfile,

    // Firmware version reported to the home control server
    pub firmware_version: u16,

    // Home control server endpoint
    pub remote_endpoint: &'static str,

    // Update loop interval in seconds
    pub update_rate_seconds: u16,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

static DEVICE_CONFIG: StaticCell<DeviceConfig> = StaticCell::new();

/// Unvalidated configuration values. Only [`DeviceConfig::validate`] turns them
/// into something the firmware may use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDeviceConfig {
    pub board: BoardProfile,
    pub firmware_version: u16,
    pub debug_log_enabled: bool,
    pub battery_divider: BatteryDivider,
    pub battery_adc_pin: Gpio,
    pub button_pins: [Gpio; BUTTON_COUNT],
    pub status_led_pin: Gpio,
    pub remote_endpoint: &'static str,
    pub update_rate_seconds: u16,
}

impl RawDeviceConfig {
    /// Board wiring of `board` combined with the values from `cfg.toml`.
    pub const fn for_profile(board: BoardProfile) -> Self {
        let pins = board.pin_map();
        Self {
            board,
            firmware_version: BUILD.firmware_version,
            debug_log_enabled: DEBUG_LOG_ENABLED,
            battery_divider: board.battery_divider(),
            battery_adc_pin: pins.battery_adc,
            button_pins: pins.buttons,
            status_led_pin: pins.status_led,
            remote_endpoint: BUILD.remote_endpoint,
            update_rate_seconds: BUILD.update_rate_seconds,
        }
    }
}

/// Validated, immutable device configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceConfig {
    board: BoardProfile,
    firmware_version: FirmwareVersion,
    debug_log_enabled: bool,
    battery_divider: BatteryDivider,
    battery_adc_pin: Gpio,
    button_pins: [Gpio; BUTTON_COUNT],
    status_led_pin: Gpio,
    remote_endpoint: &'static str,
    endpoint: Endpoint<'static>,
    update_rate_seconds: u16,
}

impl DeviceConfig {
    /// Configuration for the board selected in `cfg.toml`.
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::load_profile(BUILD.board)
    }

    pub fn load_profile(board: BoardProfile) -> Result<Self, ConfigurationError> {
        let config = Self::validate(RawDeviceConfig::for_profile(board)).inspect_err(|e| {
            log::error!("Invalid configuration for board {}: {}", board, e);
        })?;

        log::info!(
            "Loaded configuration: board={}, firmware={}, endpoint={}, update rate={}s",
            config.board,
            config.firmware_version,
            config.remote_endpoint,
            config.update_rate_seconds
        );
        log::debug!(
            "Pins: buttons={:?}, led={}, battery={}",
            config.button_pins,
            config.status_led_pin,
            config.battery_adc_pin
        );

        Ok(config)
    }

    pub fn validate(raw: RawDeviceConfig) -> Result<Self, ConfigurationError> {
        if raw.firmware_version == 0 {
            return Err(ConfigurationError::ZeroFirmwareVersion);
        }
        if raw.update_rate_seconds == 0 {
            return Err(ConfigurationError::ZeroUpdateRate);
        }

        check_divider(&raw.battery_divider)?;
        check_pins(&raw)?;

        let endpoint = Endpoint::parse(raw.remote_endpoint)?;

        Ok(Self {
            board: raw.board,
            firmware_version: FirmwareVersion::new(raw.firmware_version),
            debug_log_enabled: raw.debug_log_enabled,
            battery_divider: raw.battery_divider,
            battery_adc_pin: raw.battery_adc_pin,
            button_pins: raw.button_pins,
            status_led_pin: raw.status_led_pin,
            remote_endpoint: raw.remote_endpoint,
            endpoint,
            update_rate_seconds: raw.update_rate_seconds,
        })
    }

    pub fn board(&self) -> BoardProfile {
        self.board
    }

    pub fn firmware_version(&self) -> FirmwareVersion {
        self.firmware_version
    }

    pub fn debug_log_enabled(&self) -> bool {
        self.debug_log_enabled
    }

    pub fn battery_divider(&self) -> BatteryDivider {
        self.battery_divider
    }

    pub fn battery_adc_pin(&self) -> Gpio {
        self.battery_adc_pin
    }

    pub fn button_pins(&self) -> [Gpio; BUTTON_COUNT] {
        self.button_pins
    }

    /// Pin of button `number`, counted from 1 like the silkscreen.
    pub fn button_pin(&self, number: usize) -> Option<Gpio> {
        number
            .checked_sub(1)
            .and_then(|i| self.button_pins.get(i))
            .copied()
    }

    pub fn status_led_pin(&self) -> Gpio {
        self.status_led_pin
    }

    pub fn remote_endpoint(&self) -> &'static str {
        self.remote_endpoint
    }

    pub fn endpoint(&self) -> Endpoint<'static> {
        self.endpoint
    }

    pub fn update_rate_seconds(&self) -> u16 {
        self.update_rate_seconds
    }

    /// Update loop cadence.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_rate_seconds.into())
    }
}

/// Load and store the configuration for the rest of the process lifetime.
/// Only the first call succeeds.
pub fn init() -> Result<&'static DeviceConfig, ConfigurationError> {
    let config = DeviceConfig::load()?;
    DEVICE_CONFIG
        .try_init(config)
        .map(|config| &*config)
        .ok_or(ConfigurationError::AlreadyInitialized)
}

fn check_divider(divider: &BatteryDivider) -> Result<(), ConfigurationError> {
    if divider.is_valid() {
        return Ok(());
    }

    // R2 swapped for a known good value isolates R1
    let (resistor, ohms) = if BatteryDivider::new(divider.r1_ohms, 1.0).is_valid() {
        (Resistor::R2, divider.r2_ohms)
    } else {
        (Resistor::R1, divider.r1_ohms)
    };
    Err(ConfigurationError::NonPositiveResistance { resistor, ohms })
}

fn check_pins(raw: &RawDeviceConfig) -> Result<(), ConfigurationError> {
    let [b1, b2, b3, b4] = raw.button_pins;
    let assigned: [(PinRole, Gpio); ASSIGNED_PIN_COUNT] = [
        (PinRole::BatteryAdc, raw.battery_adc_pin),
        (PinRole::Button(1), b1),
        (PinRole::Button(2), b2),
        (PinRole::Button(3), b3),
        (PinRole::Button(4), b4),
        (PinRole::StatusLed, raw.status_led_pin),
    ];

    for &(role, pin) in assigned.iter() {
        if !pin.is_valid() {
            return Err(ConfigurationError::InvalidPin { role, pin });
        }
        if raw.debug_log_enabled && pin.is_debug_uart() {
            return Err(ConfigurationError::PinReservedForDebugUart { role, pin });
        }
        match role {
            PinRole::Button(_) if !pin.is_input_capable() => {
                return Err(ConfigurationError::PinNotInputCapable { role, pin });
            }
            PinRole::StatusLed if !pin.is_output_capable() => {
                return Err(ConfigurationError::PinNotOutputCapable { role, pin });
            }
            // ADC2 is taken by the Wi-Fi driver
            PinRole::BatteryAdc if pin.adc_unit() != Some(AdcUnit::Adc1) => {
                return Err(ConfigurationError::PinNotAnalogCapable { role, pin });
            }
            _ => {}
        }
    }

    for (i, &(second, pin)) in assigned.iter().enumerate() {
        if let Some(&(first, _)) = assigned[..i].iter().find(|(_, other)| *other == pin) {
            return Err(ConfigurationError::DuplicatePin { pin, first, second });
        }
    }

    Ok(())
}
