use core::fmt;

use crate::endpoint::EndpointError;
use crate::pins::Gpio;

/// Role a pin plays on the board, used to name the offending field in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    Button(u8),
    StatusLed,
    BatteryAdc,
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinRole::Button(n) => write!(f, "button {}", n),
            PinRole::StatusLed => f.write_str("status LED"),
            PinRole::BatteryAdc => f.write_str("battery ADC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resistor {
    R1,
    R2,
}

/// Invalid device configuration. Fatal: the device must not start with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    DuplicatePin {
        pin: Gpio,
        first: PinRole,
        second: PinRole,
    },
    InvalidPin {
        role: PinRole,
        pin: Gpio,
    },
    PinReservedForDebugUart {
        role: PinRole,
        pin: Gpio,
    },
    PinNotInputCapable {
        role: PinRole,
        pin: Gpio,
    },
    PinNotOutputCapable {
        role: PinRole,
        pin: Gpio,
    },
    PinNotAnalogCapable {
        role: PinRole,
        pin: Gpio,
    },
    NonPositiveResistance {
        resistor: Resistor,
        ohms: f32,
    },
    MalformedEndpoint(EndpointError),
    ZeroUpdateRate,
    ZeroFirmwareVersion,
    AlreadyInitialized,
}

impl From<EndpointError> for ConfigurationError {
    fn from(e: EndpointError) -> Self {
        ConfigurationError::MalformedEndpoint(e)
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::DuplicatePin { pin, first, second } => {
                write!(f, "{} assigned to both {} and {}", pin, first, second)
            }
            ConfigurationError::InvalidPin { role, pin } => {
                write!(f, "{} is not a usable pad ({})", pin, role)
            }
            ConfigurationError::PinReservedForDebugUart { role, pin } => {
                write!(f, "{} carries the debug UART ({})", pin, role)
            }
            ConfigurationError::PinNotInputCapable { role, pin } => {
                write!(f, "{} cannot be used as an input ({})", pin, role)
            }
            ConfigurationError::PinNotOutputCapable { role, pin } => {
                write!(f, "{} is input only ({})", pin, role)
            }
            ConfigurationError::PinNotAnalogCapable { role, pin } => {
                write!(f, "{} is not on ADC1 ({})", pin, role)
            }
            ConfigurationError::NonPositiveResistance { resistor, ohms } => {
                write!(f, "divider {:?} must be positive, got {} ohms", resistor, ohms)
            }
            ConfigurationError::MalformedEndpoint(e) => write!(f, "remote endpoint: {}", e),
            ConfigurationError::ZeroUpdateRate => f.write_str("update rate must be at least 1 s"),
            ConfigurationError::ZeroFirmwareVersion => f.write_str("firmware version must be > 0"),
            ConfigurationError::AlreadyInitialized => {
                f.write_str("device configuration already initialized")
            }
        }
    }
}
