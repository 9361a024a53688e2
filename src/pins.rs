//! ESP32 pad numbering and capabilities.
//!
//! GPIO  |  Notes
//! ------+---------------------------------------------
//! 6-11  | wired to the SPI flash, never usable
//! 20,24 | not bonded out on ESP32-D0WD
//! 28-31 | do not exist
//! 34-39 | input only, no internal pull resistors
//! 32-39 | ADC1
//! 0,2,4,12-15,25-27 | ADC2, unavailable while Wi-Fi runs

use core::fmt;

/// Highest pad number on the ESP32.
pub const MAX_GPIO: u8 = 39;

/// UART0 pads carrying the serial debug output.
pub const DEBUG_UART_TX: Gpio = Gpio(1);
pub const DEBUG_UART_RX: Gpio = Gpio(3);

/// Battery sense pin of the Adafruit HUZZAH32 Feather (A13).
pub const FEATHER_A13: Gpio = Gpio(35);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcUnit {
    Adc1,
    Adc2,
}

/// Hardware pin identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gpio(u8);

impl Gpio {
    pub const fn new(number: u8) -> Self {
        Gpio(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        matches!(self.0, 0..=5 | 12..=19 | 21..=23 | 25..=27 | 32..=MAX_GPIO)
    }

    pub const fn is_input_capable(self) -> bool {
        self.is_valid()
    }

    pub const fn is_output_capable(self) -> bool {
        self.is_valid() && self.0 < 34
    }

    pub const fn is_debug_uart(self) -> bool {
        self.0 == DEBUG_UART_TX.0 || self.0 == DEBUG_UART_RX.0
    }

    pub const fn adc_unit(self) -> Option<AdcUnit> {
        match self.0 {
            32..=MAX_GPIO => Some(AdcUnit::Adc1),
            0 | 2 | 4 | 12..=15 | 25..=27 => Some(AdcUnit::Adc2),
            _ => None,
        }
    }
}

impl fmt::Display for Gpio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}
