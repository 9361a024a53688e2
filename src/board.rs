use core::fmt;
use core::str::FromStr;

use crate::battery::BatteryDivider;
use crate::constants::BUTTON_COUNT;
use crate::pins::{Gpio, FEATHER_A13};

/// Hardware revision the firmware is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardProfile {
    /// Adafruit HUZZAH32 Feather, battery sensed on the dedicated A13 pad.
    Feather,
    /// Second board revision, buttons 2..4 rerouted.
    RevB,
}

/// Pin wiring of a board revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    pub buttons: [Gpio; BUTTON_COUNT],
    pub status_led: Gpio,
    pub battery_adc: Gpio,
}

// Both revisions share a 100k/100k divider
const DIVIDER: BatteryDivider = BatteryDivider::new(100_000.0, 100_000.0);

const FEATHER_PINS: PinMap = PinMap {
    buttons: [Gpio::new(12), Gpio::new(14), Gpio::new(15), Gpio::new(27)],
    status_led: Gpio::new(13),
    battery_adc: FEATHER_A13,
};

const REV_B_PINS: PinMap = PinMap {
    buttons: [Gpio::new(12), Gpio::new(27), Gpio::new(14), Gpio::new(15)],
    status_led: Gpio::new(13),
    battery_adc: Gpio::new(35),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownBoard;

impl BoardProfile {
    pub const ALL: [BoardProfile; 2] = [BoardProfile::Feather, BoardProfile::RevB];

    /// Name used in `cfg.toml`.
    pub const fn name(self) -> &'static str {
        match self {
            BoardProfile::Feather => "feather",
            BoardProfile::RevB => "rev-b",
        }
    }

    pub const fn pin_map(self) -> PinMap {
        match self {
            BoardProfile::Feather => FEATHER_PINS,
            BoardProfile::RevB => REV_B_PINS,
        }
    }

    pub const fn battery_divider(self) -> BatteryDivider {
        DIVIDER
    }
}

impl FromStr for BoardProfile {
    type Err = UnknownBoard;

    /// Exact `cfg.toml` names only, same as `build.rs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardProfile::ALL
            .into_iter()
            .find(|board| board.name() == s)
            .ok_or(UnknownBoard)
    }
}

impl fmt::Display for BoardProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(pins: &[Gpio]) -> Vec<u8> {
        pins.iter().map(|p| p.number()).collect()
    }

    #[test]
    fn test_feather_pins() {
        let pins = BoardProfile::Feather.pin_map();
        assert_eq!(numbers(&pins.buttons), [12, 14, 15, 27]);
        assert_eq!(pins.status_led, Gpio::new(13));
        assert_eq!(pins.battery_adc, FEATHER_A13);
    }

    #[test]
    fn test_rev_b_pins() {
        let pins = BoardProfile::RevB.pin_map();
        assert_eq!(numbers(&pins.buttons), [12, 27, 14, 15]);
        assert_eq!(pins.status_led, Gpio::new(13));
        assert_eq!(pins.battery_adc, Gpio::new(35));
    }

    #[test]
    fn test_profile_names_round_trip() {
        for board in BoardProfile::ALL {
            assert_eq!(board.name().parse::<BoardProfile>(), Ok(board));
        }
        assert_eq!("rev-b".parse::<BoardProfile>(), Ok(BoardProfile::RevB));
        assert_eq!(" rev-b ".parse::<BoardProfile>(), Err(UnknownBoard));
        assert_eq!("Feather".parse::<BoardProfile>(), Err(UnknownBoard));
        assert_eq!("huzzah".parse::<BoardProfile>(), Err(UnknownBoard));
    }

    #[test]
    fn test_divider_is_100k_100k() {
        for board in BoardProfile::ALL {
            let divider = board.battery_divider();
            assert_eq!(divider.r1_ohms, 100_000.0);
            assert_eq!(divider.r2_ohms, 100_000.0);
        }
    }
}
