use crate::config::DeviceConfig;
use crate::pins::Gpio;

/// Push button position, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button(pub u8);

/// Hardware layer the firmware provides to wire up the configured pins.
pub trait Platform {
    type Error: core::fmt::Debug;

    fn configure_battery_adc(&mut self, pin: Gpio) -> Result<(), Self::Error>;

    fn configure_button(&mut self, button: Button, pin: Gpio) -> Result<(), Self::Error>;

    fn configure_status_led(&mut self, pin: Gpio) -> Result<(), Self::Error>;
}

/// Configure every pin of `config` on `platform`: battery ADC, buttons in order, then the LED.
pub fn apply<P: Platform>(config: &DeviceConfig, platform: &mut P) -> Result<(), P::Error> {
    platform.configure_battery_adc(config.battery_adc_pin())?;

    for (i, pin) in config.button_pins().into_iter().enumerate() {
        platform.configure_button(Button(i as u8 + 1), pin)?;
    }

    platform.configure_status_led(config.status_led_pin())?;

    log::debug!("Pins configured for board {}", config.board());
    Ok(())
}
