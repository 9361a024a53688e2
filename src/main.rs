#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_backtrace as _;
use esp_hal::{self as hal};
use esp_println::logger::init_logger;

use hal::{
    gpio::{AnyPin, Input, InputConfig, Level, Output, OutputConfig, Pull},
    timer::timg::TimerGroup,
};

use grandma_remote::config::{self, DeviceConfig};
use grandma_remote::constants::{BUTTON_COUNT, DEBUG_LOG_ENABLED, VERSION};
use grandma_remote::pins::Gpio;
use grandma_remote::platform::{self, Button, Platform};

esp_bootloader_esp_idf::esp_app_desc!();

#[derive(Debug)]
enum Error {
    TooManyButtons,
}

/// GPIO drivers for the pins named in the device configuration.
struct EspPlatform {
    buttons: heapless::Vec<Input<'static>, BUTTON_COUNT>,
    status_led: Option<Output<'static>>,
    battery_adc: Option<Gpio>,
}

impl EspPlatform {
    fn new() -> Self {
        Self {
            buttons: heapless::Vec::new(),
            status_led: None,
            battery_adc: None,
        }
    }
}

// Pin numbers are validated against the ESP32 pad table before reaching here,
// and each one is claimed at most once.
fn claim(pin: Gpio) -> AnyPin<'static> {
    unsafe { AnyPin::steal(pin.number()) }
}

impl Platform for EspPlatform {
    type Error = Error;

    fn configure_battery_adc(&mut self, pin: Gpio) -> Result<(), Self::Error> {
        // sampled by the battery monitor, only reserved here
        self.battery_adc = Some(pin);
        Ok(())
    }

    fn configure_button(&mut self, button: Button, pin: Gpio) -> Result<(), Self::Error> {
        let input = Input::new(claim(pin), InputConfig::default().with_pull(Pull::Up));
        self.buttons
            .push(input)
            .map_err(|_| Error::TooManyButtons)?;
        log::debug!("Button {} on {}", button.0, pin);
        Ok(())
    }

    fn configure_status_led(&mut self, pin: Gpio) -> Result<(), Self::Error> {
        self.status_led = Some(Output::new(claim(pin), Level::Low, OutputConfig::default()));
        Ok(())
    }
}

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    init_logger(if DEBUG_LOG_ENABLED {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    });

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    log::info!("Grandma Remote {}", VERSION);

    let config = match config::init() {
        Ok(config) => config,
        Err(e) => panic!("Invalid device configuration: {}", e),
    };

    let mut board = EspPlatform::new();
    platform::apply(config, &mut board).unwrap();

    if let Some(pin) = board.battery_adc {
        log::info!("Battery sensed on {}", pin);
    }

    spawner.spawn(main_task(config, board)).ok();
}

#[embassy_executor::task]
async fn main_task(config: &'static DeviceConfig, mut board: EspPlatform) {
    let interval = Duration::from_secs(config.update_interval().as_secs());

    loop {
        // Heartbeat
        if let Some(led) = board.status_led.as_mut() {
            led.toggle();
        }

        for (i, button) in board.buttons.iter().enumerate() {
            if button.is_low() {
                log::debug!("Button {} pressed", i + 1);
            }
        }

        Timer::after(interval).await;
    }
}
