pub mod button;
mod debounced;
pub mod outputs;

pub use daisy::hal;

use hal::delay::Delay;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;

use servo_sweep_control::{Configuration, Mode, RgbPins};

use button::Button;
use outputs::{BluePin, GreenPin, RedPin, ServoPin};

pub const CPU_FREQUENCY: u32 = 480_000_000;

pub type Controller = servo_sweep_control::Controller<ServoPin, RedPin, GreenPin, BluePin, Delay>;

pub struct System {
    pub controller: Controller,
    pub button: Button,
}

impl System {
    /// Initialize system abstraction
    ///
    /// Holding the button while powering the module on selects the RGB LED
    /// sequence instead of the servo sweep.
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let delay = cp.SYST.delay(ccdr.clocks);

        let servo = pins.GPIO.PIN_D1.into_push_pull_output();
        let led = RgbPins {
            red: pins.GPIO.PIN_D2.into_push_pull_output(),
            green: pins.GPIO.PIN_D3.into_push_pull_output(),
            blue: pins.GPIO.PIN_D4.into_push_pull_output(),
        };

        let mut button = Button::new(pins.GPIO.PIN_B9.into_floating_input());
        let mode = if button.held_at_boot() {
            Mode::Rgb
        } else {
            Mode::Sweep
        };
        defmt::info!("Selected mode={}", mode);

        let configuration = Configuration {
            mode,
            ..Configuration::default()
        };
        let controller = Controller::try_new(&configuration, servo, led, delay).unwrap();

        Self { controller, button }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
