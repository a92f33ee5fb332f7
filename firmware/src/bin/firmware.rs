#![no_main]
#![no_std]

use servo_sweep_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true)]
mod app {
    use servo_sweep_firmware::system::{Controller, System};

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        controller: Controller,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);

        (
            Shared {},
            Local {
                controller: system.controller,
            },
            init::Monotonics(),
        )
    }

    // Pulses are timed by busy-waiting, nothing else may run meanwhile.
    #[idle(local = [controller])]
    fn idle(cx: idle::Context) -> ! {
        match cx.local.controller.run_forever() {
            Ok(never) | Err(never) => match never {},
        }
    }
}
