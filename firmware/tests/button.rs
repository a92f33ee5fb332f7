#![no_std]
#![no_main]

use servo_sweep_firmware as _; // Panic handler.

#[defmt_test::tests]
mod tests {
    use servo_sweep_firmware::system::System;
    use servo_sweep_firmware::testlib::sample_until_button_is_clicked;

    #[init]
    fn init() -> System {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp)
    }

    #[test]
    fn button_detects_click(system: &mut System) {
        defmt::info!("Click the button");
        sample_until_button_is_clicked(&mut system.button);
        defmt::info!("OK");
    }
}
