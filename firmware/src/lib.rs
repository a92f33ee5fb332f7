//! Board support for running the servo sweep on Daisy Patch SM.

#![no_main]
#![no_std]

use defmt_rtt as _; // Global logger.
use panic_probe as _;
use stm32h7xx_hal as _; // Readable panic.

pub mod system;
pub mod testlib;

// Avoid printing the panic message twice when `defmt::panic` is invoked.
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
