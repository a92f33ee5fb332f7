use crate::system::button::Button;
use crate::system::CPU_FREQUENCY;

pub fn sample_until_button_is_clicked(button: &mut Button) {
    loop {
        let was_down = button.active;
        button.sample();
        let is_down = button.active;
        if !was_down && is_down {
            break;
        }
        cortex_m::asm::delay(CPU_FREQUENCY / 1000);
    }
}
