/// Majority vote over the last `N` samples of a digital input.
///
/// `N` must not exceed 32.
#[derive(Debug, Eq, PartialEq, defmt::Format)]
pub struct Debounced<const N: usize> {
    history: u32,
}

impl<const N: usize> Debounced<N> {
    const MASK: u32 = if N >= 32 { u32::MAX } else { (1 << N) - 1 };

    pub fn new() -> Self {
        Self { history: 0 }
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.history = ((self.history << 1) | u32::from(value)) & Self::MASK;
        self.history.count_ones() as usize > N / 2
    }
}
