/// Whole seconds of simulated time
///
/// Only advanced by a successful step and only reset when a new simulation is
/// created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimulationClock(u64);

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn seconds(&self) -> u64 {
        self.0
    }

    pub(crate) fn tick(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub(crate) fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_counts_ticks() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.seconds(), 0);
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.seconds(), 2);

        clock.reset();
        assert_eq!(clock, SimulationClock::default());
    }
}
