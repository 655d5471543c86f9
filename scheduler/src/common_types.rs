use std::ops::Add;

use crate::{DynArray, ProcessControlBlock};

/// The queue of processes handed to a scheduling algorithm
pub type ReadyQueue = DynArray<ProcessControlBlock>;

/// A point on the simulated clock
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a new Timestamp object
    ///
    /// * `time` - inital value of the Timestamp
    pub fn new(time: u64) -> Timestamp {
        Timestamp(time)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Moves the clock forward to `time` if it is still behind it.
    /// Used when the CPU would sit idle until the next arrival.
    pub fn advance_to(&mut self, time: Timestamp) {
        if self.0 < time.0 {
            self.0 = time.0;
        }
    }

    /// Time elapsed between `earlier` and this timestamp, or 0 if `earlier`
    /// is still in the future
    pub fn elapsed_since(&self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: u64) -> Self::Output {
        Timestamp::new(self.0 + rhs)
    }
}

impl From<u32> for Timestamp {
    fn from(time: u32) -> Self {
        Timestamp::new(u64::from(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_only_moves_forward() {
        let mut clock = Timestamp::new(5);

        clock.advance_to(Timestamp::new(3));
        assert_eq!(clock.get(), 5);

        clock.advance_to(Timestamp::new(9));
        assert_eq!(clock.get(), 9);
    }

    #[test]
    fn elapsed_saturates() {
        let clock = Timestamp::new(4);

        assert_eq!(clock.elapsed_since(Timestamp::new(1)), 3);
        assert_eq!(clock.elapsed_since(Timestamp::new(10)), 0);
        assert_eq!((clock + 6).get(), 10);
    }
}
