use chrono::{Local, NaiveDateTime};
use rand::Rng;
use std::ops::RangeInclusive;

/// Source of the current local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Source of uniformly distributed integers.
///
/// Implementations are shared between concurrent requests, so drawing only
/// takes `&self`.
pub trait RandomSource: Send + Sync {
    fn draw_int(&self, range: RangeInclusive<i32>) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Draws from the thread local generator, so every worker thread gets its
/// own generator instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw_int(&self, range: RangeInclusive<i32>) -> i32 {
        rand::rng().random_range(range)
    }
}

#[cfg(test)]
pub mod fakes {
    use super::*;

    pub struct FixedClock(pub NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    /// Always returns the lower bound of the requested range.
    pub struct MinimumRandom;

    impl RandomSource for MinimumRandom {
        fn draw_int(&self, range: RangeInclusive<i32>) -> i32 {
            *range.start()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn thread_random_stays_in_range() {
        let random = ThreadRandom;
        for _ in 0..1000 {
            let value = random.draw_int(-3..=3);
            assert!((-3..=3).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn thread_random_handles_single_value_range() {
        assert_eq!(ThreadRandom.draw_int(7..=7), 7);
    }

    #[test]
    fn system_clock_is_close_to_local_time() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        let after = Local::now().naive_local();
        assert!(before <= now && now <= after);
    }
}
