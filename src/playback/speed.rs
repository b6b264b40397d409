//! Playback speed setting and its step delay

use std::time::Duration;

use crate::errors::{Result, VisualizerError};

/// Speed slider value in `MIN..=MAX`; higher is faster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Speed(u32);

impl Speed {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;
    pub const DEFAULT: Speed = Speed(50);

    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(VisualizerError::InvalidSpeed {
                speed: value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Speed(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Delay between ticks: 1000ms - 9.5ms per speed unit, so 991ms at 1 and 50ms at 100
    pub fn step_delay(self) -> Duration {
        let millis = 1000 - (self.0 * 95) / 10;
        Duration::from_millis(u64::from(millis))
    }

    /// One notch faster, saturating at the top of the range
    pub fn faster(self, by: u32) -> Self {
        Speed(self.0.saturating_add(by).min(Self::MAX))
    }

    /// One notch slower, saturating at the bottom of the range
    pub fn slower(self, by: u32) -> Self {
        Speed(self.0.saturating_sub(by).max(Self::MIN))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_bounds() {
        assert_eq!(Speed::new(1).unwrap().step_delay(), Duration::from_millis(991));
        assert_eq!(Speed::new(50).unwrap().step_delay(), Duration::from_millis(525));
        assert_eq!(Speed::new(100).unwrap().step_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_delay_decreases_and_stays_positive() {
        let mut previous = Duration::MAX;
        for value in Speed::MIN..=Speed::MAX {
            let delay = Speed::new(value).unwrap().step_delay();
            assert!(delay > Duration::ZERO);
            assert!(delay <= previous);
            previous = delay;
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Speed::new(0).is_err());
        assert!(Speed::new(101).is_err());
    }

    #[test]
    fn test_faster_slower_saturate() {
        assert_eq!(Speed::new(95).unwrap().faster(10).value(), 100);
        assert_eq!(Speed::new(5).unwrap().slower(10).value(), 1);
    }
}
