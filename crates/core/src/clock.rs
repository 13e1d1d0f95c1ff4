//! Gravity cadence on top of an external monotonic clock

/// Fires at most once per interval of the caller's clock
#[derive(Debug, Clone, PartialEq)]
pub struct GravityClock {
    interval: f32,
    last: Option<f32>,
}

impl GravityClock {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Returns true when more than one interval has passed since the last
    /// firing. The first call only records `now` as the origin.
    pub fn advance(&mut self, now: f32) -> bool {
        match self.last {
            None => {
                self.last = Some(now);
                false
            }
            Some(last) if now - last > self.interval => {
                self.last = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    /// Forget the origin; the next `advance` latches again
    pub fn reset(&mut self) {
        self.last = None;
    }
}
