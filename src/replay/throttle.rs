//! Scroll tick throttling by trace timestamp.

/// Admits at most one tick per `interval_ms`.
///
/// Ticks without a timestamp are always admitted and do not move the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollThrottle {
    interval_ms: u64,
    last_delivered: Option<u64>,
}

impl ScrollThrottle {
    /// An interval of zero admits every tick.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_delivered: None,
        }
    }

    /// Whether a tick at `ts` should be delivered. Untimed ticks always are.
    pub fn admit(&mut self, ts: Option<u64>) -> bool {
        let Some(ts) = ts else {
            return true;
        };

        let due = match self.last_delivered {
            None => true,
            // Timestamps going backwards restart the window.
            Some(last) if ts < last => true,
            Some(last) => ts - last >= self.interval_ms,
        };

        if due {
            self.last_delivered = Some(ts);
        }
        due
    }
}
