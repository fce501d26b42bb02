use std::time::Duration;

/// Collapses a burst of resize notifications into one, fired once input has
/// been quiet for `delay`.
#[derive(Clone, Debug)]
pub struct ResizeDebounce {
    delay: Duration,
    pending_since: Option<Duration>,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Records a resize event; restarts the quiet period.
    pub fn notify(&mut self, now: Duration) {
        self.pending_since = Some(now);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// True exactly once per burst, on the first poll after the quiet period.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_sub(since) >= self.delay => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }
}
