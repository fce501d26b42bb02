// Host-side tests for resize debouncing.

use ribbon_core::*;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn fires_once_after_quiet_period() {
    let mut debounce = ResizeDebounce::new(RESIZE_DEBOUNCE);
    assert!(!debounce.poll(ms(0)));

    debounce.notify(ms(0));
    debounce.notify(ms(100));
    debounce.notify(ms(250));
    assert!(debounce.is_pending());
    assert!(!debounce.poll(ms(500)));
    assert!(debounce.poll(ms(550)));
    assert!(!debounce.is_pending());
    assert!(!debounce.poll(ms(900)));
}

#[test]
fn new_burst_restarts_the_timer() {
    let mut debounce = ResizeDebounce::new(ms(300));
    debounce.notify(ms(1000));
    assert!(!debounce.poll(ms(1200)));
    debounce.notify(ms(1200));
    assert!(!debounce.poll(ms(1400)));
    assert!(debounce.poll(ms(1500)));
}
