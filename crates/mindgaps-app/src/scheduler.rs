// crates/mindgaps-app/src/scheduler.rs
// Browser timers (setInterval / setTimeout) behind the core Scheduler trait

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use mindgaps_core::Scheduler;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Live browser timer; both variants clear the underlying JS timer on drop
pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn interval(&self, period: Duration, tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis(period), tick))
    }

    fn timeout(&self, delay: Duration, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis(delay), fire))
    }
}
