// crates/mindgaps-core/src/carousel.rs
// Testimonial carousel: cyclic index, dot strip and timer-driven auto-advance

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CarouselTiming;
use crate::error::{Result, SiteError};
use crate::timer::{Scheduler, TimerSlot};

/// Cyclic index over a fixed number of slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self { len, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers only ever pass dot
    /// positions or indices produced by `next_index`/`prev_index`.
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "slide index {} out of range for {} slides",
            index,
            self.len
        );
        self.current = index;
    }

    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.len
    }

    pub fn prev_index(&self) -> usize {
        (self.current + self.len - 1) % self.len
    }
}

/// Keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Prev,
    Next,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavKey::Prev),
            "ArrowRight" => Some(NavKey::Next),
            _ => None,
        }
    }
}

/// Render target for the carousel.
///
/// `slide` is `None` while the previous slide runs its exit transition.
pub trait CarouselView {
    fn show(&self, dot: usize, slide: Option<usize>);
}

struct Inner<H> {
    state: CarouselState,
    auto_advance: TimerSlot<H>,
    activation: TimerSlot<H>,
}

struct Shared<T: Scheduler> {
    scheduler: T,
    timing: CarouselTiming,
    view: Box<dyn CarouselView>,
    inner: RefCell<Inner<T::Handle>>,
}

impl<T: Scheduler> Shared<T> {
    fn go_to(self: &Rc<Self>, index: usize) {
        self.inner.borrow_mut().state.set(index);
        self.view.show(index, None);

        let delay = self.timing.activation_delay();
        if delay.is_zero() {
            self.inner.borrow_mut().activation.disarm();
            self.view.show(index, Some(index));
            return;
        }

        let weak = Rc::downgrade(self);
        let handle = self.scheduler.timeout(
            delay,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.activate(index);
                }
            }),
        );
        // Replaces (cancels) the activation of any slide selected before this one
        self.inner.borrow_mut().activation.arm(handle);
    }

    fn activate(&self, index: usize) {
        let current = {
            let mut inner = self.inner.borrow_mut();
            let _fired = inner.activation.take();
            inner.state.current()
        };
        if current == index {
            self.view.show(index, Some(index));
        } else {
            log::trace!("stale slide activation for {} (now {})", index, current);
        }
    }

    fn step(self: &Rc<Self>, key: NavKey) {
        let index = {
            let inner = self.inner.borrow();
            match key {
                NavKey::Next => inner.state.next_index(),
                NavKey::Prev => inner.state.prev_index(),
            }
        };
        self.go_to(index);
    }

    fn start_auto_advance(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let handle = self.scheduler.interval(
            self.timing.advance_period(),
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.step(NavKey::Next);
                }
            }),
        );
        self.inner.borrow_mut().auto_advance.arm(handle);
    }
}

/// Carousel controller.
///
/// Owns its slides and timers; dropping it cancels every pending timer.
pub struct Carousel<S, T: Scheduler> {
    slides: Vec<S>,
    shared: Rc<Shared<T>>,
}

impl<S, T: Scheduler> Carousel<S, T> {
    /// Show the first slide and start auto-advancing
    pub fn new(
        slides: Vec<S>,
        scheduler: T,
        timing: CarouselTiming,
        view: impl CarouselView + 'static,
    ) -> Result<Self> {
        let state = CarouselState::new(slides.len())?;
        let shared = Rc::new(Shared {
            scheduler,
            timing,
            view: Box::new(view),
            inner: RefCell::new(Inner {
                state,
                auto_advance: TimerSlot::new(),
                activation: TimerSlot::new(),
            }),
        });

        shared.view.show(0, Some(0));
        shared.start_auto_advance();
        log::debug!("Carousel initialized with {} slides", slides.len());

        Ok(Self { slides, shared })
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.shared.inner.borrow().state.len()
    }

    pub fn current(&self) -> usize {
        self.shared.inner.borrow().state.current()
    }

    pub fn is_running(&self) -> bool {
        self.shared.inner.borrow().auto_advance.is_armed()
    }

    /// Jump to a slide. Leaves the auto-advance timer untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn go_to(&self, index: usize) {
        self.shared.go_to(index);
    }

    pub fn next(&self) {
        self.shared.step(NavKey::Next);
    }

    pub fn prev(&self) {
        self.shared.step(NavKey::Prev);
    }

    pub fn handle_key(&self, key: NavKey) {
        self.shared.step(key);
    }

    /// Stop auto-advancing. Safe to call when already paused.
    pub fn pause(&self) {
        if self.shared.inner.borrow_mut().auto_advance.disarm() {
            log::debug!("Carousel paused");
        }
    }

    /// Restart auto-advancing, replacing any running timer
    pub fn resume(&self) {
        self.shared.start_auto_advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use std::time::Duration;

    type Frame = (usize, Option<usize>);

    #[derive(Clone, Default)]
    struct Recorder {
        frames: Rc<RefCell<Vec<Frame>>>,
    }

    impl Recorder {
        fn last(&self) -> Frame {
            *self.frames.borrow().last().expect("at least one frame")
        }
    }

    impl CarouselView for Recorder {
        fn show(&self, dot: usize, slide: Option<usize>) {
            self.frames.borrow_mut().push((dot, slide));
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn carousel(len: usize) -> (Carousel<usize, ManualScheduler>, ManualScheduler, Recorder) {
        let scheduler = ManualScheduler::new();
        let recorder = Recorder::default();
        let carousel = Carousel::new(
            (0..len).collect(),
            scheduler.clone(),
            CarouselTiming::default(),
            recorder.clone(),
        )
        .unwrap();
        (carousel, scheduler, recorder)
    }

    // ============================================================================
    // Index arithmetic
    // ============================================================================

    #[test]
    fn test_state_rejects_empty() {
        assert!(matches!(CarouselState::new(0), Err(SiteError::EmptyCarousel)));
    }

    #[test]
    fn test_state_wraps_both_ways() {
        let mut state = CarouselState::new(3).unwrap();
        assert_eq!(state.prev_index(), 2);
        state.set(2);
        assert_eq!(state.next_index(), 0);
    }

    #[test]
    fn test_single_slide_wraps_to_itself() {
        let state = CarouselState::new(1).unwrap();
        assert_eq!(state.len(), 1);
        assert_eq!(state.next_index(), 0);
        assert_eq!(state.prev_index(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut state = CarouselState::new(4).unwrap();
        state.set(4);
    }

    #[test]
    fn test_nav_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Prev));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowUp"), None);
        assert_eq!(NavKey::from_key("Enter"), None);
    }

    // ============================================================================
    // Controller
    // ============================================================================

    #[test]
    fn test_new_rejects_empty_slides() {
        let result = Carousel::<u8, _>::new(
            vec![],
            ManualScheduler::new(),
            CarouselTiming::default(),
            Recorder::default(),
        );
        assert!(matches!(result, Err(SiteError::EmptyCarousel)));
    }

    #[test]
    fn test_initial_state() {
        let (carousel, scheduler, recorder) = carousel(4);
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.len(), 4);
        assert_eq!(carousel.slides(), &[0, 1, 2, 3]);
        assert_eq!(recorder.last(), (0, Some(0)));
        assert!(carousel.is_running());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_activation_is_deferred() {
        let (carousel, scheduler, recorder) = carousel(4);
        carousel.go_to(2);
        assert_eq!(carousel.current(), 2);
        assert_eq!(recorder.last(), (2, None));

        scheduler.advance(ms(99));
        assert_eq!(recorder.last(), (2, None));
        scheduler.advance(ms(1));
        assert_eq!(recorder.last(), (2, Some(2)));
    }

    #[test]
    fn test_rapid_navigation_activates_latest_only() {
        let (carousel, scheduler, recorder) = carousel(4);
        carousel.next();
        scheduler.advance(ms(50));
        carousel.next();
        scheduler.advance(ms(200));

        let frames = recorder.frames.borrow();
        assert!(!frames.contains(&(1, Some(1))), "superseded slide was activated");
        assert_eq!(*frames.last().unwrap(), (2, Some(2)));
    }

    #[test]
    fn test_zero_delay_activates_immediately() {
        let scheduler = ManualScheduler::new();
        let recorder = Recorder::default();
        let timing = CarouselTiming {
            activation_delay_ms: 0,
            ..CarouselTiming::default()
        };
        let carousel = Carousel::new(vec!['a', 'b'], scheduler, timing, recorder.clone()).unwrap();

        carousel.next();
        assert_eq!(recorder.last(), (1, Some(1)));
    }

    #[test]
    fn test_auto_advance_every_period() {
        let (carousel, scheduler, recorder) = carousel(3);
        scheduler.advance(ms(4999));
        assert_eq!(carousel.current(), 0);
        scheduler.advance(ms(1));
        assert_eq!(carousel.current(), 1);
        scheduler.advance(ms(5000));
        assert_eq!(carousel.current(), 2);
        scheduler.advance(ms(5000));
        assert_eq!(carousel.current(), 0);
        scheduler.advance(ms(100));
        assert_eq!(recorder.last(), (0, Some(0)));
    }

    #[test]
    fn test_go_to_keeps_timer_phase() {
        let (carousel, scheduler, _recorder) = carousel(4);
        scheduler.advance(ms(3000));
        carousel.go_to(2);
        scheduler.advance(ms(2000));
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let (carousel, scheduler, _recorder) = carousel(4);
        carousel.pause();
        carousel.pause();
        carousel.pause();
        assert!(!carousel.is_running());

        scheduler.advance(ms(20_000));
        assert_eq!(carousel.current(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_resume_never_doubles_timer() {
        let (carousel, scheduler, _recorder) = carousel(5);
        carousel.pause();
        carousel.resume();
        carousel.resume();
        assert!(carousel.is_running());

        scheduler.advance(ms(5000));
        assert_eq!(carousel.current(), 1);
        scheduler.advance(ms(5000));
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_manual_navigation_while_paused() {
        let (carousel, scheduler, recorder) = carousel(3);
        carousel.pause();
        carousel.prev();
        scheduler.advance(ms(100));
        assert_eq!(carousel.current(), 2);
        assert_eq!(recorder.last(), (2, Some(2)));
    }

    #[test]
    fn test_handle_key_steps() {
        let (carousel, _scheduler, _recorder) = carousel(3);
        carousel.handle_key(NavKey::Prev);
        assert_eq!(carousel.current(), 2);
        carousel.handle_key(NavKey::Next);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_drop_cancels_timers() {
        let (carousel, scheduler, _recorder) = carousel(3);
        carousel.next();
        assert_eq!(scheduler.pending(), 2);
        drop(carousel);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(ms(10_000));
    }
}
