//! Test utilities for site behavior integration tests
//!
//! Provides a `TestSite` that wires the controllers to a virtual clock and
//! recording views instead of a browser.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use mindgaps_core::config::SiteConfig;
use mindgaps_core::effects::submit_label;
use mindgaps_core::{
    Carousel, CarouselView, ContactFormView, ContactSubmitter, ManualScheduler, Notification,
    NotificationView, Notifier,
};

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Per-index `active` flags of the dots and slides, as the page's class
/// bindings would set them
#[derive(Clone)]
pub struct SlideStrip {
    pub dots: Rc<RefCell<Vec<bool>>>,
    pub slides: Rc<RefCell<Vec<bool>>>,
    pub frames: Rc<Cell<usize>>,
}

impl SlideStrip {
    pub fn new(len: usize) -> Self {
        Self {
            dots: Rc::new(RefCell::new(vec![false; len])),
            slides: Rc::new(RefCell::new(vec![false; len])),
            frames: Rc::new(Cell::new(0)),
        }
    }

    /// Number of dots and slides marked active
    pub fn active_counts(&self) -> (usize, usize) {
        let count = |flags: &RefCell<Vec<bool>>| flags.borrow().iter().filter(|&&on| on).count();
        (count(&self.dots), count(&self.slides))
    }

    pub fn active_dot(&self) -> Option<usize> {
        self.dots.borrow().iter().position(|&on| on)
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.borrow().iter().position(|&on| on)
    }
}

impl CarouselView for SlideStrip {
    fn show(&self, dot: usize, slide: Option<usize>) {
        for (index, on) in self.dots.borrow_mut().iter_mut().enumerate() {
            *on = index == dot;
        }
        for (index, on) in self.slides.borrow_mut().iter_mut().enumerate() {
            *on = slide == Some(index);
        }
        self.frames.set(self.frames.get() + 1);
    }
}

/// Records what the notification host currently displays
#[derive(Clone, Default)]
pub struct NotificationHost {
    pub visible: Rc<RefCell<Vec<Notification>>>,
    pub removals: Rc<Cell<u32>>,
}

impl NotificationHost {
    pub fn messages(&self) -> Vec<String> {
        self.visible.borrow().iter().map(|n| n.message.clone()).collect()
    }
}

impl NotificationView for NotificationHost {
    fn show(&self, notification: Option<&Notification>) {
        let mut visible = self.visible.borrow_mut();
        visible.clear();
        match notification {
            Some(n) => visible.push(n.clone()),
            None => self.removals.set(self.removals.get() + 1),
        }
    }
}

/// Records the submit button and field state of the contact form
#[derive(Clone, Default)]
pub struct FormControls {
    pub disabled: Rc<Cell<bool>>,
    pub busy_entered: Rc<Cell<bool>>,
    pub cleared: Rc<Cell<bool>>,
}

impl FormControls {
    /// Submit button text as the page renders it
    pub fn label(&self) -> &'static str {
        submit_label(self.disabled.get())
    }
}

impl ContactFormView for FormControls {
    fn set_sending(&self, sending: bool) {
        self.disabled.set(sending);
        if sending {
            self.busy_entered.set(true);
        }
    }

    fn reset(&self) {
        self.cleared.set(true);
    }
}

/// Every controller of the page, driven by one virtual clock
pub struct TestSite {
    pub scheduler: ManualScheduler,
    pub config: SiteConfig,
    pub notifier: Notifier<ManualScheduler>,
    pub host: NotificationHost,
}

impl TestSite {
    pub fn new() -> Self {
        let scheduler = ManualScheduler::new();
        let config = SiteConfig::default();
        let host = NotificationHost::default();
        let notifier = Notifier::new(scheduler.clone(), config.notification.ttl(), host.clone());
        Self {
            scheduler,
            config,
            notifier,
            host,
        }
    }

    pub fn carousel(&self, slides: usize) -> (Carousel<usize, ManualScheduler>, SlideStrip) {
        let strip = SlideStrip::new(slides);
        let carousel = Carousel::new(
            (0..slides).collect(),
            self.scheduler.clone(),
            self.config.carousel,
            strip.clone(),
        )
        .expect("non-empty carousel");
        (carousel, strip)
    }

    pub fn contact(&self) -> (ContactSubmitter<ManualScheduler>, FormControls) {
        let controls = FormControls::default();
        let submitter = ContactSubmitter::new(
            self.scheduler.clone(),
            self.notifier.clone(),
            self.config.contact.submit_latency(),
            controls.clone(),
        );
        (submitter, controls)
    }

    pub fn advance(&self, by: Duration) {
        self.scheduler.advance(by);
    }
}
