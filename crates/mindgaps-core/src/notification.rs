// crates/mindgaps-core/src/notification.rs
// Transient, self-expiring notification widget (one visible at a time)

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timer::{Scheduler, TimerSlot};

/// Visual intent of a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Modifier class applied next to the base `notification` class
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

/// Identifies one shown notification so stale timers and close clicks can
/// tell whether their target is still on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

/// Render target; `None` removes the element
pub trait NotificationView {
    fn show(&self, notification: Option<&Notification>);
}

struct Live<H> {
    notification: Notification,
    expiry: TimerSlot<H>,
}

struct Inner<H> {
    current: Option<Live<H>>,
    next_id: u64,
}

struct Shared<T: Scheduler> {
    scheduler: T,
    ttl: Duration,
    view: Box<dyn NotificationView>,
    inner: RefCell<Inner<T::Handle>>,
}

impl<T: Scheduler> Shared<T> {
    /// Remove `id` if it is still the one on screen
    fn remove(&self, id: NotificationId) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let on_screen = inner
                .current
                .as_ref()
                .is_some_and(|live| live.notification.id == id);
            if on_screen { inner.current.take() } else { None }
        };
        // The expiry handle drops here, after the borrow is released
        match removed {
            Some(_) => {
                self.view.show(None);
                true
            }
            None => false,
        }
    }
}

/// Shared handle to the page's single notification slot.
///
/// Clones refer to the same slot.
pub struct Notifier<T: Scheduler> {
    shared: Rc<Shared<T>>,
}

impl<T: Scheduler> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Scheduler> Notifier<T> {
    pub fn new(scheduler: T, ttl: Duration, view: impl NotificationView + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                ttl,
                view: Box::new(view),
                inner: RefCell::new(Inner {
                    current: None,
                    next_id: 0,
                }),
            }),
        }
    }

    /// Show `message`, evicting whatever notification is currently visible
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let (evicted, notification) = {
            let mut inner = self.shared.inner.borrow_mut();
            let evicted = inner.current.take();
            let id = NotificationId(inner.next_id);
            inner.next_id += 1;
            let notification = Notification {
                id,
                message: message.into(),
                kind,
            };
            inner.current = Some(Live {
                notification: notification.clone(),
                expiry: TimerSlot::new(),
            });
            (evicted, notification)
        };
        if let Some(old) = evicted {
            log::debug!("Notification {} superseded by {}", old.notification.id, notification.id);
        }

        let id = notification.id;
        self.shared.view.show(Some(&notification));

        let weak = Rc::downgrade(&self.shared);
        let expiry = self.shared.scheduler.timeout(
            self.shared.ttl,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    if !shared.remove(id) {
                        log::trace!("Notification {} already gone at expiry", id);
                    }
                }
            }),
        );

        let mut inner = self.shared.inner.borrow_mut();
        if let Some(live) = inner.current.as_mut().filter(|l| l.notification.id == id) {
            live.expiry.arm(expiry);
        }
        id
    }

    /// Manual close. Returns false when `id` is no longer on screen.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.shared.remove(id)
    }

    pub fn current(&self) -> Option<Notification> {
        self.shared
            .inner
            .borrow()
            .current
            .as_ref()
            .map(|live| live.notification.clone())
    }
}
