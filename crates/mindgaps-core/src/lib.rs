// crates/mindgaps-core/src/lib.rs
// Site behavior for BridgingMindGaps (native + WASM compatible)
// No browser-only dependencies allowed here

pub mod carousel;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod nav;
pub mod notification;
pub mod timer;

pub use carousel::{Carousel, CarouselState, CarouselView, NavKey};
pub use config::SiteConfig;
pub use contact::{ContactForm, ContactFormView, ContactSubmitter, SubmitOutcome, ValidationError};
pub use error::{Result, SiteError};
pub use notification::{Notification, NotificationId, NotificationKind, NotificationView, Notifier};
pub use timer::{ManualScheduler, Scheduler, TimerSlot};
