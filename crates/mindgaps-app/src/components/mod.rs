// crates/mindgaps-app/src/components/mod.rs
// Page components

mod cards;
mod contact;
mod nav;
mod notification;
mod reveal;
mod testimonials;

pub use cards::{ServiceCard, VideoPlaceholder};
pub use contact::ContactSection;
pub use nav::{AnchorLink, Navbar};
pub use notification::{NotificationHost, provide_notifier};
pub use reveal::{LazyImage, use_reveal};
pub use testimonials::Testimonials;
