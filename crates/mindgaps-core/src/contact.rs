// crates/mindgaps-core/src/contact.rs
// Contact form validation and simulated submission

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notification::{NotificationKind, Notifier};
use crate::timer::{Scheduler, TimerSlot};

/// `\s` plus U+FEFF, which browsers also treat as whitespace in patterns
pub const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

pub const SENT_MESSAGE: &str =
    "Thank you! Your message has been sent. I will get back to you within 24 hours.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Field values of the contact form, named as the form posts them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(rename = "session-type")]
    pub session_type: String,
    pub message: String,
}

/// Why a submission was rejected. The display text is shown to the visitor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.email, &self.session_type, &self.message];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Form controls the submitter drives
pub trait ContactFormView {
    /// Disable the submit control and show the busy label, or restore it
    fn set_sending(&self, sending: bool);

    /// Clear every field
    fn reset(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sending,
    /// A submission is already in flight; nothing changed
    AlreadySending,
}

struct Shared<T: Scheduler> {
    scheduler: T,
    notifier: Notifier<T>,
    latency: Duration,
    view: Box<dyn ContactFormView>,
    pending: RefCell<TimerSlot<T::Handle>>,
}

impl<T: Scheduler> Shared<T> {
    fn complete(&self) {
        let finished = self.pending.borrow_mut().take();
        drop(finished);

        self.notifier.notify(SENT_MESSAGE, NotificationKind::Success);
        self.view.reset();
        self.view.set_sending(false);
        log::info!("Contact form submitted");
    }
}

/// Validates the form and simulates sending it
pub struct ContactSubmitter<T: Scheduler> {
    shared: Rc<Shared<T>>,
}

impl<T: Scheduler> ContactSubmitter<T> {
    pub fn new(
        scheduler: T,
        notifier: Notifier<T>,
        latency: Duration,
        view: impl ContactFormView + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                notifier,
                latency,
                view: Box::new(view),
                pending: RefCell::new(TimerSlot::new()),
            }),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.shared.pending.borrow().is_armed()
    }

    /// Handle a submit event.
    ///
    /// Invalid input raises an error notification and leaves the form as is.
    pub fn submit(&self, form: &ContactForm) -> Result<SubmitOutcome, ValidationError> {
        if self.is_sending() {
            log::debug!("Submit ignored: previous submission still in flight");
            return Ok(SubmitOutcome::AlreadySending);
        }

        if let Err(e) = form.validate() {
            log::debug!("Contact form rejected: {:?}", e);
            self.shared.notifier.notify(e.to_string(), NotificationKind::Error);
            return Err(e);
        }

        self.shared.view.set_sending(true);

        let weak = Rc::downgrade(&self.shared);
        let handle = self.shared.scheduler.timeout(
            self.shared.latency,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.complete();
                }
            }),
        );
        self.shared.pending.borrow_mut().arm(handle);
        Ok(SubmitOutcome::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Notification, NotificationView};
    use crate::timer::ManualScheduler;
    use std::cell::Cell;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            session_type: "individual".to_string(),
            message: "I'd like to book a first session.".to_string(),
        }
    }

    // ============================================================================
    // Validation
    // ============================================================================

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_each_required_field() {
        let blanks: [fn(&mut ContactForm); 4] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.session_type.clear(),
            |f| f.message.clear(),
        ];
        for blank in blanks {
            let mut form = valid_form();
            blank(&mut form);
            assert_eq!(form.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_missing_fields_reported_before_bad_email() {
        let form = ContactForm {
            email: "bad".to_string(),
            message: String::new(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("no-at.example.com"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spa ce@example.com"));
        assert!(!is_valid_email("a\u{feff}b@example.com"));
        assert!(!is_valid_email("ab@exa\u{feff}mple.com"));
        assert!(!is_valid_email("ab@example.c\u{feff}om"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_form_field_names() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert_eq!(json["session-type"], "individual");
    }

    // ============================================================================
    // Submission
    // ============================================================================

    #[derive(Clone, Default)]
    struct FormProbe {
        sending: Rc<Cell<bool>>,
        resets: Rc<Cell<u32>>,
    }

    impl ContactFormView for FormProbe {
        fn set_sending(&self, sending: bool) {
            self.sending.set(sending);
        }

        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[derive(Clone, Default)]
    struct Screen(Rc<RefCell<Option<Notification>>>);

    impl NotificationView for Screen {
        fn show(&self, notification: Option<&Notification>) {
            *self.0.borrow_mut() = notification.cloned();
        }
    }

    fn submitter() -> (ContactSubmitter<ManualScheduler>, ManualScheduler, FormProbe, Screen) {
        let scheduler = ManualScheduler::new();
        let screen = Screen::default();
        let notifier = Notifier::new(scheduler.clone(), Duration::from_millis(5000), screen.clone());
        let probe = FormProbe::default();
        let submitter = ContactSubmitter::new(
            scheduler.clone(),
            notifier,
            Duration::from_millis(2000),
            probe.clone(),
        );
        (submitter, scheduler, probe, screen)
    }

    #[test]
    fn test_submit_in_flight_is_ignored() {
        let (submitter, scheduler, probe, _screen) = submitter();
        assert_eq!(submitter.submit(&valid_form()), Ok(SubmitOutcome::Sending));
        assert_eq!(submitter.submit(&valid_form()), Ok(SubmitOutcome::AlreadySending));

        scheduler.advance(Duration::from_millis(2000));
        assert_eq!(probe.resets.get(), 1);
        assert!(!submitter.is_sending());
    }

    #[test]
    fn test_can_submit_again_after_completion() {
        let (submitter, scheduler, probe, _screen) = submitter();
        submitter.submit(&valid_form()).unwrap();
        scheduler.advance(Duration::from_millis(2000));
        assert_eq!(submitter.submit(&valid_form()), Ok(SubmitOutcome::Sending));
        assert!(probe.sending.get());
    }

    #[test]
    fn test_missing_field_notifies_error() {
        let (submitter, _scheduler, probe, screen) = submitter();
        let form = ContactForm {
            name: String::new(),
            ..valid_form()
        };
        assert_eq!(submitter.submit(&form), Err(ValidationError::MissingFields));

        let shown = screen.0.borrow().clone().unwrap();
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.message, "Please fill in all required fields.");
        assert!(!probe.sending.get());
    }
}
