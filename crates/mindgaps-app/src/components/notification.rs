// crates/mindgaps-app/src/components/notification.rs
// Page-wide notification slot and its renderer

use std::time::Duration;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use mindgaps_core::{Notification, NotificationView, Notifier};

use crate::scheduler::BrowserScheduler;

/// The single notifier shared by every component on the page
pub type SiteNotifier = StoredValue<Notifier<BrowserScheduler>, LocalStorage>;

struct SignalScreen(WriteSignal<Option<Notification>>);

impl NotificationView for SignalScreen {
    fn show(&self, notification: Option<&Notification>) {
        self.0.set(notification.cloned());
    }
}

/// Create the notifier and put it in context. Returns what to render.
pub fn provide_notifier(ttl: Duration) -> ReadSignal<Option<Notification>> {
    let (current, set_current) = signal(None::<Notification>);
    let notifier = Notifier::new(BrowserScheduler, ttl, SignalScreen(set_current));
    provide_context::<SiteNotifier>(StoredValue::new_local(notifier));
    current
}

pub fn use_notifier() -> SiteNotifier {
    expect_context::<SiteNotifier>()
}

#[component]
pub fn NotificationHost(current: ReadSignal<Option<Notification>>) -> impl IntoView {
    let notifier = use_notifier();

    view! {
        {move || current.get().map(|notification| {
            let id = notification.id;
            view! {
                <div
                    class=format!("notification {}", notification.kind.css_class())
                    role="status"
                >
                    <span class="notification-message">{notification.message}</span>
                    <button
                        class="notification-close"
                        aria-label="Close notification"
                        on:click=move |_| {
                            notifier.with_value(|n| n.dismiss(id));
                        }
                    >
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
