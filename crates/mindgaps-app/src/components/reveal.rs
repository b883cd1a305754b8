// crates/mindgaps-app/src/components/reveal.rs
// Scroll-triggered reveal and lazy image loading

use leptos::html;
use leptos::prelude::*;
use mindgaps_core::SiteConfig;
use web_sys::IntersectionObserverInit;

use crate::dom::{observe_once, reveal_options};

/// Track whether `target` has scrolled into view.
///
/// Falls back to revealed right away when no observer can be created.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let config = expect_context::<SiteConfig>().reveal;

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        let options = reveal_options(&config);
        if let Err(e) = observe_once(&element, &options, move || set_revealed.set(true)) {
            log::warn!("Reveal observer unavailable: {}", e);
            set_revealed.set(true);
        }
    });

    revealed
}

#[component]
pub fn LazyImage(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let image = NodeRef::<html::Img>::new();
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        let Some(element) = image.get() else {
            return;
        };
        let options = IntersectionObserverInit::new();
        if let Err(e) = observe_once(&element, &options, move || set_loaded.set(true)) {
            log::debug!("Lazy loading unavailable, loading {} now: {}", src, e);
            set_loaded.set(true);
        }
    });

    view! {
        <img
            node_ref=image
            class=class
            class:lazy=move || !loaded.get()
            data-src=src
            src=move || loaded.get().then_some(src)
            alt=alt
        />
    }
}
