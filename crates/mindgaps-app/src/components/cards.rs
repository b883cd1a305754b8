// crates/mindgaps-app/src/components/cards.rs
// Service cards and video testimonial placeholders

use leptos::html;
use leptos::prelude::*;
use mindgaps_core::NotificationKind;
use mindgaps_core::effects::{Hover, REVEAL_TRANSITION, RevealStyle, card_transform};

use super::notification::use_notifier;
use super::reveal::use_reveal;
use crate::content::{Service, VIDEO_SOON_MESSAGE};

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card);
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            class="service-card"
            node_ref=card
            style:opacity=move || RevealStyle::for_state(revealed.get()).opacity
            style:transform=move || card_transform(revealed.get(), hovered.get())
            style:transition=REVEAL_TRANSITION
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
        </div>
    }
}

#[component]
pub fn VideoPlaceholder(title: &'static str) -> impl IntoView {
    let notifier = use_notifier();
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            class="video-placeholder"
            role="button"
            tabindex="0"
            style:transform=move || Hover::VideoPlaceholder.transform(hovered.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:click=move |_| {
                notifier.with_value(|n| n.notify(VIDEO_SOON_MESSAGE, NotificationKind::Info));
            }
        >
            <div class="play-button">"▶"</div>
            <p>{title}</p>
        </div>
    }
}
