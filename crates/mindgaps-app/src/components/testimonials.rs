// crates/mindgaps-app/src/components/testimonials.rs
// Testimonial carousel bound to the DOM

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use mindgaps_core::effects::{REVEAL_TRANSITION, RevealStyle};
use mindgaps_core::{Carousel, CarouselView, NavKey, SiteConfig};

use super::reveal::use_reveal;
use crate::content::Testimonial;
use crate::scheduler::BrowserScheduler;

struct SignalStrip {
    dot: WriteSignal<usize>,
    slide: WriteSignal<Option<usize>>,
}

impl CarouselView for SignalStrip {
    fn show(&self, dot: usize, slide: Option<usize>) {
        self.dot.set(dot);
        self.slide.set(slide);
    }
}

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    let timing = expect_context::<SiteConfig>().carousel;
    let (dot, set_dot) = signal(0usize);
    let (slide, set_slide) = signal(Some(0usize));
    let strip = SignalStrip {
        dot: set_dot,
        slide: set_slide,
    };

    let carousel = match Carousel::new(testimonials, BrowserScheduler, timing, strip) {
        Ok(carousel) => StoredValue::new_local(carousel),
        Err(e) => {
            log::error!("Testimonial carousel disabled: {}", e);
            return ().into_any();
        }
    };

    // Arrow keys drive the carousel wherever focus is
    let _keys = window_event_listener(ev::keydown, move |ev| {
        if let Some(key) = NavKey::from_key(&ev.key()) {
            carousel.with_value(|c| c.handle_key(key));
        }
    });

    let (slides, count) = carousel.with_value(|c| (c.slides().to_vec(), c.len()));

    let cards = slides
        .into_iter()
        .enumerate()
        .map(|(index, testimonial)| {
            view! {
                <TestimonialCard
                    testimonial=testimonial
                    active=Signal::derive(move || slide.get() == Some(index))
                />
            }
        })
        .collect_view();

    let dots = (0..count)
        .map(|index| {
            view! {
                <span
                    class="dot"
                    class:active=move || dot.get() == index
                    on:click=move |_| carousel.with_value(|c| c.go_to(index))
                ></span>
            }
        })
        .collect_view();

    view! {
        <div class="testimonials-wrapper">
            <div
                class="testimonial-carousel"
                id="testimonialCarousel"
                on:mouseenter=move |_| carousel.with_value(|c| c.pause())
                on:mouseleave=move |_| carousel.with_value(|c| c.resume())
            >
                {cards}
            </div>
            <div class="carousel-controls">
                <button
                    class="carousel-btn"
                    id="prevBtn"
                    aria-label="Previous testimonial"
                    on:click=move |_| carousel.with_value(|c| c.prev())
                >
                    "‹"
                </button>
                <div class="carousel-dots" id="carouselDots">
                    {dots}
                </div>
                <button
                    class="carousel-btn"
                    id="nextBtn"
                    aria-label="Next testimonial"
                    on:click=move |_| carousel.with_value(|c| c.next())
                >
                    "›"
                </button>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn TestimonialCard(testimonial: Testimonial, active: Signal<bool>) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card);

    view! {
        <div
            class="testimonial-card"
            class:active=move || active.get()
            node_ref=card
            style:opacity=move || RevealStyle::for_state(revealed.get()).opacity
            style:transform=move || RevealStyle::for_state(revealed.get()).transform
            style:transition=REVEAL_TRANSITION
        >
            <div class="testimonial-content">
                <p class="testimonial-text">{testimonial.quote}</p>
            </div>
            <div class="testimonial-author">
                <strong>{testimonial.author}</strong>
                <span>{testimonial.context}</span>
            </div>
        </div>
    }
}
