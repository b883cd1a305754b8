// crates/mindgaps-app/src/pages/home.rs
// Single-page landing: hero, services, about, testimonials, contact

use leptos::html;
use leptos::prelude::*;
use mindgaps_core::effects::{REVEAL_TRANSITION, RevealStyle};

use crate::components::{
    AnchorLink, ContactSection, LazyImage, Navbar, ServiceCard, Testimonials, VideoPlaceholder,
    use_reveal,
};
use crate::content::{ABOUT_IMAGE, SECTIONS, SERVICES, TESTIMONIALS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar sections=SECTIONS/>
        <main>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">"Bridging the gaps that hold you back"</h1>
                    <p class="hero-subtitle">
                        "Compassionate, practical support for individuals, couples and families."
                    </p>
                    <div class="hero-buttons">
                        <AnchorLink target="contact" class="btn btn-primary">"Book a Session"</AnchorLink>
                        <AnchorLink target="services" class="btn btn-secondary">"Explore Services"</AnchorLink>
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2 class="section-title">"How I Can Help"</h2>
                    <div class="services-grid">
                        {SERVICES
                            .iter()
                            .map(|&service| view! { <ServiceCard service=service/> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <About/>

            <section id="testimonials" class="testimonials">
                <div class="container">
                    <h2 class="section-title">"Client Stories"</h2>
                    <Testimonials testimonials=TESTIMONIALS.to_vec()/>
                    <div class="video-testimonials">
                        <VideoPlaceholder title="Watch Amira's story"/>
                        <VideoPlaceholder title="Watch Dan & Priya's story"/>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <ContactSection/>
                </div>
            </section>
        </main>
        <footer class="footer">
            <p>"© BridgingMindGaps. All rights reserved."</p>
        </footer>
    }
}

#[component]
fn About() -> impl IntoView {
    let content = NodeRef::<html::Div>::new();
    let revealed = use_reveal(content);

    view! {
        <section id="about" class="about">
            <div class="container">
                <div
                    class="about-content"
                    node_ref=content
                    style:opacity=move || RevealStyle::for_state(revealed.get()).opacity
                    style:transform=move || RevealStyle::for_state(revealed.get()).transform
                    style:transition=REVEAL_TRANSITION
                >
                    <div class="about-image">
                        <LazyImage src=ABOUT_IMAGE alt="Portrait of the practitioner"/>
                    </div>
                    <div class="about-text">
                        <h2 class="section-title">"About Me"</h2>
                        <p>
                            "I help people make sense of what they are carrying and find a way "
                            "forward that fits their life. Sessions are warm, confidential and "
                            "grounded in evidence-based practice."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
