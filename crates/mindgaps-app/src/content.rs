// crates/mindgaps-app/src/content.rs
// Static page copy

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "services", label: "Services" },
    Section { id: "about", label: "About" },
    Section { id: "testimonials", label: "Testimonials" },
    Section { id: "contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌱",
        title: "Individual Sessions",
        description: "One-to-one support for anxiety, stress, low mood and life transitions, at a pace that suits you.",
    },
    Service {
        icon: "🤝",
        title: "Couples Sessions",
        description: "A calm space to rebuild communication, work through conflict and reconnect.",
    },
    Service {
        icon: "🏡",
        title: "Family Sessions",
        description: "Help for families navigating change, closing the gaps between generations and perspectives.",
    },
    Service {
        icon: "💻",
        title: "Online Sessions",
        description: "The same care from wherever you are, over a secure video call.",
    },
];

/// One carousel slide
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub context: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I finally feel heard. Every session left me with something practical to take home.",
        author: "Amira K.",
        context: "Individual sessions",
    },
    Testimonial {
        quote: "We came in barely talking. Six months later we actually look forward to our evenings together.",
        author: "Dan & Priya",
        context: "Couples sessions",
    },
    Testimonial {
        quote: "Patient, warm and never judgmental. Our whole family benefited.",
        author: "The Okafor family",
        context: "Family sessions",
    },
    Testimonial {
        quote: "Online sessions fit around my shifts, and they feel just as personal as meeting in person.",
        author: "Chris L.",
        context: "Online sessions",
    },
];

/// `(value, label)` options of the session-type select
pub const SESSION_TYPES: &[(&str, &str)] = &[
    ("individual", "Individual Session"),
    ("couples", "Couples Session"),
    ("family", "Family Session"),
    ("online", "Online Session"),
];

pub const ABOUT_IMAGE: &str = "https://imagizer.imageshack.com/img922/9554/MMjUt8.jpg";

pub const VIDEO_SOON_MESSAGE: &str =
    "Video testimonials will be available soon. Thank you for your interest!";
