// crates/mindgaps-core/src/effects.rs
// Scroll-reveal and hover styling rules

pub const REVEAL_TRANSITION: &str = "all 0.6s ease-out";

/// Inline styles of a scroll-reveal target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: "0",
        transform: "translateY(20px)",
    };

    pub const SHOWN: RevealStyle = RevealStyle {
        opacity: "1",
        transform: "translateY(0)",
    };

    pub fn for_state(revealed: bool) -> Self {
        if revealed { Self::SHOWN } else { Self::HIDDEN }
    }
}

/// Elements that react to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    ServiceCard,
    VideoPlaceholder,
}

impl Hover {
    pub fn transform(self, hovered: bool) -> &'static str {
        match (self, hovered) {
            (Hover::ServiceCard, true) => "translateY(-10px) scale(1.02)",
            (Hover::ServiceCard, false) => "translateY(0) scale(1)",
            (Hover::VideoPlaceholder, true) => "scale(1.05)",
            (Hover::VideoPlaceholder, false) => "scale(1)",
        }
    }
}

/// Transform of a service card, which both reveals on scroll and lifts on hover.
///
/// Hover only applies once the card is revealed.
pub fn card_transform(revealed: bool, hovered: bool) -> &'static str {
    if revealed {
        Hover::ServiceCard.transform(hovered)
    } else {
        RevealStyle::HIDDEN.transform
    }
}

/// Class string for a form field group
pub fn field_group_class(focused: bool, filled: bool) -> String {
    let mut class = String::from("form-group");
    if focused {
        class.push_str(" focused");
    }
    if filled {
        class.push_str(" filled");
    }
    class
}

/// Text of the contact form's submit button
pub fn submit_label(sending: bool) -> &'static str {
    if sending { "Sending..." } else { "Send Message" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_styles() {
        assert_eq!(RevealStyle::for_state(false), RevealStyle::HIDDEN);
        assert_eq!(RevealStyle::for_state(true).opacity, "1");
        assert_eq!(RevealStyle::for_state(true).transform, "translateY(0)");
    }

    #[test]
    fn test_hover_transforms() {
        assert_eq!(Hover::VideoPlaceholder.transform(true), "scale(1.05)");
        assert_eq!(Hover::VideoPlaceholder.transform(false), "scale(1)");
        assert_eq!(Hover::ServiceCard.transform(true), "translateY(-10px) scale(1.02)");
    }

    #[test]
    fn test_card_transform_waits_for_reveal() {
        assert_eq!(card_transform(false, true), "translateY(20px)");
        assert_eq!(card_transform(true, true), "translateY(-10px) scale(1.02)");
        assert_eq!(card_transform(true, false), "translateY(0) scale(1)");
    }

    #[test]
    fn test_field_group_class() {
        assert_eq!(field_group_class(false, false), "form-group");
        assert_eq!(field_group_class(true, false), "form-group focused");
        assert_eq!(field_group_class(false, true), "form-group filled");
        assert_eq!(field_group_class(true, true), "form-group focused filled");
    }

    #[test]
    fn test_submit_label_follows_sending() {
        assert_eq!(submit_label(true), "Sending...");
        assert_eq!(submit_label(false), "Send Message");
    }
}
