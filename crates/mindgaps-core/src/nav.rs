// crates/mindgaps-core/src/nav.rs
// Navbar rules: scrolled styling, active section, anchor offsets, mobile menu

/// Vertical extent of a page section, in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// Whether the navbar should switch to its compact scrolled style
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Id of the section the viewport is in, if any.
///
/// Each section is considered entered `offset` pixels before its top edge.
/// When ranges overlap, the last section in document order wins.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &[SectionBounds<'a>],
    offset: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id)
}

/// Scroll position that leaves `offset` pixels between the fixed navbar
/// and the anchor target
pub fn anchor_scroll_top(target_top: f64, offset: f64) -> f64 {
    target_top - offset
}

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
