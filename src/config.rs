/// Pixel offsets used by the scroll tracker and navigator.
///
/// Provided to the page through Leptos context so the values live in one
/// place instead of being repeated at every call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Height of the fixed navigation bar.
    pub navbar_height: f64,
    /// Extra distance below the navbar at which a section counts as reached.
    pub detection_margin: f64,
    /// Scroll offset after which the navbar switches to its scrolled style.
    pub scrolled_offset: f64,
}

impl ScrollConfig {
    pub const DEFAULT: ScrollConfig = ScrollConfig {
        navbar_height: 70.0,
        detection_margin: 100.0,
        scrolled_offset: 50.0,
    };

    /// Document offset a section top must be at or above to be considered
    /// scrolled past.
    pub fn detection_threshold(&self, scroll_y: f64) -> f64 {
        scroll_y + self.navbar_height + self.detection_margin
    }

    /// Scroll position that puts `section_top` just below the navbar.
    pub fn scroll_target(&self, section_top: f64) -> f64 {
        section_top - self.navbar_height
    }

    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scrolled_offset
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
