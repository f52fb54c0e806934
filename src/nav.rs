use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::config::ScrollConfig;

/// Stable identifier of a page section, doubling as its element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(&'static str);

impl SectionId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id: SectionId::new(id),
            label,
        }
    }
}

pub const HOME: Section = Section::new("home", "Home");
pub const ABOUT: Section = Section::new("about", "About");
pub const EXPERIENCE: Section = Section::new("experience", "Experience");
pub const SKILLS: Section = Section::new("skills", "Skills");
pub const EDUCATION: Section = Section::new("education", "Education");
pub const CONTACT: Section = Section::new("contact", "Contact");

/// Sections in the order they appear on the page.
pub const PORTFOLIO_SECTIONS: &[Section] = &[HOME, ABOUT, EXPERIENCE, SKILLS, EDUCATION, CONTACT];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Section registry is empty")]
    Empty,
    #[error("Duplicate section id: {0}")]
    DuplicateId(SectionId),
}

/// Where sections currently sit in the document.
pub trait SectionLayout {
    /// Absolute top offset of the section's element, `None` while it isn't rendered.
    fn section_top(&self, id: SectionId) -> Option<f64>;
}

/// A scrollable viewport over the document.
pub trait Viewport: SectionLayout {
    fn scroll_y(&self) -> f64;
    /// Starts an animated scroll and returns without waiting for it.
    fn smooth_scroll_to(&self, top: f64);
}

/// Ordered, non-empty list of navigable sections with unique ids.
#[derive(Debug, Clone, Copy)]
pub struct SectionRegistry {
    sections: &'static [Section],
}

impl SectionRegistry {
    pub const PORTFOLIO: SectionRegistry = SectionRegistry {
        sections: PORTFOLIO_SECTIONS,
    };

    pub fn new(sections: &'static [Section]) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for section in sections {
            if !seen.insert(section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
        }
        Ok(Self { sections })
    }

    pub fn first(&self) -> &'static Section {
        &self.sections[0]
    }

    pub fn get(&self, id: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Section> {
        self.sections.iter()
    }

    /// Section the reader is currently looking at.
    ///
    /// Walks the sections bottom-up and picks the first one whose top has
    /// been scrolled past (top at or above the detection threshold). Falls
    /// back to the first section when none has. Sections missing from the
    /// layout are skipped.
    pub fn active_section<L>(&self, layout: &L, scroll_y: f64, config: &ScrollConfig) -> SectionId
    where
        L: SectionLayout + ?Sized,
    {
        let threshold = config.detection_threshold(scroll_y);
        self.sections
            .iter()
            .rev()
            .filter_map(|s| layout.section_top(s.id).map(|top| (s.id, top)))
            .find(|(_, top)| *top <= threshold)
            .map(|(id, _)| id)
            .unwrap_or(self.first().id)
    }

    /// Starts a smooth scroll to `target` and returns the id to mark active.
    ///
    /// Returns `None` without touching the viewport when `target` isn't a
    /// registered section or its element isn't in the document.
    pub fn navigate<V>(&self, viewport: &V, target: &str, config: &ScrollConfig) -> Option<SectionId>
    where
        V: Viewport + ?Sized,
    {
        let section = self.get(target)?;
        let top = viewport.section_top(section.id)?;
        viewport.smooth_scroll_to(config.scroll_target(top));
        Some(section.id)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::PORTFOLIO
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    // In-memory document: section tops plus a record of requested scrolls
    struct FakeViewport {
        tops: HashMap<&'static str, f64>,
        scroll_y: f64,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        fn new(tops: &[(&'static str, f64)], scroll_y: f64) -> Self {
            Self {
                tops: tops.iter().copied().collect(),
                scroll_y,
                scrolls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionLayout for FakeViewport {
        fn section_top(&self, id: SectionId) -> Option<f64> {
            self.tops.get(id.as_str()).copied()
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    const THREE: &[Section] = &[HOME, ABOUT, EXPERIENCE];

    fn three_sections() -> SectionRegistry {
        SectionRegistry::new(THREE).expect("three sections should be valid")
    }

    fn three_layout(scroll_y: f64) -> FakeViewport {
        FakeViewport::new(&[("home", 0.0), ("about", 800.0), ("experience", 1600.0)], scroll_y)
    }

    #[test]
    fn test_portfolio_registry_is_valid() {
        let registry = SectionRegistry::new(PORTFOLIO_SECTIONS).expect("portfolio should be valid");
        assert_eq!(registry.first().id, HOME.id);
        let ids = SectionRegistry::PORTFOLIO
            .iter()
            .map(|s| s.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "experience", "skills", "education", "contact"]);
    }

    #[test]
    fn test_registry_rejects_empty_and_duplicates() {
        const EMPTY: &[Section] = &[];
        const DUPED: &[Section] = &[HOME, ABOUT, Section::new("home", "Start")];

        assert_eq!(SectionRegistry::new(EMPTY).unwrap_err(), RegistryError::Empty);
        assert_eq!(
            SectionRegistry::new(DUPED).unwrap_err(),
            RegistryError::DuplicateId(HOME.id)
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = SectionRegistry::PORTFOLIO;
        assert_eq!(registry.get("skills").map(|s| s.label), Some("Skills"));
        assert!(registry.get("blog").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_active_section_scenario() {
        let registry = three_sections();
        let config = ScrollConfig::default();

        // 750 + 70 + 100 = 920, past about (800) but not experience (1600)
        let layout = three_layout(750.0);
        assert_eq!(registry.active_section(&layout, 750.0, &config), ABOUT.id);

        // 100 + 70 + 100 = 270, only home reached
        assert_eq!(registry.active_section(&layout, 100.0, &config), HOME.id);
    }

    #[test]
    fn test_active_section_boundaries() {
        let registry = three_sections();
        let config = ScrollConfig::default();
        let layout = three_layout(0.0);

        // about becomes active exactly at 800 - 70 - 100
        assert_eq!(registry.active_section(&layout, 629.0, &config), HOME.id);
        assert_eq!(registry.active_section(&layout, 630.0, &config), ABOUT.id);
        assert_eq!(registry.active_section(&layout, 1429.0, &config), ABOUT.id);
        assert_eq!(registry.active_section(&layout, 1430.0, &config), EXPERIENCE.id);
        assert_eq!(registry.active_section(&layout, 50_000.0, &config), EXPERIENCE.id);
    }

    #[test]
    fn test_active_section_defaults_to_first_above_all_sections() {
        let registry = three_sections();
        let config = ScrollConfig::default();
        // page with a tall header pushing every section down
        let layout = FakeViewport::new(&[("home", 400.0), ("about", 1200.0), ("experience", 2000.0)], 0.0);

        for scroll_y in [0.0, 100.0, 229.0] {
            assert_eq!(registry.active_section(&layout, scroll_y, &config), HOME.id);
        }
    }

    #[test]
    fn test_active_section_skips_unrendered_sections() {
        let registry = three_sections();
        let config = ScrollConfig::default();
        let layout = FakeViewport::new(&[("home", 0.0), ("experience", 1600.0)], 0.0);

        // about isn't in the document yet, so home stays active past 800
        assert_eq!(registry.active_section(&layout, 750.0, &config), HOME.id);
        assert_eq!(registry.active_section(&layout, 1500.0, &config), EXPERIENCE.id);

        let empty = FakeViewport::new(&[], 0.0);
        assert_eq!(registry.active_section(&empty, 5000.0, &config), HOME.id);
    }

    #[test]
    fn test_active_section_uses_config() {
        let registry = three_sections();
        let config = ScrollConfig {
            navbar_height: 0.0,
            detection_margin: 0.0,
            ..ScrollConfig::DEFAULT
        };
        let layout = three_layout(0.0);

        assert_eq!(registry.active_section(&layout, 799.0, &config), HOME.id);
        assert_eq!(registry.active_section(&layout, 800.0, &config), ABOUT.id);
    }

    #[test]
    fn test_navigate_scrolls_below_navbar() {
        let registry = three_sections();
        let config = ScrollConfig::default();
        let viewport = three_layout(0.0);

        let active = registry.navigate(&viewport, "experience", &config);
        assert_eq!(active, Some(EXPERIENCE.id));
        assert_eq!(*viewport.scrolls.borrow(), vec![1530.0]);
    }

    #[test]
    fn test_navigate_overrides_scroll_state() {
        let registry = three_sections();
        let config = ScrollConfig::default();

        // scrolled deep into experience, navigating back to home still wins
        let viewport = three_layout(2000.0);
        assert_eq!(
            registry.active_section(&viewport, viewport.scroll_y(), &config),
            EXPERIENCE.id
        );
        assert_eq!(registry.navigate(&viewport, "home", &config), Some(HOME.id));
        assert_eq!(*viewport.scrolls.borrow(), vec![-70.0]);
    }

    #[test]
    fn test_navigate_unknown_is_noop() {
        let registry = three_sections();
        let config = ScrollConfig::default();
        let viewport = three_layout(300.0);

        assert_eq!(registry.navigate(&viewport, "blog", &config), None);
        // registered id without an element in the document
        assert_eq!(registry.navigate(&viewport, "contact", &config), None);
        assert!(viewport.scrolls.borrow().is_empty());
        assert_eq!(viewport.scroll_y(), 300.0);
    }

    #[test]
    fn test_navigate_missing_element_is_noop() {
        let registry = three_sections();
        let config = ScrollConfig::default();
        let viewport = FakeViewport::new(&[("home", 0.0)], 0.0);

        assert_eq!(registry.navigate(&viewport, "about", &config), None);
        assert!(viewport.scrolls.borrow().is_empty());
    }
}
