use log::debug;

use crate::config::{SiteConfig, ABOUT_SECTION};

/// Bounding box of a section relative to the top of the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn intersects(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// What the controller needs to know about, and ask of, the host window.
pub trait Viewport {
    /// `None` when no element with this id is on screen.
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds>;
    fn height(&self) -> f64;
    /// Smoothly scroll the section with this id into view.
    fn scroll_to(&self, section_id: &str);
}

/// Transient UI state of one page view. Reset on remount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageController {
    mobile_menu_open: bool,
    skills_visible: bool,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn skills_visible(&self) -> bool {
        self.skills_visible
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Returns whether the section was found. A missing section changes nothing.
    pub fn navigate_to_section(&mut self, section_id: &str, viewport: &impl Viewport) -> bool {
        if viewport.section_bounds(section_id).is_none() {
            debug!("No section with id `{}`, ignoring navigation", section_id);
            return false;
        }
        viewport.scroll_to(section_id);
        self.mobile_menu_open = false;
        true
    }

    /// Latches `skills_visible` the first time the About section is in view.
    /// Returns true only on the call that trips the latch.
    pub fn on_viewport_change(&mut self, viewport: &impl Viewport) -> bool {
        let Some(bounds) = viewport.section_bounds(ABOUT_SECTION) else {
            return false;
        };
        if bounds.intersects(viewport.height()) && !self.skills_visible {
            debug!("About section in view, starting skill bars");
            self.skills_visible = true;
            return true;
        }
        false
    }

    /// Text of the acknowledgment dialog. Nothing from the form is read or sent.
    pub fn submit_contact_form<'a>(&self, site: &'a SiteConfig) -> &'a str {
        &site.acknowledgment
    }

    /// CSS width of a skill bar's fill.
    pub fn skill_bar_width(&self, percentage: u8) -> String {
        if self.skills_visible() {
            format!("{}%", percentage)
        } else {
            "0%".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeViewport {
        height: f64,
        sections: HashMap<String, SectionBounds>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with_sections(ids: &[&str]) -> Self {
            let sections = ids
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    let top = 2000.0 + 1000.0 * i as f64;
                    (id.to_string(), SectionBounds { top, bottom: top + 900.0 })
                })
                .collect();
            Self {
                height: 900.0,
                sections,
                ..Self::default()
            }
        }

        fn place_about(&mut self, top: f64, bottom: f64) {
            self.sections
                .insert(ABOUT_SECTION.to_string(), SectionBounds { top, bottom });
        }
    }

    impl Viewport for FakeViewport {
        fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
            self.sections.get(section_id).copied()
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn scroll_to(&self, section_id: &str) {
            self.scrolled.borrow_mut().push(section_id.to_string());
        }
    }

    fn page() -> FakeViewport {
        FakeViewport::with_sections(&crate::config::SECTION_IDS)
    }

    #[test]
    fn starts_closed_and_hidden() {
        let controller = PageController::new();
        assert!(!controller.mobile_menu_open());
        assert!(!controller.skills_visible());
    }

    #[test]
    fn toggle_parity() {
        for count in 0..7 {
            let mut controller = PageController::new();
            for _ in 0..count {
                controller.toggle_mobile_menu();
            }
            assert_eq!(controller.mobile_menu_open(), count % 2 == 1, "after {} toggles", count);
        }
    }

    #[test]
    fn navigation_closes_menu_from_either_state() {
        let viewport = page();
        for start_open in [false, true] {
            let mut controller = PageController::new();
            if start_open {
                controller.toggle_mobile_menu();
            }
            assert!(controller.navigate_to_section("contact", &viewport));
            assert!(!controller.mobile_menu_open());
        }
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let viewport = page();
        let mut controller = PageController::new();
        controller.toggle_mobile_menu();
        let before = controller;

        assert!(!controller.navigate_to_section("nonexistent", &viewport));
        assert_eq!(controller, before);
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn menu_then_navigate_scenario() {
        let viewport = page();
        let mut controller = PageController::new();

        controller.toggle_mobile_menu();
        assert_eq!((controller.mobile_menu_open(), controller.skills_visible()), (true, false));

        controller.navigate_to_section("projects", &viewport);
        assert_eq!((controller.mobile_menu_open(), controller.skills_visible()), (false, false));
        assert_eq!(*viewport.scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn about_outside_viewport_keeps_skills_hidden() {
        let mut viewport = page();
        let mut controller = PageController::new();

        // below the fold, exactly at the edge, above the top, bottom touching zero
        for (top, bottom) in [(1200.0, 2000.0), (900.0, 1500.0), (-900.0, -10.0), (-600.0, 0.0)] {
            viewport.place_about(top, bottom);
            assert!(!controller.on_viewport_change(&viewport));
            assert!(!controller.skills_visible(), "top={} bottom={}", top, bottom);
        }
    }

    #[test]
    fn latch_is_monotonic() {
        let mut viewport = page();
        let mut controller = PageController::new();

        viewport.place_about(500.0, 800.0);
        assert!(controller.on_viewport_change(&viewport));
        assert!(controller.skills_visible());

        viewport.place_about(-2000.0, -1200.0);
        assert!(!controller.on_viewport_change(&viewport));
        assert!(controller.skills_visible());

        viewport.place_about(300.0, 1100.0);
        assert!(!controller.on_viewport_change(&viewport));
        assert!(controller.skills_visible());
    }

    #[test]
    fn missing_about_section_leaves_latch_alone() {
        let viewport = FakeViewport::with_sections(&["home", "projects"]);
        let mut controller = PageController::new();
        assert!(!controller.on_viewport_change(&viewport));
        assert!(!controller.skills_visible());
    }

    #[test]
    fn viewport_change_does_not_touch_menu() {
        let mut viewport = page();
        viewport.place_about(100.0, 700.0);
        let mut controller = PageController::new();
        controller.toggle_mobile_menu();
        controller.on_viewport_change(&viewport);
        assert!(controller.mobile_menu_open());
    }

    #[test]
    fn contact_form_only_acknowledges() {
        let site = crate::config::Profile::Studio.load().unwrap();
        let controller = PageController::new();
        assert_eq!(controller.submit_contact_form(&site), site.acknowledgment);
        assert_eq!(controller, PageController::new());
    }

    #[test]
    fn skill_bar_width_follows_latch() {
        let mut viewport = page();
        let mut controller = PageController::new();
        assert_eq!(controller.skill_bar_width(95), "0%");

        viewport.place_about(0.0, 900.0);
        controller.on_viewport_change(&viewport);
        assert_eq!(controller.skill_bar_width(95), "95%");
        assert_eq!(controller.skill_bar_width(0), "0%");
        assert_eq!(controller.skill_bar_width(100), "100%");
    }
}
