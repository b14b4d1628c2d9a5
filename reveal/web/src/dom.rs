//! Target scanning and environment capability probes.

use reveal_core::{HeroRole, HeroTargets, MotionPreference, TargetInventory};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// References to every tagged element found under the mounted root.
///
/// Scroll-driven targets keep their document order, which is what the
/// core's position index (and the card stagger) is derived from.
#[derive(Debug, Default)]
pub struct ScannedTargets {
    hero_eyebrow: Option<Element>,
    hero_title_lines: Vec<Element>,
    hero_copy: Option<Element>,
    hero_cta: Option<Element>,
    reveals: Vec<Element>,
    cards: Vec<Element>,
}

impl ScannedTargets {
    /// Counts in the shape the core consumes.
    pub fn inventory(&self) -> TargetInventory {
        let hero = HeroTargets {
            has_eyebrow: self.hero_eyebrow.is_some(),
            title_lines: self.hero_title_lines.len(),
            has_copy: self.hero_copy.is_some(),
            has_cta: self.hero_cta.is_some(),
        };
        TargetInventory {
            hero: (!hero.is_empty()).then_some(hero),
            reveals: self.reveals.len(),
            cards: self.cards.len(),
        }
    }

    pub(crate) fn hero_element(&self, role: HeroRole) -> Option<&Element> {
        match role {
            HeroRole::Eyebrow => self.hero_eyebrow.as_ref(),
            HeroRole::TitleLine(line) => self.hero_title_lines.get(line),
            HeroRole::Copy => self.hero_copy.as_ref(),
            HeroRole::Cta => self.hero_cta.as_ref(),
        }
    }

    pub(crate) fn reveal_element(&self, index: usize) -> Option<&Element> {
        self.reveals.get(index)
    }

    pub(crate) fn card_element(&self, index: usize) -> Option<&Element> {
        self.cards.get(index)
    }
}

/// Collect every animation target under `root`. Missing targets are
/// simply absent from the result; nothing here is an error.
pub fn scan_targets(root: &Element) -> ScannedTargets {
    ScannedTargets {
        hero_eyebrow: query_one(root, "[data-hero-eyebrow]"),
        hero_title_lines: query_all(root, "[data-hero-title] span"),
        hero_copy: query_one(root, "[data-hero-copy]"),
        hero_cta: query_one(root, "[data-hero-cta]"),
        reveals: query_all(root, "[data-reveal]"),
        cards: query_all(root, "[data-card]"),
    }
}

fn query_one(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Read the reduced-motion preference once. An unreadable preference
/// counts as motion allowed.
pub(crate) fn motion_preference() -> MotionPreference {
    let reduced = web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|query| query.matches())
        .unwrap_or(false);
    if reduced {
        MotionPreference::Reduced
    } else {
        MotionPreference::Allowed
    }
}

/// Whether `Element.prototype.animate` exists.
pub(crate) fn supports_waapi() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("Element"))
        .and_then(|element| js_sys::Reflect::get(&element, &JsValue::from_str("prototype")))
        .and_then(|proto| js_sys::Reflect::has(&proto, &JsValue::from_str("animate")))
        .unwrap_or(false)
}

/// Whether the viewport-crossing primitive exists.
pub(crate) fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
