//! Browser adapter for the reveal choreography.
//!
//! `reveal-core` decides what animates and when; this crate executes
//! those decisions against the DOM. Every tween becomes a Web Animations
//! API animation built in a paused state with backwards fill, so the
//! from-state holds until release and `cancel()` restores the untouched
//! computed style on teardown. Scroll-driven registrations each get an
//! `IntersectionObserver` whose root margin encodes the crossing
//! threshold; a crossing is routed through the core, which fires each
//! registration at most once.
//!
//! The host calls [`init`] once at process start, [`mount`] when the
//! page root is in the DOM, and [`RevealHandle::dispose`] on unmount.

mod dom;
mod handle;
mod waapi;

use std::sync::Once;

use wasm_bindgen::JsValue;
use web_sys::Element;

pub use dom::{scan_targets, ScannedTargets};
pub use handle::RevealHandle;
pub use reveal_core::{Choreography, MotionPreference, Phase};

use reveal_core::{RevealController, TargetInventory};

static INIT: Once = Once::new();

/// Process-wide one-time initialization. Installs the panic hook and
/// probes the two environment capabilities the adapter leans on,
/// logging a warning for anything missing. Repeated calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if !dom::supports_waapi() {
            web_sys::console::warn_1(&JsValue::from_str(
                "reveal: Web Animations API unavailable; entrance animations disabled",
            ));
        } else if !dom::supports_intersection_observer() {
            web_sys::console::warn_1(&JsValue::from_str(
                "reveal: IntersectionObserver unavailable; scroll-driven reveals disabled",
            ));
        }
    });
}

/// Arm the reveal animations for one mounted view.
///
/// Reads the user's reduced-motion preference, scans `root` for tagged
/// targets and realizes the resulting plan. The returned handle owns
/// every browser resource created; dropping it (or calling
/// [`RevealHandle::dispose`]) reverts everything.
pub fn mount(root: &Element) -> RevealHandle {
    mount_with_preference(root, dom::motion_preference())
}

/// [`mount`] with the motion preference supplied by the caller instead
/// of read from `matchMedia`. This is the testable entry point.
pub fn mount_with_preference(root: &Element, motion: MotionPreference) -> RevealHandle {
    let targets = dom::scan_targets(root);
    let mut inventory = targets.inventory();

    // Degrade, never abort: without WAAPI nothing animates and every
    // element rests in its final state; without the observer only the
    // load-driven hero plays.
    if !dom::supports_waapi() {
        inventory = TargetInventory::default();
    } else if !dom::supports_intersection_observer() {
        inventory.reveals = 0;
        inventory.cards = 0;
    }

    let cfg = Choreography::default();
    let mut controller = RevealController::new(cfg);
    // A freshly constructed controller always arms.
    let plan = controller.setup(&inventory, motion).unwrap_or_default();

    handle::realize(controller, &targets, &plan, cfg.ease)
}
