//! The disposer handle: every browser resource created at mount, keyed
//! by registration, reverted exactly once at teardown.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use reveal_core::{
    Ease, FireDecision, Phase, RegId, RegKind, RevealController, RevealPlan, Trigger, Tween,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Animation, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::ScannedTargets;
use crate::waapi;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array)>;

/// Browser resources owned on behalf of one registration.
struct Entry {
    animations: Vec<Animation>,
    observer: Option<IntersectionObserver>,
    // Kept alive here instead of `forget()` so unmount can drop it. The
    // observer is disconnected before the closure goes away.
    callback: Option<ObserverCallback>,
}

impl Entry {
    fn revert(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
        for animation in self.animations.drain(..) {
            animation.cancel();
        }
    }
}

type Entries = Rc<RefCell<HashMap<RegId, Entry>>>;

/// Aggregate of everything one `mount` created.
///
/// Exclusive owner of the registrations' browser resources until
/// [`dispose`](RevealHandle::dispose) consumes them. Dropping the
/// handle disposes as a safety net.
pub struct RevealHandle {
    controller: Rc<RefCell<RevealController>>,
    entries: Entries,
}

impl RevealHandle {
    /// Registrations created at mount (live until disposal).
    pub fn registration_count(&self) -> usize {
        self.controller.borrow().registration_count()
    }

    /// Scroll-driven registrations still waiting for their crossing.
    pub fn pending_count(&self) -> usize {
        self.controller.borrow().pending_count()
    }

    /// Observers still attached to the document.
    pub fn observer_count(&self) -> usize {
        self.entries
            .borrow()
            .values()
            .filter(|entry| entry.observer.is_some())
            .count()
    }

    pub fn is_disposed(&self) -> bool {
        self.controller.borrow().phase() == Phase::Disposed
    }

    /// Revert every visual mutation, detach every observer and drop the
    /// retained closures. Safe to call whether or not any animation has
    /// fired, and a second call is a no-op.
    pub fn dispose(&mut self) {
        let reverted = self.controller.borrow_mut().teardown();
        let mut entries = self.entries.borrow_mut();
        for id in reverted {
            if let Some(mut entry) = entries.remove(&id) {
                entry.revert();
            }
        }
        // Nothing should be left, but never leak an observer.
        for entry in entries.values_mut() {
            entry.revert();
        }
        entries.clear();
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Execute a plan against the scanned elements.
pub(crate) fn realize(
    controller: RevealController,
    targets: &ScannedTargets,
    plan: &RevealPlan,
    ease: Ease,
) -> RevealHandle {
    let controller = Rc::new(RefCell::new(controller));
    let entries: Entries = Rc::new(RefCell::new(HashMap::new()));

    for registration in &plan.registrations {
        match &registration.kind {
            RegKind::Hero { steps } => {
                // The hero group releases at mount; each step's absolute
                // start is baked into its delay.
                let mut animations = Vec::new();
                for step in steps {
                    if let Some(element) = targets.hero_element(step.role) {
                        let animation = waapi::build_paused(element, &step.tween, &ease);
                        waapi::play(&animation);
                        animations.push(animation);
                    }
                }
                entries.borrow_mut().insert(
                    registration.id,
                    Entry {
                        animations,
                        observer: None,
                        callback: None,
                    },
                );
            }
            RegKind::Reveal {
                index,
                tween,
                trigger,
            } => {
                if let Some(element) = targets.reveal_element(*index) {
                    watch(&controller, &entries, registration.id, element, tween, trigger, &ease);
                }
            }
            RegKind::Card {
                index,
                tween,
                trigger,
            } => {
                if let Some(element) = targets.card_element(*index) {
                    watch(&controller, &entries, registration.id, element, tween, trigger, &ease);
                }
            }
        }
    }

    RevealHandle { controller, entries }
}

/// Crossing threshold as an `IntersectionObserver` root margin: pull
/// the root's bottom edge up by the viewport fraction above the line.
fn root_margin(trigger: &Trigger) -> String {
    let inset = ((1.0 - trigger.view_fraction) * 100.0).round() as i32;
    format!("0px 0px -{inset}% 0px")
}

/// Build one scroll-driven registration: a paused tween plus an
/// observer that releases it on the first crossing, then disconnects.
fn watch(
    controller: &Rc<RefCell<RevealController>>,
    entries: &Entries,
    id: RegId,
    element: &Element,
    tween: &Tween,
    trigger: &Trigger,
    ease: &Ease,
) {
    let animation = waapi::build_paused(element, tween, ease);

    let controller = Rc::clone(controller);
    let shared = Rc::clone(entries);
    let callback: ObserverCallback = Closure::wrap(Box::new(move |observed: js_sys::Array| {
        let crossed = observed.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false)
        });
        if !crossed {
            return;
        }
        // The core decides; re-delivered crossings stay inert.
        if controller.borrow_mut().on_crossing(id) != FireDecision::Play {
            return;
        }
        if let Some(entry) = shared.borrow_mut().get_mut(&id) {
            if let Some(observer) = entry.observer.take() {
                observer.disconnect();
            }
            for animation in &entry.animations {
                waapi::play(animation);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&root_margin(trigger));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            entries.borrow_mut().insert(
                id,
                Entry {
                    animations: vec![animation],
                    observer: Some(observer),
                    callback: Some(callback),
                },
            );
        }
        Err(err) => {
            // Capability probes should have caught this; leave the
            // element at rest rather than hidden.
            animation.cancel();
            web_sys::console::warn_2(
                &JsValue::from_str("reveal: failed to construct IntersectionObserver"),
                &err,
            );
        }
    }
}
