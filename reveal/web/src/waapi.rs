//! Web Animations API plumbing: keyframes, timing options, playback.

use js_sys::{Array, Object, Reflect};
use reveal_core::{Ease, Shift, Tween};
use wasm_bindgen::JsValue;
use web_sys::{Animation, Element, FillMode, KeyframeAnimationOptions};

fn translate(shift: Shift) -> String {
    match shift {
        Shift::Px(px) => format!("translateY({px}px)"),
        Shift::Percent(pct) => format!("translateY({pct}%)"),
    }
}

/// Two-frame track: hidden-and-shifted to the element's resting state.
fn keyframes(shift: Shift) -> Array {
    let from = Object::new();
    let _ = Reflect::set(&from, &JsValue::from_str("opacity"), &JsValue::from_f64(0.0));
    let _ = Reflect::set(
        &from,
        &JsValue::from_str("transform"),
        &JsValue::from_str(&translate(shift)),
    );

    let to = Object::new();
    let _ = Reflect::set(&to, &JsValue::from_str("opacity"), &JsValue::from_f64(1.0));
    let _ = Reflect::set(
        &to,
        &JsValue::from_str("transform"),
        &JsValue::from_str("translateY(0px)"),
    );

    Array::of2(&from, &to)
}

/// Build the tween as a paused animation. Backwards fill keeps the
/// first keyframe applied through the start delay and while paused, so
/// a scroll-driven element stays hidden until its crossing releases it,
/// and `cancel()` drops back to the untouched computed style.
pub(crate) fn build_paused(element: &Element, tween: &Tween, ease: &Ease) -> Animation {
    let options = KeyframeAnimationOptions::new();
    options.set_duration(tween.duration * 1000.0);
    options.set_delay(tween.delay * 1000.0);
    options.set_easing(&ease.to_css());
    options.set_fill(FillMode::Backwards);

    let frames = keyframes(tween.shift);
    let animation =
        element.animate_with_keyframe_animation_options(Some(frames.as_ref()), &options);
    let _ = animation.pause();
    animation
}

/// Release a previously built tween.
pub(crate) fn play(animation: &Animation) {
    let _ = animation.play();
}
