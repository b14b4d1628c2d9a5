//! Reveal choreography for the Approx landing page (engine-agnostic).
//!
//! The page plays three kinds of entrance animation: an ordered hero
//! sequence on load, independent scroll-triggered reveal blocks, and
//! scroll-triggered cards staggered by position. This crate owns every
//! decision about them: what gets registered, when each step starts,
//! which crossing events release a tween, and what teardown must revert.
//! It never touches a browser API, so the ordering and idempotence rules
//! are all testable with plain `cargo test`; the `reveal-web` crate
//! realizes the resulting plan against the DOM.

pub mod config;
pub mod controller;
pub mod ids;
pub mod plan;

// Re-exports for consumers (adapters)
pub use config::{CardTiming, Choreography, Ease, HeroTiming, RevealTiming, StepTiming, TitleTiming};
pub use controller::{FireDecision, MotionPreference, Phase, RevealController, SetupError};
pub use ids::RegId;
pub use plan::{
    HeroRole, HeroStep, HeroTargets, RegKind, Registration, RevealPlan, Shift, TargetInventory,
    Trigger, Tween,
};
