//! The per-mount controller: arm once, fire each registration at most
//! once, tear everything down exactly once.

use thiserror::Error;

use crate::config::Choreography;
use crate::ids::{IdAllocator, RegId};
use crate::plan::{self, RevealPlan, TargetInventory};

/// Lifecycle of one controller. One-way: `Unarmed -> Armed -> Disposed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unarmed,
    Armed,
    Disposed,
}

/// Whether the environment asked for motion to be suppressed.
///
/// Read once at setup. `Reduced` arms the controller with zero
/// registrations so the page rests in its final visual state; an
/// unreadable preference counts as `Allowed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Allowed,
    Reduced,
}

/// Outcome of a crossing event for one registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireDecision {
    /// Release the bound tween and stop watching the target.
    Play,
    /// Already fired, unknown id, or not armed. Nothing to do.
    Ignore,
}

/// Setup preconditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// `setup` was called again without an intervening teardown.
    #[error("controller is already armed; teardown must run before arming again")]
    AlreadyArmed,
    /// The controller was torn down; a new mount needs a new controller.
    #[error("controller is disposed and cannot be re-armed")]
    Disposed,
}

/// Fire state of one registration.
#[derive(Debug)]
struct RegState {
    id: RegId,
    scroll_driven: bool,
    fired: bool,
}

/// State machine behind one mounted view's reveal animations.
///
/// The controller owns no browser resources itself: it decides and an
/// adapter executes. That split keeps the ordering and idempotence rules
/// testable off-browser.
#[derive(Debug)]
pub struct RevealController {
    cfg: Choreography,
    ids: IdAllocator,
    phase: Phase,
    regs: Vec<RegState>,
}

impl RevealController {
    pub fn new(cfg: Choreography) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            phase: Phase::Unarmed,
            regs: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of live registrations.
    pub fn registration_count(&self) -> usize {
        self.regs.len()
    }

    /// Scroll-driven registrations still waiting for their crossing.
    pub fn pending_count(&self) -> usize {
        self.regs
            .iter()
            .filter(|reg| reg.scroll_driven && !reg.fired)
            .count()
    }

    /// Arm the controller for one mount and return the plan the adapter
    /// should realize.
    ///
    /// With motion reduced the plan is empty and the page is left
    /// untouched. Arming twice, or after disposal, is a precondition
    /// violation.
    pub fn setup(
        &mut self,
        inventory: &TargetInventory,
        motion: MotionPreference,
    ) -> Result<RevealPlan, SetupError> {
        match self.phase {
            Phase::Armed => return Err(SetupError::AlreadyArmed),
            Phase::Disposed => return Err(SetupError::Disposed),
            Phase::Unarmed => {}
        }

        self.phase = Phase::Armed;
        if motion == MotionPreference::Reduced {
            return Ok(RevealPlan::default());
        }

        let plan = plan::build(&self.cfg, inventory, &mut self.ids);
        self.regs = plan
            .registrations
            .iter()
            .map(|reg| RegState {
                id: reg.id,
                scroll_driven: reg.is_scroll_driven(),
                // The hero group releases at mount; only scroll-driven
                // registrations wait on a crossing.
                fired: !reg.is_scroll_driven(),
            })
            .collect();
        Ok(plan)
    }

    /// Map one crossing event to at most one release.
    pub fn on_crossing(&mut self, id: RegId) -> FireDecision {
        if self.phase != Phase::Armed {
            return FireDecision::Ignore;
        }
        match self.regs.iter_mut().find(|reg| reg.id == id) {
            Some(reg) if reg.scroll_driven && !reg.fired => {
                reg.fired = true;
                FireDecision::Play
            }
            _ => FireDecision::Ignore,
        }
    }

    /// Tear down, returning every registration the adapter must revert,
    /// fired or not. Calling again, or before setup, returns nothing.
    pub fn teardown(&mut self) -> Vec<RegId> {
        let ids = self.regs.drain(..).map(|reg| reg.id).collect();
        self.phase = Phase::Disposed;
        ids
    }
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(Choreography::default())
    }
}
