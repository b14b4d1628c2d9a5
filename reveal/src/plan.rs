//! Target inventory and the per-mount animation plan.

use serde::{Deserialize, Serialize};

use crate::config::Choreography;
use crate::ids::{IdAllocator, RegId};

/// What the target scan found under the mounted root.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TargetInventory {
    pub hero: Option<HeroTargets>,
    pub reveals: usize,
    pub cards: usize,
}

/// Presence of the hero sub-targets. Absent parts are skipped and the
/// remaining steps re-sequenced from the front.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct HeroTargets {
    pub has_eyebrow: bool,
    pub title_lines: usize,
    pub has_copy: bool,
    pub has_cta: bool,
}

impl HeroTargets {
    /// True when no sub-target is present at all.
    pub fn is_empty(&self) -> bool {
        !self.has_eyebrow && self.title_lines == 0 && !self.has_copy && !self.has_cta
    }
}

/// Which hero sub-element a step animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroRole {
    Eyebrow,
    TitleLine(usize),
    Copy,
    Cta,
}

/// Starting offset of a tween. The element always travels back to its
/// natural resting position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shift {
    /// Pixels below the resting position.
    Px(f64),
    /// Percent of the element's own height below the resting position.
    Percent(f64),
}

/// One from-hidden-to-resting transition.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tween {
    pub shift: Shift,
    /// Seconds.
    pub duration: f64,
    /// Seconds between the tween being released and motion starting.
    pub delay: f64,
}

impl Tween {
    /// Instant the transition ends, relative to release.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Viewport condition that releases a scroll-driven tween.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Trigger {
    /// Fraction of viewport height the element top must cross.
    pub view_fraction: f64,
}

/// One hero sub-animation, its absolute start baked into `tween.delay`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HeroStep {
    pub role: HeroRole,
    pub tween: Tween,
}

/// What one registration animates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RegKind {
    /// The load-driven hero sequence; one registration covers the group.
    Hero { steps: Vec<HeroStep> },
    /// An independent scroll-driven block.
    Reveal {
        index: usize,
        tween: Tween,
        trigger: Trigger,
    },
    /// A scroll-driven card with positional stagger.
    Card {
        index: usize,
        tween: Tween,
        trigger: Trigger,
    },
}

/// One target bound for animation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegId,
    pub kind: RegKind,
}

impl Registration {
    /// Scroll-driven registrations wait for a crossing event; the hero
    /// group releases on its own at mount.
    pub fn is_scroll_driven(&self) -> bool {
        !matches!(self.kind, RegKind::Hero { .. })
    }
}

/// Everything `setup` decided for one mount.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RevealPlan {
    pub registrations: Vec<Registration>,
}

impl RevealPlan {
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// The hero steps, if a hero group was registered.
    pub fn hero_steps(&self) -> Option<&[HeroStep]> {
        self.registrations.iter().find_map(|reg| match &reg.kind {
            RegKind::Hero { steps } => Some(steps.as_slice()),
            _ => None,
        })
    }
}

/// Expand an inventory into concrete registrations.
pub(crate) fn build(
    cfg: &Choreography,
    inventory: &TargetInventory,
    ids: &mut IdAllocator,
) -> RevealPlan {
    let mut registrations = Vec::new();

    if let Some(hero) = inventory.hero {
        let steps = sequence_hero(cfg, &hero);
        if !steps.is_empty() {
            registrations.push(Registration {
                id: ids.alloc(),
                kind: RegKind::Hero { steps },
            });
        }
    }

    for index in 0..inventory.reveals {
        registrations.push(Registration {
            id: ids.alloc(),
            kind: RegKind::Reveal {
                index,
                tween: Tween {
                    shift: Shift::Px(cfg.reveal.shift_y),
                    duration: cfg.reveal.duration,
                    delay: 0.0,
                },
                trigger: Trigger {
                    view_fraction: cfg.reveal.view_fraction,
                },
            },
        });
    }

    for index in 0..inventory.cards {
        registrations.push(Registration {
            id: ids.alloc(),
            kind: RegKind::Card {
                index,
                tween: Tween {
                    shift: Shift::Px(cfg.card.shift_y),
                    duration: cfg.card.duration,
                    delay: index as f64 * cfg.card.stagger,
                },
                trigger: Trigger {
                    view_fraction: cfg.card.view_fraction,
                },
            },
        });
    }

    RevealPlan { registrations }
}

/// Lay the present hero steps out on one clock. A step may start before
/// the previous one completes, but never before it starts, so the
/// sequence reads as one continuous motion with strictly ordered
/// entrances.
fn sequence_hero(cfg: &Choreography, targets: &HeroTargets) -> Vec<HeroStep> {
    let hero = &cfg.hero;
    let mut steps = Vec::new();
    let mut clock = SequenceClock::default();

    if targets.has_eyebrow {
        let start = clock.place(hero.eyebrow.overlap, hero.eyebrow.duration);
        steps.push(HeroStep {
            role: HeroRole::Eyebrow,
            tween: Tween {
                shift: Shift::Px(hero.eyebrow.shift_y),
                duration: hero.eyebrow.duration,
                delay: start,
            },
        });
    }

    if targets.title_lines > 0 {
        let start = clock.place_group(
            hero.title.overlap,
            hero.title.duration,
            targets.title_lines,
            hero.title.line_stagger,
        );
        for line in 0..targets.title_lines {
            steps.push(HeroStep {
                role: HeroRole::TitleLine(line),
                tween: Tween {
                    shift: Shift::Percent(hero.title.shift_percent),
                    duration: hero.title.duration,
                    delay: start + line as f64 * hero.title.line_stagger,
                },
            });
        }
    }

    if targets.has_copy {
        let start = clock.place(hero.copy.overlap, hero.copy.duration);
        steps.push(HeroStep {
            role: HeroRole::Copy,
            tween: Tween {
                shift: Shift::Px(hero.copy.shift_y),
                duration: hero.copy.duration,
                delay: start,
            },
        });
    }

    if targets.has_cta {
        let start = clock.place(hero.cta.overlap, hero.cta.duration);
        steps.push(HeroStep {
            role: HeroRole::Cta,
            tween: Tween {
                shift: Shift::Px(hero.cta.shift_y),
                duration: hero.cta.duration,
                delay: start,
            },
        });
    }

    steps
}

/// Running positions while laying out the hero sequence.
#[derive(Default)]
struct SequenceClock {
    /// End of all placed motion.
    end: f64,
    /// Start of the most recently placed sub-step.
    last_start: f64,
    started: bool,
}

impl SequenceClock {
    /// Place a single step; returns its absolute start.
    fn place(&mut self, overlap: f64, duration: f64) -> f64 {
        self.place_group(overlap, duration, 1, 0.0)
    }

    /// Place `count` staggered sub-steps; returns the first start. The
    /// requested overlap is clamped so the start never lands before the
    /// previous sub-step's start.
    fn place_group(&mut self, overlap: f64, duration: f64, count: usize, stagger: f64) -> f64 {
        let start = if self.started {
            (self.end - overlap).max(self.last_start)
        } else {
            0.0
        };
        let tail = start + count.saturating_sub(1) as f64 * stagger;
        self.last_start = tail;
        self.end = self.end.max(tail + duration);
        self.started = true;
        start
    }
}
