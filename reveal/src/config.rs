//! Timing configuration for the reveal choreography.

use serde::{Deserialize, Serialize};

/// Cubic bezier easing shared by every tween.
///
/// Defaults to the fast-out, long-settle curve the page motion was
/// designed around (cubic-bezier(0.215, 0.61, 0.355, 1)).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ease {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Ease {
    /// CSS serialization, as consumed by timing APIs.
    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self {
            x1: 0.215,
            y1: 0.61,
            x2: 0.355,
            y2: 1.0,
        }
    }
}

/// One load-driven hero step: a vertical shift in, with a bounded head
/// start on the step before it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StepTiming {
    /// Pixels below the resting position the element starts from.
    pub shift_y: f64,
    /// Seconds.
    pub duration: f64,
    /// Seconds this step starts before the previous one completes.
    pub overlap: f64,
}

/// The masked title lines: a percentage shift plus a per-line stagger.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TitleTiming {
    /// Offset as a percentage of the line's own height.
    pub shift_percent: f64,
    pub duration: f64,
    /// Delay between consecutive lines, seconds.
    pub line_stagger: f64,
    pub overlap: f64,
}

/// Scroll-triggered reveal blocks.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RevealTiming {
    pub shift_y: f64,
    pub duration: f64,
    /// Fraction of viewport height the element top must cross to fire.
    pub view_fraction: f64,
}

/// Scroll-triggered cards, staggered by position within the group.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CardTiming {
    pub shift_y: f64,
    pub duration: f64,
    /// Extra start delay per position index, seconds.
    pub stagger: f64,
    pub view_fraction: f64,
}

/// Hero step timings, in play order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HeroTiming {
    pub eyebrow: StepTiming,
    pub title: TitleTiming,
    pub copy: StepTiming,
    pub cta: StepTiming,
}

/// The full timing table for one mount.
///
/// Everything is plain data so alternative choreographies can be loaded
/// or tweaked in tests; the defaults reproduce the page's designed
/// motion.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Choreography {
    pub ease: Ease,
    pub hero: HeroTiming,
    pub reveal: RevealTiming,
    pub card: CardTiming,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            ease: Ease::default(),
            hero: HeroTiming {
                eyebrow: StepTiming {
                    shift_y: 28.0,
                    duration: 0.8,
                    overlap: 0.0,
                },
                title: TitleTiming {
                    shift_percent: 110.0,
                    duration: 1.1,
                    line_stagger: 0.12,
                    overlap: 0.45,
                },
                copy: StepTiming {
                    shift_y: 22.0,
                    duration: 0.9,
                    overlap: 0.55,
                },
                cta: StepTiming {
                    shift_y: 18.0,
                    duration: 0.8,
                    overlap: 0.6,
                },
            },
            reveal: RevealTiming {
                shift_y: 64.0,
                duration: 1.2,
                view_fraction: 0.86,
            },
            card: CardTiming {
                shift_y: 45.0,
                duration: 1.0,
                stagger: 0.08,
                view_fraction: 0.84,
            },
        }
    }
}
