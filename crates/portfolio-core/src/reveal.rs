//! One-shot effects triggered when an element scrolls into view.
//!
//! [`VisibilityTrigger`] tracks which targets are still being watched and
//! decides, per intersection sample, whether a target's effect should run.
//! A target fires at most once: after firing it is dropped from the watch
//! set and can never be watched again.
//!
//! [`RevealEffect`] describes what firing does to the element's inline
//! style for the two effects the site uses: skill bars filling up and cards
//! fading in.

use std::collections::HashSet;
use std::hash::Hash;

/// One intersection observation for a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    /// Fraction of the target's area inside the viewport
    pub ratio: f64,
}

impl Intersection {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self { is_intersecting, ratio }
    }
}

/// Fires a one-time effect per target once it is visible enough
#[derive(Debug, Clone)]
pub struct VisibilityTrigger<K> {
    threshold: f64,
    watching: HashSet<K>,
    fired: HashSet<K>,
}

impl<K: Eq + Hash + Clone> VisibilityTrigger<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            watching: HashSet::new(),
            fired: HashSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `key`. Returns false if it already fired or is watched.
    pub fn watch(&mut self, key: K) -> bool {
        if self.fired.contains(&key) {
            return false;
        }
        self.watching.insert(key)
    }

    /// Stop watching `key` without firing, e.g. when its element goes away.
    pub fn unwatch(&mut self, key: &K) -> bool {
        self.watching.remove(key)
    }

    /// Forget `key` entirely once its element is gone for good.
    ///
    /// Keys are never reused, so this only bounds the fired set; a retired
    /// key that is watched again starts over.
    pub fn retire(&mut self, key: &K) {
        self.watching.remove(key);
        self.fired.remove(key);
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    pub fn watched(&self) -> usize {
        self.watching.len()
    }

    /// Keys that fired and have not been retired
    pub fn fired(&self) -> usize {
        self.fired.len()
    }

    /// Feed one observation. Returns true exactly when the effect for `key`
    /// should run now.
    pub fn observe(&mut self, key: &K, sample: Intersection) -> bool {
        if !sample.is_intersecting || sample.ratio < self.threshold {
            return false;
        }
        if !self.watching.remove(key) {
            return false;
        }
        self.fired.insert(key.clone());
        true
    }
}

/// Reveal progress of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Not triggered yet; no inline style
    #[default]
    Pending,
    /// Triggered, holding the pre-animation style until the delay elapses
    Primed,
    /// Final state
    Settled,
}

/// Effect applied when a target is revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEffect {
    /// Skill bar fill, from the element's `data-progress` value
    SkillFill { progress: Option<String> },
    /// Card fade-and-rise, settled after a short delay
    FadeIn,
}

impl RevealEffect {
    /// Phase entered the moment the trigger fires
    pub fn on_trigger(&self) -> RevealPhase {
        match self {
            RevealEffect::SkillFill { .. } => RevealPhase::Settled,
            RevealEffect::FadeIn => RevealPhase::Primed,
        }
    }

    /// Whether the effect needs a delayed step after firing
    pub fn is_delayed(&self) -> bool {
        self.on_trigger() == RevealPhase::Primed
    }

    /// Inline style for `phase`
    pub fn style(&self, phase: RevealPhase) -> String {
        match (self, phase) {
            (_, RevealPhase::Pending) => String::new(),
            (RevealEffect::SkillFill { progress }, _) => {
                format!("width: {};", skill_fill_width(progress.as_deref()))
            }
            (RevealEffect::FadeIn, RevealPhase::Primed) => {
                "opacity: 0; transform: translateY(20px);".to_string()
            }
            (RevealEffect::FadeIn, RevealPhase::Settled) => {
                "opacity: 1; transform: translateY(0); transition: all 0.6s ease;".to_string()
            }
        }
    }
}

/// CSS width for a skill bar's `data-progress` value.
///
/// Missing or unparseable values fill to `0%`; numbers are clamped to
/// `0..=100`.
pub fn skill_fill_width(progress: Option<&str>) -> String {
    let percent = progress
        .and_then(|p| p.trim().trim_end_matches('%').parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .map_or(0.0, |p| p.clamp(0.0, 100.0));
    format!("{percent}%")
}
