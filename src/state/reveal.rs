//! Once-per-section reveal animation

use super::app_state::Section;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Tracks when each section first came into view. A section reveals only
/// once; later visits render it fully shown.
#[derive(Debug, Default)]
pub struct RevealTracker {
    started: HashMap<Section, Instant>,
}

impl RevealTracker {
    pub const DURATION: Duration = Duration::from_millis(600);

    /// Returns true the first time `section` is seen
    pub fn mark_in_view(&mut self, section: Section) -> bool {
        self.mark_in_view_at(section, Instant::now())
    }

    pub fn mark_in_view_at(&mut self, section: Section, now: Instant) -> bool {
        if self.has_revealed(section) {
            return false;
        }
        self.started.insert(section, now);
        true
    }

    pub fn has_revealed(&self, section: Section) -> bool {
        self.started.contains_key(&section)
    }

    /// Eased progress in 0.0..=1.0; 0.0 for sections never seen
    pub fn progress(&self, section: Section) -> f32 {
        self.progress_at(section, Instant::now())
    }

    pub fn progress_at(&self, section: Section, now: Instant) -> f32 {
        let Some(start) = self.started.get(&section) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(*start);
        let linear = (elapsed.as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        simple_easing::cubic_out(linear)
    }

    /// Whether any section is still mid-reveal
    pub fn is_animating(&self) -> bool {
        self.is_animating_at(Instant::now())
    }

    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.started
            .values()
            .any(|start| now.saturating_duration_since(*start) < Self::DURATION)
    }
}
