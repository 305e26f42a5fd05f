//! Startup splash timeline: hold the logo, then lift it off the top

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo held centred
    Hold,
    /// Logo lifting off the top of the screen
    Lift,
    Done,
}

#[derive(Debug)]
pub struct SplashState {
    pub started: Instant,
    pub phase: SplashPhase,
    /// Rows the logo has moved up from centre
    pub scroll_offset: f32,
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashState {
    const HOLD: Duration = Duration::from_millis(1300);
    const LIFT: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            phase: SplashPhase::Hold,
            scroll_offset: 0.0,
        }
    }

    pub fn update(&mut self, terminal_height: u16) {
        self.update_at(Instant::now(), terminal_height);
    }

    /// Advance to `now`. The logo travels the full terminal height while
    /// lifting so it always leaves the screen. A finished splash stays finished.
    pub fn update_at(&mut self, now: Instant, terminal_height: u16) {
        if self.is_complete() {
            return;
        }

        let Some(lifting) = now
            .saturating_duration_since(self.started)
            .checked_sub(Self::HOLD)
        else {
            self.phase = SplashPhase::Hold;
            self.scroll_offset = 0.0;
            return;
        };

        if lifting >= Self::LIFT {
            self.phase = SplashPhase::Done;
            return;
        }

        let progress = lifting.as_secs_f32() / Self::LIFT.as_secs_f32();
        self.phase = SplashPhase::Lift;
        self.scroll_offset = simple_easing::cubic_out(progress) * f32::from(terminal_height);
    }

    pub fn skip(&mut self) {
        self.phase = SplashPhase::Done;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Done
    }
}
