//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display
    Display,
    /// Logo sliding up off the screen
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    start_time: Instant,
    pub phase: SplashPhase,
    /// Current vertical offset in rows
    pub scroll_offset: f32,
}

impl SplashState {
    /// How long the logo holds before sliding away
    const DISPLAY_DURATION: Duration = Duration::from_millis(1200);
    /// Length of the slide
    const ANIMATION_DURATION: Duration = Duration::from_millis(700);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Advance the animation to `elapsed` since start
    fn advance(&mut self, elapsed: Duration, terminal_height: u16) {
        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let progress = (elapsed - Self::DISPLAY_DURATION).as_secs_f32()
                / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out so the logo decelerates as it leaves
            self.scroll_offset = simple_easing::cubic_out(progress) * terminal_height as f32;
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Update animation state based on wall-clock time
    pub fn update(&mut self, terminal_height: u16) {
        let elapsed = self.start_time.elapsed();
        self.advance(elapsed, terminal_height);
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_completes() {
        let mut state = SplashState::new();
        state.skip();
        state.skip();
        assert!(state.is_complete());
    }

    #[test]
    fn test_update_stays_in_display_phase_initially() {
        let mut state = SplashState::new();
        state.update(24);
        assert_eq!(state.phase, SplashPhase::Display);
    }

    #[test]
    fn test_scroll_phase_moves_logo_up() {
        let mut state = SplashState::new();
        state.advance(SplashState::DISPLAY_DURATION + Duration::from_millis(350), 40);
        assert_eq!(state.phase, SplashPhase::ScrollUp);
        assert!(state.scroll_offset > 0.0);
        assert!(state.scroll_offset < 40.0);
    }

    #[test]
    fn test_completes_after_animation() {
        let mut state = SplashState::new();
        state.advance(
            SplashState::DISPLAY_DURATION + SplashState::ANIMATION_DURATION,
            40,
        );
        assert!(state.is_complete());
    }
}
