//! Braille "dot" spinner used as a liveness indicator.

/// Spinner frames, advanced once per tick.
pub const DOT_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Milliseconds between ticks (10 frames per second).
pub const TICK_RATE_MS: u64 = 100;

/// Spinner animation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// Advance to the next frame, wrapping at the end.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % DOT_FRAMES.len();
    }

    /// Current frame glyph.
    pub fn frame(&self) -> &'static str {
        DOT_FRAMES[self.frame]
    }
}
