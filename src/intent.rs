//! Controller domain: per-tick movement intent and jump edge latching.

use bevy::prelude::*;

/// Normalized movement intent for one character, written by the host's input
/// layer (or the built-in keyboard adapter) every frame.
///
/// Charge intent is derived inside the core as `crouch_held && jump_held`;
/// there is no separate charge field.
#[derive(Component, Debug, Clone, Default)]
pub struct MotionIntent {
    /// Horizontal axis in `[-1, 1]`.
    pub horizontal: f32,
    pub crouch_held: bool,
    pub jump_held: bool,
}

/// Edge detector for the jump button.
///
/// Input is sampled at frame rate while decisions run at the fixed tick rate,
/// so presses are latched here between ticks and consumed exactly once per
/// decision pass via [`JumpLatch::take`]. A press can never fire two jumps.
#[derive(Component, Debug, Default)]
pub struct JumpLatch {
    latched: bool,
    held_prev: bool,
}

impl JumpLatch {
    /// Latch a press directly, for input sources that already deliver edges.
    pub fn press(&mut self) {
        self.latched = true;
    }

    /// Feed the current held state; latches on the rising edge. For input
    /// sources that only expose level state (gamepad triggers, AI).
    pub fn observe(&mut self, held: bool) {
        if held && !self.held_prev {
            self.latched = true;
        }
        self.held_prev = held;
    }

    /// Consume the latched press. Clears the latch.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.latched)
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
