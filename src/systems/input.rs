//! Controller domain: built-in keyboard adapter.
//!
//! Optional convenience; hosts with their own input layer write
//! [`MotionIntent`] and feed the [`JumpLatch`] themselves instead.

use bevy::prelude::*;

use crate::components::CharacterMotor;
use crate::intent::{JumpLatch, MotionIntent};

/// Sample the keyboard into every controlled character's intent. Runs at
/// frame rate; presses are latched so fixed ticks never miss an edge.
///
/// Bindings: A/D or arrows for the axis, LeftControl to crouch, Space to
/// jump. Holding crouch and jump together charges.
pub fn read_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut MotionIntent, &mut JumpLatch), With<CharacterMotor>>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let crouch = keyboard.pressed(KeyCode::ControlLeft);
    let jump = keyboard.pressed(KeyCode::Space);
    let jump_edge = keyboard.just_pressed(KeyCode::Space);

    for (mut intent, mut latch) in &mut query {
        intent.horizontal = x;
        intent.crouch_held = crouch;
        intent.jump_held = jump;
        if jump_edge {
            latch.press();
        }
    }
}
