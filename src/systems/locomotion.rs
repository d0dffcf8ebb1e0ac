//! Controller domain: decision pass, animation signals, and facing mirror.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::components::{AnimationSignals, CharacterMotor, MotionState};
use crate::config::MotionTuning;
use crate::intent::{JumpLatch, MotionIntent};
use crate::motor;

/// Run the decision core once per character per fixed tick. The jump latch
/// is drained here, exactly once, whatever branch the core takes.
pub(crate) fn resolve_motion(
    time: Res<Time>,
    mut query: Query<
        (
            &MotionIntent,
            &mut JumpLatch,
            &MotionTuning,
            &mut MotionState,
            &mut LinearVelocity,
        ),
        With<CharacterMotor>,
    >,
) {
    let dt = time.delta_secs();

    for (intent, mut latch, tuning, mut state, mut velocity) in &mut query {
        let jump_pressed = latch.take();
        motor::step(&mut state, intent, jump_pressed, tuning, dt, &mut velocity);
    }
}

/// Publish the post-decision signals for the host's animator. Grounded is
/// re-published here because a grounded jump clears it mid-tick.
pub(crate) fn publish_signals(
    mut query: Query<
        (
            &MotionState,
            &MotionIntent,
            &MotionTuning,
            &mut AnimationSignals,
        ),
        With<CharacterMotor>,
    >,
) {
    for (state, intent, tuning, mut signals) in &mut query {
        signals.grounded = state.grounded;
        signals.crouching = state.crouching;
        signals.speed = motor::effective_axis(state, intent.horizontal, tuning).abs();
    }
}

/// Mirror the transform's horizontal scale to match facing.
pub(crate) fn mirror_facing(
    mut query: Query<(&MotionState, &mut Transform), With<CharacterMotor>>,
) {
    for (state, mut transform) in &mut query {
        let target = state.facing.sign() * transform.scale.x.abs();
        if transform.scale.x != target {
            transform.scale.x = target;
        }
    }
}
