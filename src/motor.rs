//! The movement decision core: one pass per fixed tick.
//!
//! [`step`] resolves intent, contact flags, and internal timers into at most
//! one physical action per tick: a horizontal velocity assignment plus at
//! most one of {charge increment, charge-release jump, pressed jump}. It is a
//! pure function of its arguments, so tests and external drivers can call it
//! directly without a running schedule.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::components::{Facing, MotionState};
use crate::config::MotionTuning;
use crate::intent::MotionIntent;

/// Advance one character by one fixed tick.
///
/// `jump_pressed` is the consumed-once edge from the [`crate::intent::JumpLatch`];
/// it must be taken exactly once per call. Contact flags in `state` are
/// expected to have been refreshed by sensing earlier in the same tick.
pub fn step(
    state: &mut MotionState,
    intent: &MotionIntent,
    jump_pressed: bool,
    tuning: &MotionTuning,
    dt: f32,
    velocity: &mut LinearVelocity,
) {
    resolve_crouch(state, intent.crouch_held);
    apply_horizontal(state, intent.horizontal, tuning, dt, velocity);
    resolve_vertical(state, intent, jump_pressed, tuning, velocity);
}

/// Crouch is sticky: releasing it under a blocked ceiling keeps it set.
/// Runs before movement so speed scaling sees the new state this tick.
fn resolve_crouch(state: &mut MotionState, crouch_held: bool) {
    let mut crouch = crouch_held;
    if !crouch && state.crouching && state.ceiling_blocked {
        crouch = true;
    }
    state.crouching = crouch;
}

/// Horizontal movement is a direct velocity assignment on the ground plane,
/// never a force. While the wall-jump lockout runs, the assignment is
/// skipped and the timer drains instead.
fn apply_horizontal(
    state: &mut MotionState,
    axis: f32,
    tuning: &MotionTuning,
    dt: f32,
    velocity: &mut LinearVelocity,
) {
    // Only control the character if grounded or air control is enabled
    if !(state.grounded || tuning.air_control) {
        return;
    }

    let move_axis = effective_axis(state, axis, tuning);

    if state.wall_timer > 0.0 {
        state.wall_timer -= dt;
        return;
    }

    // Preserve vertical velocity
    velocity.x = move_axis * tuning.max_speed;

    // Flip when the input direction disagrees with facing; zero input never
    // flips.
    if move_axis > 0.0 && state.facing == Facing::Left {
        state.flip();
    } else if move_axis < 0.0 && state.facing == Facing::Right {
        state.flip();
    }
}

/// Mutually exclusive charge/release/jump ladder, evaluated in fixed order.
fn resolve_vertical(
    state: &mut MotionState,
    intent: &MotionIntent,
    jump_pressed: bool,
    tuning: &MotionTuning,
    velocity: &mut LinearVelocity,
) {
    let charging = intent.crouch_held && intent.jump_held;

    if charging {
        if state.grounded && state.charge_timer <= 0.0 {
            state.charge_timer = tuning.charge_interval;
            state.charge = (state.charge + tuning.charge_increment).min(tuning.max_charged_force);
            debug!("charging: banked {}", state.charge);
        }
    } else if state.grounded && state.charge > 0.0 {
        // Releasing the charge is itself the jump trigger; no press needed.
        let force = tuning.jump_force + state.charge;
        apply_impulse(velocity, Vec2::new(0.0, force));
        state.charge = 0.0;
        debug!("charge released: jump force {}", force);
    } else if jump_pressed {
        if !state.grounded && state.against_wall {
            // Wall jump: lockout, flip, then push away diagonally. Skips the
            // jump-count bookkeeping entirely.
            state.wall_timer = tuning.wall_jump_lock_time;
            state.flip();
            apply_impulse(
                velocity,
                Vec2::new(tuning.jump_force * state.facing.sign(), tuning.jump_force),
            );
            debug!("wall jump: now facing {:?}", state.facing);
        } else {
            if state.grounded {
                // Leaving the ground this tick
                state.jump_count = 0;
                state.grounded = false;
            }

            // Checked before incrementing, so max_jumps + 1 total jumps fit
            // in one ground cycle.
            let count = state.jump_count;
            state.jump_count += 1;
            if count <= tuning.max_jumps {
                apply_impulse(velocity, Vec2::new(0.0, tuning.jump_force));
                if count == 0 {
                    debug!("jumping from ground");
                } else {
                    debug!("jumping in air {}", count);
                }
            }
        }
    }
}

/// Raw axis input scaled down while crouching. Also feeds the speed
/// animation signal.
pub(crate) fn effective_axis(state: &MotionState, axis: f32, tuning: &MotionTuning) -> f32 {
    if state.crouching {
        axis * tuning.crouch_speed_factor
    } else {
        axis
    }
}

/// Jumps are additive impulses rather than assignments, so mid-air re-jumps
/// stack with existing velocity.
fn apply_impulse(velocity: &mut LinearVelocity, impulse: Vec2) {
    velocity.0 += impulse;
}
