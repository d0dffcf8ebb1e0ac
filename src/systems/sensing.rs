//! Controller domain: environment probing before the decision pass.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::components::{AnimationSignals, CharacterMotor, MotionState, ProbeRig};

/// Refresh contact flags from overlap probes and advance the free-running
/// charge countdown. Runs first in the fixed-tick chain so the decision pass
/// always sees this tick's geometry.
pub(crate) fn sense_contacts(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &ProbeRig,
            &LinearVelocity,
            &mut MotionState,
            &mut AnimationSignals,
        ),
        With<CharacterMotor>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, transform, rig, velocity, mut state, mut signals) in &mut query {
        // Probes must never detect the character's own body
        let filter = SpatialQueryFilter::from_mask(rig.mask).with_excluded_entities([entity]);
        let origin = transform.translation.truncate();

        let was_grounded = state.grounded;
        state.grounded = overlaps(&spatial_query, origin + rig.ground_offset, rig.ground_radius, &filter);

        // The wall probe rides on the facing side
        let wall_point = origin
            + Vec2::new(
                rig.wall_offset.x * state.facing.sign(),
                rig.wall_offset.y,
            );
        state.against_wall = overlaps(&spatial_query, wall_point, rig.wall_radius, &filter);

        state.ceiling_blocked = overlaps(
            &spatial_query,
            origin + rig.ceiling_offset,
            rig.ceiling_radius,
            &filter,
        );

        if state.grounded && !was_grounded {
            debug!("landed: jump_count={}", state.jump_count);
        }

        // Vertical speed is sampled here, before this tick's impulses
        signals.grounded = state.grounded;
        signals.vertical_speed = velocity.y;

        state.tick_charge_timer(dt);
    }
}

fn overlaps(
    spatial_query: &SpatialQuery,
    point: Vec2,
    radius: f32,
    filter: &SpatialQueryFilter,
) -> bool {
    !spatial_query
        .shape_intersections(&Collider::circle(radius), point, 0.0, filter)
        .is_empty()
}
