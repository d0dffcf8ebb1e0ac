//! Controller domain: components, physics layers, and probe configuration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::{ConfigError, MotionTuning, ProbeKind};
use crate::intent::{JumpLatch, MotionIntent};

/// Physics layers for probe filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground and wall surfaces the probes should detect
    Ground,
    /// Controlled characters
    Character,
}

/// Marker for entities driven by the movement controller.
#[derive(Component, Debug)]
pub struct CharacterMotor;

impl CharacterMotor {
    /// Build the full component set for a controlled character.
    ///
    /// Validates the tuning up front; probe validation happens in
    /// [`ProbeRig::builder`]. The host is expected to add the physics body
    /// (`RigidBody::Dynamic`, a `Collider`, and `LinearVelocity`) itself.
    pub fn bundle(tuning: MotionTuning, probes: ProbeRig) -> Result<impl Bundle, ConfigError> {
        tuning.validate()?;
        let state = MotionState::with_tuning(&tuning);
        Ok((
            CharacterMotor,
            state,
            tuning,
            probes,
            MotionIntent::default(),
            JumpLatch::default(),
            AnimationSignals::default(),
        ))
    }
}

/// Mutable per-character motion state, advanced once per fixed tick.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Ground probe overlapped this tick. Recomputed every tick.
    pub grounded: bool,
    /// Wall probe overlapped this tick. Recomputed every tick.
    pub against_wall: bool,
    /// Ceiling probe overlapped this tick. Recomputed every tick.
    pub ceiling_blocked: bool,
    /// Sticky while the ceiling probe is blocked.
    pub crouching: bool,
    pub facing: Facing,
    /// Jumps performed since the last grounded jump initiation.
    pub jump_count: u32,
    /// Banked charge force, in `[0, max_charged_force]`.
    pub charge: f32,
    /// Free-running countdown gating the charge increment rate.
    pub charge_timer: f32,
    /// Horizontal control lockout after a wall jump.
    pub wall_timer: f32,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            grounded: false,
            against_wall: false,
            ceiling_blocked: false,
            crouching: false,
            facing: Facing::Right,
            jump_count: 0,
            charge: 0.0,
            charge_timer: 0.0,
            wall_timer: 0.0,
        }
    }
}

impl MotionState {
    /// Fresh state with the charge timer primed to the tuning interval.
    pub fn with_tuning(tuning: &MotionTuning) -> Self {
        Self {
            charge_timer: tuning.charge_interval,
            ..Self::default()
        }
    }

    /// Toggle facing. Triggered by directional reversal or a wall jump;
    /// the transform mirror is applied separately by `mirror_facing`.
    pub fn flip(&mut self) {
        self.facing = match self.facing {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        };
    }

    /// Advance the free-running charge countdown. Called once per sensing
    /// pass; the timer is only ever reset by a charge increment.
    pub fn tick_charge_timer(&mut self, dt: f32) {
        self.charge_timer -= dt;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Presentation signals published once per tick for the host's animator.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AnimationSignals {
    pub grounded: bool,
    /// Vertical velocity as sampled at sensing time, before this tick's
    /// impulses.
    pub vertical_speed: f32,
    pub crouching: bool,
    /// Magnitude of the effective move input after crouch scaling.
    pub speed: f32,
}

/// Overlap probe layout, relative to the character transform.
///
/// The wall probe's x offset is mirrored to the facing side each tick, so a
/// single offset covers both orientations.
#[derive(Component, Debug, Clone)]
pub struct ProbeRig {
    pub ground_offset: Vec2,
    pub ground_radius: f32,
    pub wall_offset: Vec2,
    pub wall_radius: f32,
    pub ceiling_offset: Vec2,
    pub ceiling_radius: f32,
    /// What counts as ground/wall/ceiling geometry.
    pub mask: LayerMask,
}

impl ProbeRig {
    pub fn builder() -> ProbeRigBuilder {
        ProbeRigBuilder::default()
    }
}

/// Builder for [`ProbeRig`]. All three probes are required; a missing probe
/// or a non-positive radius is a construction error, keeping a misconfigured
/// character out of the simulation loop entirely.
#[derive(Debug, Default)]
pub struct ProbeRigBuilder {
    ground: Option<(Vec2, f32)>,
    wall: Option<(Vec2, f32)>,
    ceiling: Option<(Vec2, f32)>,
    mask: Option<LayerMask>,
}

impl ProbeRigBuilder {
    pub fn ground(mut self, offset: Vec2, radius: f32) -> Self {
        self.ground = Some((offset, radius));
        self
    }

    pub fn wall(mut self, offset: Vec2, radius: f32) -> Self {
        self.wall = Some((offset, radius));
        self
    }

    pub fn ceiling(mut self, offset: Vec2, radius: f32) -> Self {
        self.ceiling = Some((offset, radius));
        self
    }

    pub fn mask(mut self, mask: impl Into<LayerMask>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    pub fn build(self) -> Result<ProbeRig, ConfigError> {
        let (ground_offset, ground_radius) = Self::probe(self.ground, ProbeKind::Ground)?;
        let (wall_offset, wall_radius) = Self::probe(self.wall, ProbeKind::Wall)?;
        let (ceiling_offset, ceiling_radius) = Self::probe(self.ceiling, ProbeKind::Ceiling)?;
        Ok(ProbeRig {
            ground_offset,
            ground_radius,
            wall_offset,
            wall_radius,
            ceiling_offset,
            ceiling_radius,
            mask: self.mask.unwrap_or_else(|| GameLayer::Ground.into()),
        })
    }

    fn probe(slot: Option<(Vec2, f32)>, kind: ProbeKind) -> Result<(Vec2, f32), ConfigError> {
        let (offset, radius) = slot.ok_or(ConfigError::MissingProbe(kind))?;
        if radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: kind.radius_field(),
                value: radius,
            });
        }
        Ok((offset, radius))
    }
}
