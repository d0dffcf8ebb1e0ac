//! # `platformer-controller`
//!
//! A 2D platform-game character movement controller for bevy + avian2d.
//!
//! Each fixed tick, the controller resolves player intent, environment
//! contact, and internal timers into a single consistent action:
//! - Ground and air horizontal locomotion with crouch speed scaling
//! - Sticky crouch under low ceilings
//! - Multi-jump with a per-ground-cycle budget
//! - A charge-up jump: hold crouch + jump to bank force, release to fire
//! - Wall jumps with a temporary horizontal-control lockout
//!
//! ## Architecture
//!
//! One chained `FixedUpdate` pass per tick:
//! 1. `sense_contacts` — circle overlap probes set grounded / wall / ceiling
//!    flags and sample vertical speed
//! 2. `resolve_motion` — the decision core ([`motor::step`]) turns intent and
//!    contact into velocity assignments and jump impulses
//! 3. `publish_signals` — animation signals for the host
//! 4. `mirror_facing` — transform scale follows facing
//!
//! Input is sampled at frame rate into [`intent::MotionIntent`] and a
//! [`intent::JumpLatch`] that guarantees each press fires at most once.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use avian2d::prelude::*;
//! use bevy::prelude::*;
//! use platformer_controller::prelude::*;
//!
//! fn spawn_player(mut commands: Commands) -> Result<(), ConfigError> {
//!     let probes = ProbeRig::builder()
//!         .ground(Vec2::new(0.0, -26.0), 6.0)
//!         .wall(Vec2::new(14.0, 0.0), 4.0)
//!         .ceiling(Vec2::new(0.0, 26.0), 3.0)
//!         .build()?;
//!     commands.spawn((
//!         CharacterMotor::bundle(MotionTuning::default(), probes)?,
//!         RigidBody::Dynamic,
//!         Collider::capsule(12.0, 28.0),
//!         LinearVelocity::default(),
//!         Transform::default(),
//!     ));
//!     Ok(())
//! }
//! ```

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod intent;
pub mod motor;
pub mod systems;


pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::components::{
        AnimationSignals, CharacterMotor, Facing, GameLayer, MotionState, ProbeRig,
    };
    pub use crate::config::{ConfigError, MotionTuning, ProbeKind, TuningLoadError};
    pub use crate::intent::{JumpLatch, MotionIntent};
    pub use crate::PlatformerControllerPlugin;
}

/// Adds the fixed-tick controller systems. With `keyboard_adapter` set, the
/// built-in keyboard sampler also runs every frame; otherwise the host feeds
/// [`intent::MotionIntent`] and [`intent::JumpLatch`] itself.
#[derive(Default)]
pub struct PlatformerControllerPlugin {
    pub keyboard_adapter: bool,
}

impl PlatformerControllerPlugin {
    /// Plugin with the built-in keyboard adapter enabled.
    pub fn with_keyboard_adapter() -> Self {
        Self {
            keyboard_adapter: true,
        }
    }
}

impl Plugin for PlatformerControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                systems::sense_contacts,
                systems::resolve_motion,
                systems::publish_signals,
                systems::mirror_facing,
            )
                .chain(),
        );
        if self.keyboard_adapter {
            app.add_systems(Update, systems::read_keyboard);
        }
    }
}
