//! Controller domain: tuning, validation, and RON loading.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Movement tuning for one character. Fixed at construction; the decision
/// core never mutates it.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Top horizontal speed, assigned directly to the body on the ground
    /// plane.
    pub max_speed: f32,
    /// Impulse applied for a plain jump; charge and wall jumps build on it.
    pub jump_force: f32,
    /// Cap on the banked charge force. 0 disables charging entirely.
    pub max_charged_force: f32,
    /// Air-jump budget per ground cycle. The count check is `count <=
    /// max_jumps` before incrementing, so `max_jumps + 1` total jumps are
    /// permitted; kept as-is for behavioral fidelity.
    pub max_jumps: u32,
    /// Fraction of `max_speed` available while crouching, in `[0, 1]`.
    pub crouch_speed_factor: f32,
    /// Whether horizontal input steers the character while airborne.
    pub air_control: bool,
    /// Charge banked per increment tick.
    pub charge_increment: f32,
    /// Minimum time between charge increments.
    pub charge_interval: f32,
    /// Horizontal control lockout after a wall jump.
    pub wall_jump_lock_time: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            jump_force: 520.0,
            max_charged_force: 420.0,
            max_jumps: 3,
            crouch_speed_factor: 0.36,
            air_control: false,
            charge_increment: 8.0,
            charge_interval: 0.02,
            wall_jump_lock_time: 0.7,
        }
    }
}

impl MotionTuning {
    /// Reject tunings that would make the decision core misbehave. Runs at
    /// construction, never at tick time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("max_speed", self.max_speed),
            ("jump_force", self.jump_force),
            ("max_charged_force", self.max_charged_force),
            ("charge_increment", self.charge_increment),
            ("charge_interval", self.charge_interval),
            ("wall_jump_lock_time", self.wall_jump_lock_time),
        ];
        for (field, value) in non_negative {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.crouch_speed_factor) {
            return Err(ConfigError::InvalidValue {
                field: "crouch_speed_factor",
                value: self.crouch_speed_factor,
            });
        }
        Ok(())
    }

    /// Validate and return the tuning, for chained construction.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Parse a tuning from RON text. Missing fields fall back to defaults;
    /// the result is validated before it is returned.
    pub fn from_ron_str(source: &str) -> Result<Self, TuningLoadError> {
        let tuning: MotionTuning =
            ron_options()
                .from_str(source)
                .map_err(|e| TuningLoadError {
                    file: "<inline>".to_string(),
                    message: format!("Parse error: {}", e),
                })?;
        tuning.validated().map_err(|e| TuningLoadError {
            file: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a tuning from a RON file on disk.
    pub fn from_ron_file(path: &Path) -> Result<Self, TuningLoadError> {
        let file_name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        })?;
        Self::from_ron_str(&contents).map_err(|e| TuningLoadError {
            file: file_name,
            message: e.message,
        })
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Which overlap probe a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    Ground,
    Wall,
    Ceiling,
}

impl ProbeKind {
    pub(crate) fn radius_field(self) -> &'static str {
        match self {
            ProbeKind::Ground => "ground_radius",
            ProbeKind::Wall => "wall_radius",
            ProbeKind::Ceiling => "ceiling_radius",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ProbeKind::Ground => "ground",
            ProbeKind::Wall => "wall",
            ProbeKind::Ceiling => "ceiling",
        }
    }
}

/// A construction-time configuration error. Characters carrying one of
/// these never enter the simulation loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required probe was never given a position.
    MissingProbe(ProbeKind),
    /// A numeric field is negative, non-finite, or out of range.
    InvalidValue { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingProbe(kind) => {
                write!(f, "missing {} probe position", kind.name())
            }
            ConfigError::InvalidValue { field, value } => {
                write!(f, "invalid value {} for field '{}'", value, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for tuning-file loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for TuningLoadError {}
