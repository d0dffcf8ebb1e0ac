//! Controller domain: system modules for the fixed-tick update chain.

pub mod input;
pub(crate) mod locomotion;
pub(crate) mod sensing;

pub use input::read_keyboard;
pub(crate) use locomotion::{mirror_facing, publish_signals, resolve_motion};
pub(crate) use sensing::sense_contacts;
