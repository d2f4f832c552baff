//! Boxy & Cheese - a tiny arcade chase game
//!
//! Core modules:
//! - `sim`: Game state machine (movement, countdown, chomp detection, respawn)
//! - `input`: Directional button tracking
//! - `scene`: Transform node table the game mutates
//! - `audio`: Looping music channels and the win/lose crossfade
//! - `tuning`: Data-driven game balance
//! - `hud`: Read-only view of the round for text overlays

pub mod audio;
pub mod error;
pub mod hud;
pub mod input;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use error::{SetupError, TuningError};
pub use tuning::Tuning;

use glam::{Quat, Vec3};

/// Game configuration constants
pub mod consts {
    /// Scene node the player steers
    pub const PLAYER_NODE: &str = "Player";
    /// Scene node of the spinning target
    pub const CHEESE_NODE: &str = "Cheese";

    /// Player translation speed (units/s)
    pub const PLAYER_SPEED: f32 = 30.0;
    /// Player turn rate (radians/s)
    pub const ROTATION_SPEED: f32 = 10.0;
    /// Cheese spin rate (radians/s)
    pub const SPIN_SPEED: f32 = 5.0;

    /// Distance at which Boxy eats the cheese
    pub const CHOMP_RADIUS: f32 = 0.2;
    /// Radius of the floor disk the cheese respawns on
    pub const FLOOR_RADIUS: f32 = 2.0;
    /// Height the cheese floats at
    pub const CHEESE_HEIGHT: f32 = 0.2;

    /// Countdown at the start of every round (seconds)
    pub const ROUND_SECONDS: f32 = 3.0;
    /// Maximum random bonus added on top of `ROUND_SECONDS` after a chomp
    pub const BONUS_SECONDS: f32 = 2.0;

    /// Music crossfade duration (seconds)
    pub const MUSIC_RAMP_SECONDS: f32 = 0.25;

    /// Fixed frame step used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Rotation about the world Z axis by `angle` radians
#[inline]
pub fn yaw(angle: f32) -> Quat {
    Quat::from_axis_angle(Vec3::Z, angle)
}
