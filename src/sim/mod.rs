//! Game simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only (same seed, same cheese spawns)
//! - Caller-supplied frame time
//! - No rendering or platform dependencies

pub mod play;
pub mod rng;
pub mod state;
pub mod tick;

pub use play::{PlayMode, demo_scene};
pub use rng::GameRng;
pub use state::{Countdown, GamePhase, GameState};
pub use tick::{bonus_timer, rearm_timer, respawn, spin, steer, within_reach};
