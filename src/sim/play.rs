//! The playable round
//!
//! `PlayMode` owns the scene poses it drives, the music crossfade, the RNG
//! and the scoreboard. The host calls [`PlayMode::handle_event`] for each
//! input event, [`PlayMode::update`] once per frame, then reads the state
//! back for drawing.

use super::rng::GameRng;
use super::state::{Countdown, GamePhase, GameState};
use super::tick::{bonus_timer, respawn, spin, steer, within_reach};
use crate::audio::{Mixer, MusicFeedback};
use crate::consts::{CHEESE_HEIGHT, CHEESE_NODE, PLAYER_NODE};
use crate::error::SetupError;
use crate::hud::Hud;
use crate::input::{InputEvent, InputState, Key};
use crate::scene::{Camera, NodeHandle, Scene, Transform};
use crate::tuning::Tuning;

/// Boxy chasing cheese against the clock
#[derive(Debug)]
pub struct PlayMode<M: Mixer> {
    scene: Scene,
    boxy: NodeHandle,
    cheese: NodeHandle,
    state: GameState,
    input: InputState,
    music: MusicFeedback<M>,
    rng: GameRng,
    tuning: Tuning,
    /// Mouse captured for relative motion
    pointer_captured: bool,
}

impl<M: Mixer> PlayMode<M> {
    /// Set up a round on `scene`
    ///
    /// The scene must contain the `Player` and `Cheese` nodes and exactly
    /// one camera, and `tuning` must validate. Both music loops start here.
    pub fn new(mut scene: Scene, mixer: M, tuning: Tuning, seed: u64) -> Result<Self, SetupError> {
        tuning.validate()?;
        let boxy = scene
            .find(PLAYER_NODE)
            .ok_or_else(|| SetupError::MissingNode(PLAYER_NODE.to_string()))?;
        let cheese = scene
            .find(CHEESE_NODE)
            .ok_or_else(|| SetupError::MissingNode(CHEESE_NODE.to_string()))?;
        if scene.cameras.len() != 1 {
            return Err(SetupError::CameraCount(scene.cameras.len()));
        }

        scene[cheese].position.z = tuning.cheese_height;
        log::info!(
            "Found Boxy at {} and cheese at {}",
            scene[boxy].position,
            scene[cheese].position
        );

        let music = MusicFeedback::new(mixer, tuning.music_ramp_seconds);
        log::info!("Round started with seed: {}", seed);

        Ok(Self {
            scene,
            boxy,
            cheese,
            state: GameState::new(tuning.round_seconds),
            input: InputState::new(),
            music,
            rng: GameRng::new(seed),
            tuning,
            pointer_captured: false,
        })
    }

    /// Feed one input event; returns whether it was consumed
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown(Key::Escape) => {
                self.pointer_captured = false;
                true
            }
            InputEvent::KeyDown(key) => match key.direction() {
                Some(direction) => {
                    self.input.on_key_down(direction);
                    true
                }
                None => false,
            },
            InputEvent::KeyUp(Key::Restart) => {
                self.restart();
                true
            }
            InputEvent::KeyUp(key) => match key.direction() {
                Some(direction) => {
                    self.input.on_key_up(direction);
                    true
                }
                None => false,
            },
            InputEvent::MouseButtonDown => {
                if self.pointer_captured {
                    false
                } else {
                    self.pointer_captured = true;
                    true
                }
            }
        }
    }

    /// Advance the round by `elapsed` seconds
    ///
    /// Does nothing once the round is over: no movement, no countdown, no
    /// spin, no chomps.
    pub fn update(&mut self, elapsed: f32) {
        if self.state.phase == GamePhase::GameOver {
            return;
        }

        steer(
            &mut self.scene[self.boxy],
            self.input.intent(),
            &self.tuning,
            elapsed,
        );

        let countdown = self.state.count_down(elapsed);
        if countdown == Countdown::Expired {
            self.game_over();
        }

        spin(&mut self.scene[self.cheese], self.tuning.spin_speed, elapsed);

        // Too late to eat once the clock hit zero this frame
        if countdown == Countdown::Running {
            self.check_chomp();
        }

        self.input.consume_and_reset_down_counts();
    }

    /// One proximity check per frame; a respawn landing on Boxy scores on
    /// the next frame, not this one
    fn check_chomp(&mut self) {
        let boxy = self.scene[self.boxy].position;
        let cheese = self.scene[self.cheese].position;
        if !within_reach(cheese, boxy, self.tuning.chomp_radius) {
            return;
        }

        let timer = bonus_timer(&mut self.rng, &self.tuning);
        self.state.chomp(timer);
        log::debug!(
            "CHOMP! score {} (best {}), timer {:.2}",
            self.state.score,
            self.state.best_score,
            timer
        );
        self.spawn_cheese();
    }

    fn game_over(&mut self) {
        log::info!(
            "Game over with score {} (best {})",
            self.state.score,
            self.state.best_score
        );
        self.music.ramp_to_defeat();
    }

    /// Start a new round: full timer, zero score, normal music, fresh cheese
    pub fn restart(&mut self) {
        self.state.restart(self.tuning.round_seconds);
        self.music.ramp_to_normal();
        self.spawn_cheese();
        log::info!("Round restarted (best {})", self.state.best_score);
    }

    /// Move the cheese somewhere new on the floor
    pub fn spawn_cheese(&mut self) {
        respawn(
            &mut self.scene[self.cheese],
            &mut self.rng,
            self.tuning.floor_radius,
        );
        log::debug!("Cheese respawned at {}", self.scene[self.cheese].position);
    }

    /// Match the camera to the drawable before rendering
    pub fn prepare_draw(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        self.camera_mut().aspect = width as f32 / height as f32;
    }

    fn camera_mut(&mut self) -> &mut Camera {
        // Exactly one camera, checked in `new`
        &mut self.scene.cameras[0]
    }

    pub fn camera(&self) -> &Camera {
        &self.scene.cameras[0]
    }

    /// Text overlay for the current frame
    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> f32 {
        self.state.timer
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.state.best_score
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn boxy(&self) -> &Transform {
        &self.scene[self.boxy]
    }

    pub fn cheese(&self) -> &Transform {
        &self.scene[self.cheese]
    }

    pub fn music(&self) -> &MusicFeedback<M> {
        &self.music
    }

    pub fn music_mut(&mut self) -> &mut MusicFeedback<M> {
        &mut self.music
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn boxy_mut(&mut self) -> &mut Transform {
        &mut self.scene[self.boxy]
    }

    #[cfg(test)]
    pub(crate) fn cheese_mut(&mut self) -> &mut Transform {
        &mut self.scene[self.cheese]
    }
}

/// Minimal level with Boxy at the center, the cheese off to the side and
/// one camera
///
/// Boxy rides at the cheese's default height so the two share a plane and
/// the chomp distance is measured in X/Y only.
pub fn demo_scene() -> Scene {
    use glam::Vec3;

    let mut scene = Scene::new();
    scene.add_transform(Transform::new("Floor", Vec3::ZERO));
    scene.add_transform(Transform::new(
        PLAYER_NODE,
        Vec3::new(0.0, 0.0, CHEESE_HEIGHT),
    ));
    scene.add_transform(Transform::new(CHEESE_NODE, Vec3::new(1.0, 1.0, 0.0)));
    scene.cameras.push(Camera::default());
    scene
}
