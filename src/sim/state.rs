//! Round state: countdown, score, and phase

use serde::{Deserialize, Serialize};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Timer running, Boxy can move
    Playing,
    /// Timer ran out; nothing moves until restart
    GameOver,
}

/// What a countdown step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Still time left
    Running,
    /// Hit zero on this step
    Expired,
    /// Round was already over
    Idle,
}

/// Scoreboard and timer of the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seconds left (never negative)
    pub timer: f32,
    /// Cheese eaten this round
    pub score: u32,
    /// Best score of any round this session
    pub best_score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh session with `round_seconds` on the clock
    pub fn new(round_seconds: f32) -> Self {
        Self {
            timer: round_seconds,
            score: 0,
            best_score: 0,
            phase: GamePhase::Playing,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Run the clock down by `elapsed`, clamping at zero
    ///
    /// Returns [`Countdown::Expired`] exactly once per round, on the step
    /// that moves the phase to `GameOver`.
    pub fn count_down(&mut self, elapsed: f32) -> Countdown {
        if self.is_game_over() {
            return Countdown::Idle;
        }
        self.timer -= elapsed;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            self.phase = GamePhase::GameOver;
            return Countdown::Expired;
        }
        Countdown::Running
    }

    /// Credit one chomp and re-arm the timer with `timer`
    pub fn chomp(&mut self, timer: f32) {
        self.score += 1;
        self.best_score = self.best_score.max(self.score);
        self.timer = timer;
    }

    /// Start a new round; the best score survives
    pub fn restart(&mut self, round_seconds: f32) {
        self.timer = round_seconds;
        self.score = 0;
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(3.0);
        assert_eq!(state.timer, 3.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 0);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_count_down_clamps_and_expires_once() {
        let mut state = GameState::new(0.05);
        assert_eq!(state.count_down(0.1), Countdown::Expired);
        assert_eq!(state.timer, 0.0);
        assert!(state.is_game_over());

        assert_eq!(state.count_down(0.1), Countdown::Idle);
        assert_eq!(state.timer, 0.0);
    }

    #[test]
    fn test_count_down_exact_zero_expires() {
        let mut state = GameState::new(0.5);
        assert_eq!(state.count_down(0.5), Countdown::Expired);
    }

    #[test]
    fn test_chomp_tracks_best() {
        let mut state = GameState::new(3.0);
        state.chomp(4.0);
        state.chomp(3.5);
        assert_eq!(state.score, 2);
        assert_eq!(state.best_score, 2);
        assert_eq!(state.timer, 3.5);

        state.restart(3.0);
        state.chomp(3.0);
        assert_eq!(state.score, 1);
        assert_eq!(state.best_score, 2);
    }

    #[test]
    fn test_restart_keeps_best() {
        let mut state = GameState::new(3.0);
        state.chomp(3.0);
        state.count_down(10.0);
        assert!(state.is_game_over());

        state.restart(3.0);
        assert_eq!(state.timer, 3.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
