//! HUD text overlay
//!
//! Plain strings for the presentation layer to draw; layout and fonts live
//! with the renderer.

use serde::Serialize;

use crate::sim::GameState;

/// Instruction banner shown at the bottom of the screen
pub const INSTRUCTIONS: &str =
    "WASD to move Boxy. Eat cheese to survive. Time runs out, you die.";

/// Banner shown once the timer runs out
pub const GAME_OVER: &str = "GAME OVER! Press Enter to restart.";

/// Text lines for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub instructions: &'static str,
    /// Whole seconds left, rounded up
    pub timer: String,
    pub score: String,
    /// Only while the round is over
    pub game_over: Option<&'static str>,
    /// Only while the round is over
    pub best: Option<String>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let over = state.is_game_over();
        Self {
            instructions: INSTRUCTIONS,
            timer: format!("Timer:{}", state.timer.ceil() as i32),
            score: format!("Score:{}", state.score),
            game_over: over.then_some(GAME_OVER),
            best: over.then(|| format!("Best:{}", state.best_score)),
        }
    }

    /// All visible lines, top to bottom
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.timer.as_str(), self.score.as_str()];
        if let Some(banner) = self.game_over {
            lines.push(banner);
        }
        if let Some(best) = &self.best {
            lines.push(best);
        }
        lines.push(self.instructions);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_hud() {
        let mut state = GameState::new(3.0);
        state.timer = 2.1;
        state.score = 4;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.timer, "Timer:3");
        assert_eq!(hud.score, "Score:4");
        assert!(hud.game_over.is_none());
        assert!(hud.best.is_none());
        assert_eq!(hud.lines(), vec!["Timer:3", "Score:4", INSTRUCTIONS]);
    }

    #[test]
    fn test_game_over_hud() {
        let mut state = GameState::new(3.0);
        state.best_score = 7;
        state.count_down(5.0);
        let hud = Hud::from_state(&state);
        assert_eq!(hud.timer, "Timer:0");
        assert_eq!(hud.game_over, Some(GAME_OVER));
        assert_eq!(hud.best.as_deref(), Some("Best:7"));
        assert_eq!(hud.lines().len(), 5);
    }
}
