//! Keyboard/mouse input tracking
//!
//! Raw events are folded into per-direction button state once per event;
//! the game reads that state during its tick and then clears the press
//! counters.

use glam::Vec2;

/// Logical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Start a new round (Enter)
    Restart,
    /// Release the pointer (Escape)
    Escape,
    /// Anything else
    Other,
}

impl Key {
    /// Movement direction for this key, if it is one
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Raw input event delivered by the window layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseButtonDown,
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// State of one directional button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    /// Key-down events since the last tick
    pub downs: u8,
    /// Currently held
    pub pressed: bool,
}

/// Held state and press counters for the movement keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: Button,
    pub right: Button,
    pub up: Button,
    pub down: Button,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self, direction: Direction) -> &Button {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    fn button_mut(&mut self, direction: Direction) -> &mut Button {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    pub fn on_key_down(&mut self, direction: Direction) {
        let button = self.button_mut(direction);
        // Key repeat can pile up downs between ticks
        button.downs = button.downs.saturating_add(1);
        button.pressed = true;
    }

    pub fn on_key_up(&mut self, direction: Direction) {
        self.button_mut(direction).pressed = false;
    }

    /// Zero all press counters (once per tick, after movement)
    pub fn consume_and_reset_down_counts(&mut self) {
        self.left.downs = 0;
        self.right.downs = 0;
        self.up.downs = 0;
        self.down.downs = 0;
    }

    /// Steering intent from held buttons
    ///
    /// Each axis is -1, 0 or +1. Holding both keys of a pair cancels out.
    /// The result is not normalized.
    pub fn intent(&self) -> Vec2 {
        let axis = |neg: &Button, pos: &Button| match (neg.pressed, pos.pressed) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };
        Vec2::new(axis(&self.left, &self.right), axis(&self.down, &self.up))
    }
}
