use serde::{Deserialize, Serialize};

use crate::input::ActionSnapshot;

/// Core trait for a single-player tick simulation.
///
/// The host owns scheduling, input capture and drawing; the game only
/// advances its own state one logical frame at a time.
pub trait TickGame {
    /// Game metadata for titles and the status bar.
    fn metadata(&self) -> GameMetadata;

    /// Advance one frame using the input snapshot read at the top of the tick.
    /// Returns the notifications produced during the tick, in order.
    fn tick(&mut self, input: &ActionSnapshot) -> Vec<GameEvent>;

    /// Whether the win condition currently holds.
    fn is_won(&self) -> bool;

    /// Human-readable status for a text element outside the canvas.
    fn status_line(&self) -> String;
}

/// Static description of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
}

/// Notifications emitted by a game during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The collected count changed; carries the new count.
    ScoreChanged { collected: u32, total: u32 },
    /// Every pickup has been collected. Repeated each tick while it holds.
    Won,
}

impl GameEvent {
    pub fn is_score_change(&self) -> bool {
        matches!(self, GameEvent::ScoreChanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_change_classification() {
        let ev = GameEvent::ScoreChanged {
            collected: 1,
            total: 3,
        };
        assert!(ev.is_score_change());
        assert!(!GameEvent::Won.is_score_change());
    }
}
