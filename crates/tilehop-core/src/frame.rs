//! Frame driver: one update + render cycle per display tick.
//!
//! The driver never schedules itself. A host either calls [`FrameDriver::step`]
//! from its own refresh callback (the browser's `requestAnimationFrame`), or
//! hands [`FrameDriver::run`] a [`FrameSource`] that yields one input snapshot
//! per frame until the host decides to stop.

use crate::game_trait::{GameEvent, TickGame};
use crate::input::ActionSnapshot;

/// Supplies the input snapshot for each frame. Returning `None` ends the loop.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<ActionSnapshot>;
}

/// Draws the game after each tick.
pub trait FrameRenderer<G> {
    fn render(&mut self, game: &G, events: &[GameEvent]);
}

/// Renderer that draws nothing. Useful for headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl<G> FrameRenderer<G> for NullRenderer {
    fn render(&mut self, _game: &G, _events: &[GameEvent]) {}
}

/// Owns a game and its renderer and advances them together.
pub struct FrameDriver<G, R> {
    game: G,
    renderer: R,
    frame: u64,
    won: bool,
}

impl<G: TickGame, R: FrameRenderer<G>> FrameDriver<G, R> {
    pub fn new(game: G, renderer: R) -> Self {
        let won = game.is_won();
        Self {
            game,
            renderer,
            frame: 0,
            won,
        }
    }

    /// Run one logically atomic frame: tick with `input`, then render.
    pub fn step(&mut self, input: &ActionSnapshot) -> Vec<GameEvent> {
        let events = self.game.tick(input);
        self.renderer.render(&self.game, &events);
        self.frame += 1;

        let won = self.game.is_won();
        if won && !self.won {
            tracing::info!(frame = self.frame, "win condition reached");
        }
        self.won = won;
        events
    }

    /// Drive frames until `source` runs dry. Returns the number of frames run.
    pub fn run<S: FrameSource + ?Sized>(&mut self, source: &mut S) -> u64 {
        let start = self.frame;
        while let Some(input) = source.next_frame() {
            self.step(&input);
        }
        self.frame - start
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_trait::GameMetadata;
    use crate::input::Action;
    use crate::test_helpers::ScriptedFrames;

    /// Counts jump presses; "wins" after three.
    #[derive(Default)]
    struct JumpCounter {
        jumps: u32,
    }

    impl TickGame for JumpCounter {
        fn metadata(&self) -> GameMetadata {
            GameMetadata {
                name: "Jump Counter".to_string(),
                description: "test".to_string(),
            }
        }

        fn tick(&mut self, input: &ActionSnapshot) -> Vec<GameEvent> {
            let mut events = Vec::new();
            if input.jump {
                self.jumps += 1;
                events.push(GameEvent::ScoreChanged {
                    collected: self.jumps,
                    total: 3,
                });
            }
            if self.is_won() {
                events.push(GameEvent::Won);
            }
            events
        }

        fn is_won(&self) -> bool {
            self.jumps >= 3
        }

        fn status_line(&self) -> String {
            format!("{}/3", self.jumps)
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(String, usize)>,
    }

    impl FrameRenderer<JumpCounter> for RecordingRenderer {
        fn render(&mut self, game: &JumpCounter, events: &[GameEvent]) {
            self.frames.push((game.status_line(), events.len()));
        }
    }

    #[test]
    fn step_ticks_then_renders() {
        let mut driver = FrameDriver::new(JumpCounter::default(), RecordingRenderer::default());
        let events = driver.step(&ActionSnapshot::idle().with(Action::Jump));
        assert_eq!(events.len(), 1);
        assert_eq!(driver.frame(), 1);
        // Renderer sees post-tick state.
        assert_eq!(driver.renderer().frames, vec![("1/3".to_string(), 1)]);
    }

    #[test]
    fn run_stops_when_source_ends() {
        let mut driver = FrameDriver::new(JumpCounter::default(), RecordingRenderer::default());
        let jump = ActionSnapshot::idle().with(Action::Jump);
        let mut source = ScriptedFrames::new(vec![jump, ActionSnapshot::idle(), jump]);

        let ran = driver.run(&mut source);
        assert_eq!(ran, 3);
        assert_eq!(driver.game().jumps, 2);
        assert_eq!(driver.renderer().frames.len(), 3);
    }

    #[test]
    fn won_event_repeats_while_condition_holds() {
        let mut driver = FrameDriver::new(JumpCounter::default(), NullRenderer);
        let jump = ActionSnapshot::idle().with(Action::Jump);
        let mut source = ScriptedFrames::repeat(jump, 3);
        driver.run(&mut source);
        assert!(driver.game().is_won());

        let events = driver.step(&ActionSnapshot::idle());
        assert_eq!(events, vec![GameEvent::Won]);
    }

    #[test]
    fn empty_source_runs_nothing() {
        let mut driver = FrameDriver::new(JumpCounter::default(), NullRenderer);
        assert_eq!(driver.run(&mut ScriptedFrames::new(Vec::new())), 0);
        assert_eq!(driver.frame(), 0);
    }
}
