pub mod frame;
pub mod game_trait;
pub mod input;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::VecDeque;

    use crate::frame::FrameSource;
    use crate::game_trait::{GameEvent, TickGame};
    use crate::input::{Action, ActionSnapshot};

    /// Frame source that replays a fixed list of snapshots, then stops.
    pub struct ScriptedFrames {
        frames: VecDeque<ActionSnapshot>,
    }

    impl ScriptedFrames {
        pub fn new(frames: Vec<ActionSnapshot>) -> Self {
            Self {
                frames: frames.into(),
            }
        }

        /// `n` frames of the same snapshot.
        pub fn repeat(input: ActionSnapshot, n: usize) -> Self {
            Self::new(vec![input; n])
        }
    }

    impl FrameSource for ScriptedFrames {
        fn next_frame(&mut self) -> Option<ActionSnapshot> {
            self.frames.pop_front()
        }
    }

    /// Snapshot with exactly the given actions held.
    pub fn held(actions: &[Action]) -> ActionSnapshot {
        actions
            .iter()
            .fold(ActionSnapshot::idle(), |snap, &a| snap.with(a))
    }

    /// Run N ticks with the same input, returning all accumulated events.
    pub fn run_ticks(game: &mut dyn TickGame, n: usize, input: ActionSnapshot) -> Vec<GameEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.tick(&input));
        }
        all_events
    }

    /// Count `ScoreChanged` events in a list.
    pub fn score_changes(events: &[GameEvent]) -> usize {
        events.iter().filter(|e| e.is_score_change()).count()
    }
}
