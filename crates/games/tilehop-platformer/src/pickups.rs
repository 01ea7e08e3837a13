use serde::{Deserialize, Serialize};

use tilehop_core::game_trait::GameEvent;

use crate::physics::PlayerState;
use crate::scoring::CoinTally;

/// Coin edge length in pixels.
pub const COIN_SIZE: f32 = 16.0;

/// Coin placement, as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinSpec {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_coin_size")]
    pub size: f32,
}

fn default_coin_size() -> f32 {
    COIN_SIZE
}

/// Built-in coin layout for the demo level.
pub fn default_coins() -> Vec<CoinSpec> {
    [(200.0, 50.0), (330.0, 20.0), (590.0, 20.0)]
        .into_iter()
        .map(|(x, y)| CoinSpec {
            x,
            y,
            size: COIN_SIZE,
        })
        .collect()
}

/// A coin in the level. `collected` goes false -> true once and stays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            size,
            collected: false,
        }
    }

    /// Strict AABB overlap; touching edges do not count.
    pub fn overlaps(&self, player: &PlayerState) -> bool {
        player.left() < self.x + self.size
            && player.right() > self.x
            && player.top() < self.y + self.size
            && player.bottom() > self.y
    }
}

impl From<&CoinSpec> for Coin {
    fn from(spec: &CoinSpec) -> Self {
        Coin::new(spec.x, spec.y, spec.size)
    }
}

/// Collect every uncollected coin the player overlaps, in list order.
///
/// Emits one `ScoreChanged` per coin, then `Won` if every coin is collected.
/// Already-collected coins are skipped, so a second call with no movement in
/// between collects nothing new.
pub fn resolve_pickups(
    player: &PlayerState,
    coins: &mut [Coin],
    tally: &mut CoinTally,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for (index, coin) in coins.iter_mut().enumerate() {
        if coin.collected || !coin.overlaps(player) {
            continue;
        }
        coin.collected = true;
        let collected = tally.record();
        tracing::debug!(index, collected, total = tally.total, "coin collected");
        events.push(GameEvent::ScoreChanged {
            collected,
            total: tally.total,
        });
    }

    if tally.is_won() {
        events.push(GameEvent::Won);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> PlayerState {
        PlayerState::new(x, y, 28.0, 32.0)
    }

    #[test]
    fn overlap_is_strict() {
        let coin = Coin::new(200.0, 50.0, 16.0);
        // Player's right edge exactly on the coin's left edge.
        assert!(!coin.overlaps(&player_at(172.0, 50.0)));
        // One pixel further in.
        assert!(coin.overlaps(&player_at(173.0, 50.0)));
        // Player's top exactly on the coin's bottom edge.
        assert!(!coin.overlaps(&player_at(200.0, 66.0)));
    }

    #[test]
    fn collecting_coin_fires_score_change() {
        let mut coins = vec![Coin::new(200.0, 50.0, 16.0), Coin::new(400.0, 50.0, 16.0)];
        let mut tally = CoinTally::new(2);

        let events = resolve_pickups(&player_at(195.0, 45.0), &mut coins, &mut tally);

        assert_eq!(
            events,
            vec![GameEvent::ScoreChanged {
                collected: 1,
                total: 2
            }]
        );
        assert!(coins[0].collected);
        assert!(!coins[1].collected);
        assert_eq!(tally.collected, 1);
    }

    #[test]
    fn second_call_without_movement_collects_nothing() {
        let mut coins = vec![Coin::new(200.0, 50.0, 16.0), Coin::new(400.0, 50.0, 16.0)];
        let mut tally = CoinTally::new(2);
        let player = player_at(195.0, 45.0);

        resolve_pickups(&player, &mut coins, &mut tally);
        let events = resolve_pickups(&player, &mut coins, &mut tally);

        assert!(events.is_empty());
        assert_eq!(tally.collected, 1);
    }

    #[test]
    fn two_coins_same_tick_fire_in_list_order_then_win() {
        let mut coins = vec![Coin::new(100.0, 10.0, 16.0), Coin::new(110.0, 20.0, 16.0)];
        let mut tally = CoinTally::new(2);

        let events = resolve_pickups(&player_at(100.0, 10.0), &mut coins, &mut tally);

        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged {
                    collected: 1,
                    total: 2
                },
                GameEvent::ScoreChanged {
                    collected: 2,
                    total: 2
                },
                GameEvent::Won,
            ]
        );
    }

    #[test]
    fn win_repeats_every_call_while_complete() {
        let mut coins = vec![Coin::new(0.0, 0.0, 16.0)];
        let mut tally = CoinTally::new(1);
        let far = player_at(500.0, 500.0);

        resolve_pickups(&player_at(0.0, 0.0), &mut coins, &mut tally);
        assert_eq!(
            resolve_pickups(&far, &mut coins, &mut tally),
            vec![GameEvent::Won]
        );
        assert_eq!(
            resolve_pickups(&far, &mut coins, &mut tally),
            vec![GameEvent::Won]
        );
    }

    #[test]
    fn default_coins_use_standard_size() {
        let coins = default_coins();
        assert_eq!(coins.len(), 3);
        assert!(coins.iter().all(|c| c.size == COIN_SIZE));
        assert_eq!((coins[0].x, coins[0].y), (200.0, 50.0));
    }
}
