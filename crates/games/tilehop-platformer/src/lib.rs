pub mod config;
pub mod error;
pub mod level;
pub mod physics;
pub mod pickups;
pub mod scoring;

use serde::{Deserialize, Serialize};

use tilehop_core::game_trait::{GameEvent, GameMetadata, TickGame};
use tilehop_core::input::{ActionSnapshot, KeyBindings};

use config::PlatformerConfig;
use error::SetupError;
use level::Level;
use physics::{PhysicsConfig, PlayerState, step_player};
use pickups::{Coin, resolve_pickups};
use scoring::CoinTally;

/// Everything that changes from tick to tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerState,
    pub coins: Vec<Coin>,
    pub tally: CoinTally,
}

impl GameState {
    pub fn new(config: &PlatformerConfig) -> Self {
        let coins: Vec<Coin> = config.coins.iter().map(Coin::from).collect();
        let tally = CoinTally::new(coins.len() as u32);
        Self {
            player: PlayerState::spawn(&config.physics),
            coins,
            tally,
        }
    }

    pub fn is_won(&self) -> bool {
        self.tally.is_won()
    }

    pub fn status_line(&self) -> String {
        self.tally.status_line()
    }
}

/// Advance the game by one frame.
///
/// Order: integrate velocity, move and resolve X, move and resolve Y, then
/// collect coins. Input is the snapshot taken at the top of the tick.
pub fn tick(
    state: &mut GameState,
    level: &Level,
    physics: &PhysicsConfig,
    input: &ActionSnapshot,
) -> Vec<GameEvent> {
    step_player(&mut state.player, input, level, physics);
    resolve_pickups(&state.player, &mut state.coins, &mut state.tally)
}

/// The coin-collecting platformer.
pub struct CoinPlatformer {
    level: Level,
    config: PlatformerConfig,
    state: GameState,
}

impl CoinPlatformer {
    /// Game on the built-in level.
    pub fn new(config: PlatformerConfig) -> Result<Self, SetupError> {
        Self::with_level(Level::default_level(), config)
    }

    pub fn with_level(level: Level, config: PlatformerConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let state = GameState::new(&config);
        tracing::info!(
            cols = level.cols(),
            rows = level.rows(),
            coins = state.tally.total,
            "platformer ready"
        );
        Ok(Self {
            level,
            config,
            state,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.config.physics
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.config.input
    }

    /// Back to spawn with every coin uncollected.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.config);
    }
}

impl TickGame for CoinPlatformer {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Tilehop".to_string(),
            description: "Jump across the tiles and collect every coin.".to_string(),
        }
    }

    fn tick(&mut self, input: &ActionSnapshot) -> Vec<GameEvent> {
        tick(&mut self.state, &self.level, &self.config.physics, input)
    }

    fn is_won(&self) -> bool {
        self.state.is_won()
    }

    fn status_line(&self) -> String {
        self.state.status_line()
    }
}
