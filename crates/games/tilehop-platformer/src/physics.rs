use serde::{Deserialize, Serialize};

use tilehop_core::input::ActionSnapshot;

use crate::level::Level;

/// Downward acceleration added to `vy` every tick (pixels/tick^2).
pub const GRAVITY: f32 = 0.5;
/// Horizontal speed while a move action is held (pixels/tick).
pub const MOVE_SPEED: f32 = 3.0;
/// Upward speed applied on jump (pixels/tick).
pub const JUMP_SPEED: f32 = 10.0;
/// Tile edge length in pixels.
pub const TILE_SIZE: f32 = 32.0;
/// Player hitbox width.
pub const PLAYER_WIDTH: f32 = 28.0;
/// Player hitbox height.
pub const PLAYER_HEIGHT: f32 = 32.0;
/// Spawn X (top-left corner).
pub const SPAWN_X: f32 = 50.0;
/// Spawn Y (top-left corner).
pub const SPAWN_Y: f32 = 0.0;

/// Tunable physics parameters, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
    pub tile_size: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            tile_size: TILE_SIZE,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
        }
    }
}

/// The player's hitbox and motion. Position is the top-left corner; y grows
/// downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
}

impl PlayerState {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
            grounded: false,
        }
    }

    /// A player at the configured spawn point, at rest.
    pub fn spawn(physics: &PhysicsConfig) -> Self {
        Self::new(
            physics.spawn_x,
            physics.spawn_y,
            physics.player_width,
            physics.player_height,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Inclusive tile index range covered by `[start, start + extent)`.
///
/// The far edge is pulled in by one unit so a body flush against a tile
/// boundary does not reach into the next tile.
pub fn tile_span(start: f32, extent: f32, tile_size: f32) -> (i32, i32) {
    let first = (start / tile_size).floor() as i32;
    let last = ((start + extent - 1.0) / tile_size).floor() as i32;
    (first, last)
}

/// Apply input and gravity to the player's velocity.
///
/// Left is checked before right, so holding both moves left. Gravity is
/// added even while grounded; the next vertical pass settles it again.
pub fn integrate(player: &mut PlayerState, input: &ActionSnapshot, physics: &PhysicsConfig) {
    player.vx = if input.move_left {
        -physics.move_speed
    } else if input.move_right {
        physics.move_speed
    } else {
        0.0
    };

    if input.jump && player.grounded {
        player.vy = -physics.jump_speed;
        player.grounded = false;
    }

    player.vy += physics.gravity;
}

/// Horizontal pass. Call after applying `vx` to `x`.
///
/// Only position is corrected; `vx` is left as is.
pub fn resolve_x(player: &mut PlayerState, level: &Level, tile_size: f32) {
    let (top, bottom) = tile_span(player.y, player.height, tile_size);

    // Bodies above or below the grid pass through freely.
    if top < 0 || bottom >= level.rows() as i32 {
        return;
    }

    let (left, right) = tile_span(player.x, player.width, tile_size);

    if player.vx > 0.0 {
        if level.col_in_bounds(right) && solid_in_col(level, top, bottom, right) {
            player.x = right as f32 * tile_size - player.width;
        }
    } else if player.vx < 0.0
        && level.col_in_bounds(left)
        && solid_in_col(level, top, bottom, left)
    {
        player.x = (left + 1) as f32 * tile_size;
    }
}

/// Vertical pass. Call after applying `vy` to `y`, with `x` already
/// corrected by [`resolve_x`].
pub fn resolve_y(player: &mut PlayerState, level: &Level, tile_size: f32) {
    let (left, right) = tile_span(player.x, player.width, tile_size);

    if left < 0 || right >= level.cols() as i32 {
        return;
    }

    let (top, bottom) = tile_span(player.y, player.height, tile_size);

    if player.vy > 0.0 {
        // Falling: land on any solid tile under the feet.
        if level.row_in_bounds(bottom) && solid_in_row(level, bottom, left, right) {
            player.y = bottom as f32 * tile_size - player.height;
            player.vy = 0.0;
            player.grounded = true;
            return;
        }
        player.grounded = false;
    } else if player.vy < 0.0
        && level.row_in_bounds(top)
        && solid_in_row(level, top, left, right)
    {
        // Rising into a ceiling. Grounded stays as the jump left it.
        player.y = (top + 1) as f32 * tile_size;
        player.vy = 0.0;
    }
}

/// Advance the player one tick: integrate, then move and resolve X, then Y.
pub fn step_player(
    player: &mut PlayerState,
    input: &ActionSnapshot,
    level: &Level,
    physics: &PhysicsConfig,
) {
    integrate(player, input, physics);

    player.x += player.vx;
    resolve_x(player, level, physics.tile_size);

    player.y += player.vy;
    resolve_y(player, level, physics.tile_size);
}

/// Whether any row in `top..=bottom` is solid at `col`. Rows must already be
/// in bounds.
fn solid_in_col(level: &Level, top: i32, bottom: i32, col: i32) -> bool {
    (top..=bottom).any(|row| level.is_solid(row as usize, col as usize))
}

/// Whether any column in `left..=right` is solid on `row`. Columns must
/// already be in bounds.
fn solid_in_row(level: &Level, row: i32, left: i32, right: i32) -> bool {
    (left..=right).any(|col| level.is_solid(row as usize, col as usize))
}
