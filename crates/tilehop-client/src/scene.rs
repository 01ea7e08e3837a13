use tilehop_platformer::CoinPlatformer;

pub const TILE_COLOR: &str = "#777";
pub const PLAYER_COLOR: &str = "yellow";
pub const COIN_COLOR: &str = "gold";

/// One Canvas2D operation. Built natively so it can be tested without a
/// browser; the canvas renderer just replays the list.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        width: f64,
        height: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
}

/// Draw list for the current frame: clear, solid tiles, uncollected coins,
/// then the player on top.
pub fn build_draw_list(game: &CoinPlatformer) -> Vec<DrawCmd> {
    let level = game.level();
    let state = game.state();
    let tile = game.physics().tile_size;
    let t = f64::from(tile);

    let mut cmds = Vec::with_capacity(2 + state.coins.len() + level.rows() * level.cols());
    cmds.push(DrawCmd::Clear {
        width: f64::from(level.pixel_width(tile)),
        height: f64::from(level.pixel_height(tile)),
    });

    for (row, col) in level.solid_tiles() {
        cmds.push(DrawCmd::FillRect {
            x: col as f64 * t,
            y: row as f64 * t,
            width: t,
            height: t,
            color: TILE_COLOR,
        });
    }

    for coin in state.coins.iter().filter(|c| !c.collected) {
        cmds.push(DrawCmd::FillRect {
            x: f64::from(coin.x),
            y: f64::from(coin.y),
            width: f64::from(coin.size),
            height: f64::from(coin.size),
            color: COIN_COLOR,
        });
    }

    let p = &state.player;
    cmds.push(DrawCmd::FillRect {
        x: f64::from(p.x),
        y: f64::from(p.y),
        width: f64::from(p.width),
        height: f64::from(p.height),
        color: PLAYER_COLOR,
    });

    cmds
}
