use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Tile types for the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Empty,
    Solid,
}

impl Tile {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Tile::Empty),
            '1' => Some(Tile::Solid),
            _ => None,
        }
    }
}

/// Demo level, 20 tiles wide and 7 tall. `1` is solid ground.
pub const DEFAULT_LAYOUT: &[&str] = &[
    "00000000000000000000",
    "00000000000000000000",
    "00000000000000000111",
    "00000001111110000000",
    "11111111111111111000",
    "11111111111111111111",
    "11111111111111111111",
];

/// Static tile map. Row-major, origin at the top-left, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Width in tiles.
    width: usize,
    /// Height in tiles.
    height: usize,
    /// Tile data stored row-major (row * width + col).
    tiles: Vec<Tile>,
}

impl Level {
    /// Build from explicit rows. Every row must be non-empty and the same length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, SetupError> {
        let Some(first) = rows.first() else {
            return Err(SetupError::EmptyLevel);
        };
        let width = first.len();
        if width == 0 {
            return Err(SetupError::EmptyRow(0));
        }

        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.is_empty() {
                return Err(SetupError::EmptyRow(row));
            }
            if cells.len() != width {
                return Err(SetupError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            tiles.extend(cells);
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Build from layout lines of `0` / `1` characters. Whitespace inside a
    /// line is ignored.
    pub fn from_layout(lines: &[&str]) -> Result<Self, SetupError> {
        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let tile = Tile::from_char(ch).ok_or(SetupError::UnknownTile { row, col, ch })?;
                cells.push(tile);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    /// Parse a multi-line layout. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, SetupError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        Self::from_layout(&lines)
    }

    /// The compiled-in demo level.
    pub fn default_level() -> Self {
        Self::from_layout(DEFAULT_LAYOUT).expect("built-in layout must be a valid level")
    }

    pub fn rows(&self) -> usize {
        self.height
    }

    pub fn cols(&self) -> usize {
        self.width
    }

    /// Tile at (`row`, `col`), or `None` outside the grid.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// Solid-tile query. Collision code bounds-checks before asking; an
    /// out-of-range query answers `false`.
    pub fn is_solid(&self, row: usize, col: usize) -> bool {
        self.tile(row, col) == Some(Tile::Solid)
    }

    /// Signed row range check used by the collision passes.
    pub fn row_in_bounds(&self, row: i32) -> bool {
        row >= 0 && (row as usize) < self.height
    }

    /// Signed column range check used by the collision passes.
    pub fn col_in_bounds(&self, col: i32) -> bool {
        col >= 0 && (col as usize) < self.width
    }

    pub fn pixel_width(&self, tile_size: f32) -> f32 {
        self.width as f32 * tile_size
    }

    pub fn pixel_height(&self, tile_size: f32) -> f32 {
        self.height as f32 * tile_size
    }

    /// `(row, col)` of every solid tile, row by row.
    pub fn solid_tiles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Tile::Solid)
            .map(|(i, _)| (i / self.width, i % self.width))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::default_level()
    }
}
