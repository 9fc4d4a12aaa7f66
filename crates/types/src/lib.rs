//! Core types shared across the workspace
//! This crate contains pure data types with no external dependencies

/// Board dimension (the grid is square)
pub const GRID_SIZE: u8 = 7;
/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of distinct tile kinds
pub const TILE_KINDS: usize = 5;

/// Presentation pacing hints (in milliseconds)
///
/// The engine never sleeps; these are the durations an external driver is
/// expected to wait at each cascade suspension point.
pub const MATCH_FLASH_MS: u32 = 280;
pub const FALL_MS: u32 = 220;
pub const INVALID_FLASH_MS: u32 = 200;

/// Match timer
pub const MATCH_DURATION_SECS: u32 = 60;
pub const TIMER_TICK_MS: u32 = 1000;

/// Points awarded per matched cell, before the chain multiplier
pub const CELL_SCORE: u32 = 10;

/// Chain multiplier step (as numerator/denominator: +1/2 per chain depth)
pub const MULTIPLIER_STEP_NUM: u32 = 1;
pub const MULTIPLIER_STEP_DEN: u32 = 2;

/// Tile kinds (the five-symbol alphabet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Ruby,
    Amber,
    Jade,
    Azure,
    Violet,
}

impl Tile {
    /// All tile kinds, in index order
    pub const ALL: [Tile; TILE_KINDS] = [
        Tile::Ruby,
        Tile::Amber,
        Tile::Jade,
        Tile::Azure,
        Tile::Violet,
    ];

    /// Tile for an index in `0..TILE_KINDS`
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index of this tile in `ALL`
    pub fn index(&self) -> usize {
        match self {
            Tile::Ruby => 0,
            Tile::Amber => 1,
            Tile::Jade => 2,
            Tile::Azure => 3,
            Tile::Violet => 4,
        }
    }

    /// Parse tile kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" => Some(Tile::Ruby),
            "amber" => Some(Tile::Amber),
            "jade" => Some(Tile::Jade),
            "azure" => Some(Tile::Azure),
            "violet" => Some(Tile::Violet),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Ruby => "ruby",
            Tile::Amber => "amber",
            Tile::Jade => "jade",
            Tile::Azure => "azure",
            Tile::Violet => "violet",
        }
    }
}

/// Cell on the grid (None = empty, Some = occupied by a tile)
pub type Cell = Option<Tile>;

/// A (row, col) grid coordinate, bounds-checked at construction
///
/// Rows run 0..GRID_SIZE top to bottom, columns 0..GRID_SIZE left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position, panicking on out-of-bounds coordinates
    ///
    /// Out-of-bounds input here is a caller bug, not game state.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "position ({}, {}) outside {}x{} grid",
            row,
            col,
            GRID_SIZE,
            GRID_SIZE
        );
        Self { row, col }
    }

    /// Create a position, returning None on out-of-bounds coordinates
    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Position for a row-major flat index in `0..GRID_CELLS`
    pub fn from_index(index: usize) -> Option<Self> {
        if index < GRID_CELLS {
            Some(Self {
                row: (index / GRID_SIZE as usize) as u8,
                col: (index % GRID_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row-major flat index
    pub fn index(&self) -> usize {
        (self.row as usize) * (GRID_SIZE as usize) + (self.col as usize)
    }

    /// True iff exactly one coordinate differs by exactly 1 (no diagonals)
    pub fn is_adjacent(&self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }
}

/// Outcome of a tile selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First tile of a pending swap recorded
    Selected,
    /// Same tile selected twice; selection cleared
    Deselected,
    /// Non-adjacent tile selected; selection replaced
    Reselected,
    /// Adjacent swap produced no match; grid restored, selection cleared
    InvalidMove { first: Position, second: Position },
    /// Adjacent swap produced at least one match; cascade is now running
    CascadeStarted,
    /// Selection arrived outside a match or while a cascade is resolving
    Ignored,
}

impl SelectOutcome {
    /// Convert to string (for host protocol / debugging)
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectOutcome::Selected => "selected",
            SelectOutcome::Deselected => "deselected",
            SelectOutcome::Reselected => "reselected",
            SelectOutcome::InvalidMove { .. } => "invalid_move",
            SelectOutcome::CascadeStarted => "cascade_started",
            SelectOutcome::Ignored => "ignored",
        }
    }
}
