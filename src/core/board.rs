//! Board, Shot and Outcome
//!
//! A board is the ordered list of ship placements the player commits to.
//! Each ship contributes the triple `(x, y, orientation)` in fleet order,
//! so the flat board always has `NUM_SHIPS * 3` values.
//!
//! The order of values is part of the commitment preimage and must never be
//! changed between committing and rendering the prover witness.

use serde::{Deserialize, Serialize};

use crate::error::WitnessError;
use crate::{BOARD_LEN, GRID_SIZE, NUM_SHIPS};

/// One encoded board value (a coordinate or an orientation flag).
pub type BoardValue = u64;

/// Orientation flag for ships laid out along `x`.
pub const HORIZONTAL: BoardValue = 0;

/// Orientation flag for ships laid out along `y`.
pub const VERTICAL: BoardValue = 1;

/// Values per ship placement (`x`, `y`, orientation).
pub const VALUES_PER_SHIP: usize = 3;

// =============================================================================
// FLEET
// =============================================================================

/// Ship classes in the order they appear on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShipClass {
    /// Length 5.
    Carrier,
    /// Length 4.
    Battleship,
    /// Length 3.
    Cruiser,
    /// Length 3.
    Submarine,
    /// Length 2.
    Destroyer,
}

impl ShipClass {
    /// Fleet in board order.
    pub const FLEET: [ShipClass; NUM_SHIPS] = [
        Self::Carrier,
        Self::Battleship,
        Self::Cruiser,
        Self::Submarine,
        Self::Destroyer,
    ];

    /// Number of cells the ship occupies.
    pub const fn span(self) -> u64 {
        match self {
            Self::Carrier => 5,
            Self::Battleship => 4,
            Self::Cruiser => 3,
            Self::Submarine => 3,
            Self::Destroyer => 2,
        }
    }
}

/// Ship orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Segments advance along `x`.
    Horizontal,
    /// Segments advance along `y`.
    Vertical,
}

impl TryFrom<BoardValue> for Orientation {
    type Error = WitnessError;

    fn try_from(value: BoardValue) -> Result<Self, Self::Error> {
        match value {
            HORIZONTAL => Ok(Self::Horizontal),
            VERTICAL => Ok(Self::Vertical),
            other => Err(WitnessError::invalid(format!(
                "orientation must be {} or {}, got {}",
                HORIZONTAL, VERTICAL, other
            ))),
        }
    }
}

/// A single ship placed on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipPlacement {
    /// Ship class (fixes the length).
    pub class: ShipClass,
    /// Column of the bow.
    pub x: u64,
    /// Row of the bow.
    pub y: u64,
    /// Direction the hull extends from the bow.
    pub orientation: Orientation,
}

impl ShipPlacement {
    /// Cells covered by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        (0..self.class.span()).map(move |offset| match self.orientation {
            Orientation::Horizontal => (self.x + offset, self.y),
            Orientation::Vertical => (self.x, self.y + offset),
        })
    }

    /// Does the ship cover `shot`?
    pub fn covers(&self, shot: Shot) -> bool {
        self.cells().any(|(x, y)| x == shot.x && y == shot.y)
    }

    fn check_bounds(&self) -> Result<(), WitnessError> {
        let tail = self.class.span() - 1;
        let (end_x, end_y) = match self.orientation {
            Orientation::Horizontal => (self.x.saturating_add(tail), self.y),
            Orientation::Vertical => (self.x, self.y.saturating_add(tail)),
        };
        if end_x >= GRID_SIZE || end_y >= GRID_SIZE {
            return Err(WitnessError::invalid(format!(
                "{:?} at ({}, {}) leaves the {}x{} grid",
                self.class, self.x, self.y, GRID_SIZE, GRID_SIZE
            )));
        }
        Ok(())
    }
}

// =============================================================================
// BOARD
// =============================================================================

/// Ordered board values, exactly as committed.
///
/// Construction does not validate; [`crate::CommitmentEngine::commit`] checks
/// the length and element width, and [`Board::ships`] checks the geometry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(Vec<BoardValue>);

impl Board {
    /// Wrap ordered board values.
    pub fn new(values: Vec<BoardValue>) -> Self {
        Self(values)
    }

    /// Build a board from ship placements in fleet order.
    pub fn from_ships(ships: &[(u64, u64, Orientation); NUM_SHIPS]) -> Self {
        let values = ships
            .iter()
            .flat_map(|&(x, y, orientation)| {
                let flag = match orientation {
                    Orientation::Horizontal => HORIZONTAL,
                    Orientation::Vertical => VERTICAL,
                };
                [x, y, flag]
            })
            .collect();
        Self(values)
    }

    /// Ordered values.
    pub fn values(&self) -> &[BoardValue] {
        &self.0
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the board empty?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fail with `InvalidInput` unless the board has exactly [`BOARD_LEN`] values.
    pub fn check_len(&self) -> Result<(), WitnessError> {
        if self.0.len() != BOARD_LEN {
            return Err(WitnessError::invalid(format!(
                "board must have {} values, got {}",
                BOARD_LEN,
                self.0.len()
            )));
        }
        Ok(())
    }

    /// Interpret the board as ship placements.
    ///
    /// Checks length, orientation flags and grid bounds. Overlapping ships are
    /// a game rule and are not rejected here.
    pub fn ships(&self) -> Result<[ShipPlacement; NUM_SHIPS], WitnessError> {
        self.check_len()?;

        let mut placements = [ShipPlacement {
            class: ShipClass::Carrier,
            x: 0,
            y: 0,
            orientation: Orientation::Horizontal,
        }; NUM_SHIPS];

        for (i, (chunk, class)) in self
            .0
            .chunks_exact(VALUES_PER_SHIP)
            .zip(ShipClass::FLEET)
            .enumerate()
        {
            let placement = ShipPlacement {
                class,
                x: chunk[0],
                y: chunk[1],
                orientation: Orientation::try_from(chunk[2])?,
            };
            placement.check_bounds()?;
            placements[i] = placement;
        }

        Ok(placements)
    }
}

impl From<Vec<BoardValue>> for Board {
    fn from(values: Vec<BoardValue>) -> Self {
        Self(values)
    }
}

// =============================================================================
// SHOT
// =============================================================================

/// Queried grid coordinate, rendered as `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[u64; 2]", from = "[u64; 2]")]
pub struct Shot {
    /// Column.
    pub x: u64,
    /// Row.
    pub y: u64,
}

impl Shot {
    /// Create a shot at `(x, y)`.
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Build a shot from a coordinate sequence, which must be exactly `[x, y]`.
    pub fn from_coords(coords: &[u64]) -> Result<Self, WitnessError> {
        match coords {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(WitnessError::invalid(format!(
                "shot must have 2 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    /// Serialized cell index (`10y + x`).
    pub fn cell_index(&self) -> u64 {
        self.y * GRID_SIZE + self.x
    }

    /// Fail with `InvalidInput` unless the shot lies on the grid.
    pub fn check_bounds(&self) -> Result<(), WitnessError> {
        if self.x >= GRID_SIZE || self.y >= GRID_SIZE {
            return Err(WitnessError::invalid(format!(
                "shot ({}, {}) is outside the {}x{} grid",
                self.x, self.y, GRID_SIZE, GRID_SIZE
            )));
        }
        Ok(())
    }
}

impl From<[u64; 2]> for Shot {
    fn from([x, y]: [u64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Shot> for [u64; 2] {
    fn from(shot: Shot) -> Self {
        [shot.x, shot.y]
    }
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Hit/miss flag, rendered as `0` or `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    /// Shot landed on open water.
    Miss,
    /// Shot landed on a ship segment.
    Hit,
}

impl Outcome {
    /// Compute the outcome of `shot` against `board`.
    pub fn compute(board: &Board, shot: Shot) -> Result<Self, WitnessError> {
        shot.check_bounds()?;
        let ships = board.ships()?;
        Ok(Self::from(ships.iter().any(|ship| ship.covers(shot))))
    }

    /// Is this a hit?
    pub fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

impl From<bool> for Outcome {
    fn from(hit: bool) -> Self {
        if hit {
            Self::Hit
        } else {
            Self::Miss
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Miss => 0,
            Outcome::Hit => 1,
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = WitnessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Miss),
            1 => Ok(Self::Hit),
            other => Err(WitnessError::Serialization(format!(
                "hit flag must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_board;

    #[test]
    fn test_reference_board_ships() {
        let ships = reference_board().ships().unwrap();

        assert_eq!(ships[0].class, ShipClass::Carrier);
        assert_eq!((ships[0].x, ships[0].y), (0, 5));
        assert_eq!(ships[4].class, ShipClass::Destroyer);
        assert!(ships.iter().all(|s| s.orientation == Orientation::Horizontal));
    }

    #[test]
    fn test_reference_shot_hits_battleship() {
        let board = reference_board();
        let shot = Shot::new(1, 6);

        assert_eq!(shot.cell_index(), 61);
        assert_eq!(Outcome::compute(&board, shot).unwrap(), Outcome::Hit);

        let ships = board.ships().unwrap();
        assert!(ships[1].covers(shot));
        assert!(!ships[0].covers(shot));
    }

    #[test]
    fn test_reference_board_covers_exactly_fleet_cells() {
        let board = reference_board();
        let mut hits = Vec::new();

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if Outcome::compute(&board, Shot::new(x, y)).unwrap().is_hit() {
                    hits.push(Shot::new(x, y).cell_index());
                }
            }
        }

        let expected: Vec<u64> = [50, 51, 52, 53, 54, 60, 61, 62, 63, 70, 71, 72, 80, 81, 82, 90, 91].to_vec();
        assert_eq!(hits, expected);
    }

    #[test]
    fn test_vertical_ship() {
        let board = Board::from_ships(&[
            (9, 0, Orientation::Vertical),
            (0, 0, Orientation::Horizontal),
            (0, 1, Orientation::Horizontal),
            (0, 2, Orientation::Horizontal),
            (0, 3, Orientation::Horizontal),
        ]);

        assert_eq!(Outcome::compute(&board, Shot::new(9, 4)).unwrap(), Outcome::Hit);
        assert_eq!(Outcome::compute(&board, Shot::new(9, 5)).unwrap(), Outcome::Miss);
        assert_eq!(Outcome::compute(&board, Shot::new(8, 0)).unwrap(), Outcome::Miss);
    }

    #[test]
    fn test_ship_off_grid_rejected() {
        let mut values = reference_board().values().to_vec();
        // carrier bow at x = 6 needs cells 6..=10
        values[0] = 6;
        let result = Board::new(values).ships();
        assert!(matches!(result, Err(WitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_bad_orientation_rejected() {
        let mut values = reference_board().values().to_vec();
        values[2] = 2;
        let result = Outcome::compute(&Board::new(values), Shot::new(0, 0));
        assert!(matches!(result, Err(WitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_short_board_rejected() {
        let mut values = reference_board().values().to_vec();
        values.pop();
        assert!(matches!(Board::new(values).ships(), Err(WitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_shot_off_grid_rejected() {
        let result = Outcome::compute(&reference_board(), Shot::new(10, 0));
        assert!(matches!(result, Err(WitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_shot_from_coords() {
        assert_eq!(Shot::from_coords(&[1, 6]).unwrap(), Shot::new(1, 6));
        assert!(Shot::from_coords(&[1]).is_err());
        assert!(Shot::from_coords(&[1, 6, 0]).is_err());
    }

    #[test]
    fn test_outcome_flag() {
        assert_eq!(u8::from(Outcome::Hit), 1);
        assert_eq!(u8::from(Outcome::Miss), 0);
        assert_eq!(Outcome::try_from(1u8).unwrap(), Outcome::Hit);
        assert!(Outcome::try_from(2u8).is_err());
    }
}
