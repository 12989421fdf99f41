use crate::config;
use crate::error::ArenaError;
use crate::robot::Robot;
use crate::types::*;
use rand::Rng;

// Represents the game arena: a fixed rows x cols grid of terrain cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Cell>, // Row-major
}

impl Arena {
    /// Empty grid. A grid with more than `MAX_ARENA_CELLS` cells collapses to 0x0.
    pub fn new(rows: usize, cols: usize) -> Self {
        let (rows, cols, len) = match rows.checked_mul(cols) {
            Some(len) if len <= config::MAX_ARENA_CELLS => (rows, cols, len),
            _ => {
                log::warn!("Arena {}x{} is too large, using an empty grid", rows, cols);
                (0, 0, 0)
            }
        };
        Arena {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        }
    }

    /// Grid size as signed coordinates.
    pub fn extent(&self) -> (i32, i32) {
        (
            i32::try_from(self.rows).unwrap_or(i32::MAX),
            i32::try_from(self.cols).unwrap_or(i32::MAX),
        )
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.in_bounds(position) {
            Some(position.row as usize * self.cols + position.col as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.rows
            && (position.col as usize) < self.cols
    }

    /// Terrain at `position`, or `None` off the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|i| self.cells[i])
    }

    /// Overwrites the terrain at `position`. Off-grid writes are ignored.
    pub fn set_cell(&mut self, position: Position, cell: Cell) {
        if let Some(i) = self.index(position) {
            self.cells[i] = cell;
        }
    }

    /// Robot standing on `position`, alive or wrecked.
    pub fn robot_at(robots: &[Robot], position: Position) -> Option<usize> {
        robots.iter().position(|r| r.position == position)
    }

    /// True when `position` is on the grid, has no terrain and no robot (live or wrecked).
    pub fn is_empty(&self, robots: &[Robot], position: Position) -> bool {
        self.cell(position) == Some(Cell::Empty) && Self::robot_at(robots, position).is_none()
    }

    /// Number of cells that are currently empty.
    pub fn empty_cell_count(&self, robots: &[Robot]) -> usize {
        let (rows, cols) = self.extent();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Position::new(row, col)))
            .filter(|&p| self.is_empty(robots, p))
            .count()
    }

    /// Samples uniformly random cells until an empty one comes up. The caller must
    /// make sure at least one empty cell exists.
    fn sample_empty_cell<R: Rng>(&self, robots: &[Robot], rng: &mut R) -> Position {
        let (rows, cols) = self.extent();
        loop {
            let position = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
            if self.is_empty(robots, position) {
                return position;
            }
        }
    }

    /// Picks a random empty cell for a new robot.
    pub fn spawn_position<R: Rng>(
        &self,
        robots: &[Robot],
        rng: &mut R,
    ) -> Result<Position, ArenaError> {
        if self.empty_cell_count(robots) == 0 {
            return Err(ArenaError::PlacementExhausted {
                what: "robots",
                requested: 1,
                available: 0,
            });
        }
        Ok(self.sample_empty_cell(robots, rng))
    }

    // Places mounds, then pits, then flamethrower traps on random empty cells.
    // Counts beyond the remaining capacity are dropped and reported.
    pub fn place_hazards<R: Rng>(
        &mut self,
        robots: &[Robot],
        mounds: usize,
        pits: usize,
        flamethrowers: usize,
        rng: &mut R,
    ) -> Result<(), ArenaError> {
        let requested = mounds.saturating_add(pits).saturating_add(flamethrowers);
        let available = self.empty_cell_count(robots);
        log::info!("Placing {} hazards on {} empty cells...", requested, available);

        let mut remaining = available;
        for (cell, count) in [
            (Cell::Mound, mounds),
            (Cell::Pit, pits),
            (Cell::Flamethrower, flamethrowers),
        ] {
            let placeable = count.min(remaining);
            for _ in 0..placeable {
                let position = self.sample_empty_cell(robots, rng);
                self.set_cell(position, cell);
            }
            remaining -= placeable;
        }

        if requested > available {
            return Err(ArenaError::PlacementExhausted {
                what: "hazards",
                requested,
                available,
            });
        }
        log::info!("Hazards placed.");
        Ok(())
    }

    /// Count of cells carrying the given terrain.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}
