use super::direction::Direction;
use std::error;
use std::fmt::Display;
use std::ops::Index;

/// (row, column) pair. Tuples compare and hash structurally, so two
/// lookups for the same position always hit the same search-graph node.
pub type Coordinate = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Floor,
    Start,
    Finish,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    EmptyGrid,
    NoStartCell,
    NoFinishCell,
    MultipleStartCells(Coordinate, Coordinate),
    MultipleFinishCells(Coordinate, Coordinate),
}

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::EmptyGrid => write!(f, "Grid has no cells."),
            GridError::NoStartCell => write!(f, "No start cell in grid."),
            GridError::NoFinishCell => write!(f, "No finish cell in grid."),
            GridError::MultipleStartCells((r0, c0), (r1, c1)) => write!(
                f,
                "Expect only one start cell, given two(({}, {}), ({}, {})).",
                r0, c0, r1, c1
            ),
            GridError::MultipleFinishCells((r0, c0), (r1, c1)) => write!(
                f,
                "Expect only one finish cell, given two(({}, {}), ({}, {})).",
                r0, c0, r1, c1
            ),
        }
    }
}

impl error::Error for GridError {}

/// Immutable rectangular cell table with the two marker coordinates.
/// Read-only after construction, so it can be shared across searches.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    start: Coordinate,
    finish: Coordinate,
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, (row, column): Coordinate) -> &Self::Output {
        &self.cells[self.columns * row + column]
    }
}

impl Grid {
    pub fn new(rows: usize, columns: usize, cells: Vec<Cell>) -> Result<Grid, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::EmptyGrid);
        }
        assert_eq!(cells.len(), rows * columns);

        let mut start = None;
        let mut finish = None;
        for (index, cell) in cells.iter().enumerate() {
            let coordinate = (index / columns, index % columns);
            match cell {
                Cell::Start => {
                    if let Some(first) = start {
                        return Err(GridError::MultipleStartCells(first, coordinate));
                    }
                    start = Some(coordinate);
                }
                Cell::Finish => {
                    if let Some(first) = finish {
                        return Err(GridError::MultipleFinishCells(first, coordinate));
                    }
                    finish = Some(coordinate);
                }
                _ => {}
            }
        }

        Ok(Grid {
            rows,
            columns,
            cells,
            start: start.ok_or(GridError::NoStartCell)?,
            finish: finish.ok_or(GridError::NoFinishCell)?,
        })
    }

    /// Test-only constructor with caller-supplied marker coordinates,
    /// letting start and finish coincide on one cell.
    #[cfg(test)]
    pub(crate) fn with_markers(
        rows: usize,
        columns: usize,
        cells: Vec<Cell>,
        start: Coordinate,
        finish: Coordinate,
    ) -> Grid {
        assert_eq!(cells.len(), rows * columns);
        Grid {
            rows,
            columns,
            cells,
            start,
            finish,
        }
    }

    pub fn get_dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn finish(&self) -> Coordinate {
        self.finish
    }

    pub fn is_passable(&self, coordinate: Coordinate) -> bool {
        let (row, column) = coordinate;
        row < self.rows && column < self.columns && self[coordinate] != Cell::Wall
    }

    /// Manhattan distance to the finish cell. Admissible and consistent
    /// for unit-cost slide edges, which A* optimality depends on.
    pub fn heuristic(&self, (row, column): Coordinate) -> usize {
        row.abs_diff(self.finish.0) + column.abs_diff(self.finish.1)
    }

    /// Slides from `current` one cell at a time until the next cell would
    /// leave the grid or be a wall. Landing on a start or finish marker
    /// halts the slide on that cell. Returns `current` unchanged when
    /// immediately blocked; callers must discard that as a non-move.
    pub fn slide(&self, current: Coordinate, direction: Direction) -> Coordinate {
        let (d_row, d_column) = direction.delta();
        let (mut row, mut column) = current;
        loop {
            let next = match (row.checked_add_signed(d_row), column.checked_add_signed(d_column)) {
                (Some(next_row), Some(next_column)) => (next_row, next_column),
                _ => break,
            };
            if !self.is_passable(next) {
                break;
            }
            if matches!(self[next], Cell::Start | Cell::Finish) {
                return next;
            }
            (row, column) = next;
        }
        (row, column)
    }
}
