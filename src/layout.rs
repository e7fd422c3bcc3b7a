/// Fixed two-column grid sized to hold one plot cell per simulation round.
///
/// Cells are addressed in row-major order, so a round's cell index equals
/// the round index. When the round count is odd the final cell of the last
/// row is unused and stays blank in the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rounds: usize,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// Builds the layout for `rounds` rounds (`rounds >= 1`).
    pub fn for_rounds(rounds: usize) -> Self {
        debug_assert!(rounds >= 1);
        GridLayout {
            rounds,
            rows: rounds.div_ceil(2),
            cols: 2,
        }
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Trailing cells that hold no round (0 or 1).
    pub fn unused_cells(&self) -> usize {
        self.cell_count() - self.rounds
    }

    /// Row-major (row, column) position of a round's cell.
    pub fn position(&self, round: usize) -> (usize, usize) {
        debug_assert!(round < self.rounds);
        (round / self.cols, round % self.cols)
    }
}
