use super::types::{BOARD_SIZE, Cell, Player, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false without touching the board when the position is out of
    /// range or already marked.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        self.cells[row][col] = Cell::Marked(player);
        true
    }

    /// Rollback for speculative placements made during search.
    pub fn clear(&mut self, row: usize, col: usize) {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.cells[row][col] = Cell::Empty;
        }
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Cell::Empty)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn has_won(&self, player: Player) -> bool {
        check_win_with_line(&self.cells, player).is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self, player: Player) -> Option<WinningLine> {
        check_win_with_line(&self.cells, player)
    }

    /// Row-major order; the search relies on it for tie-breaking.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn marks_placed(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Builds a board from rows such as `"AB."`, where `.` is an empty cell.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                match symbol {
                    'A' => board.cells[row][col] = Cell::Marked(Player::PlayerA),
                    'B' => board.cells[row][col] = Cell::Marked(Player::PlayerB),
                    _ => {}
                }
            }
        }
        board
    }
}
