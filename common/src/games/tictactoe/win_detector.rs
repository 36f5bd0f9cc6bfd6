use super::types::{BOARD_SIZE, Cell, Player, Position, WinningLine};

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

pub fn check_win(cells: &Grid) -> Option<Player> {
    [Player::PlayerA, Player::PlayerB]
        .into_iter()
        .find(|&player| check_win_with_line(cells, player).is_some())
}

/// Scans every row, every column and both diagonals for a line owned by `player`.
pub fn check_win_with_line(cells: &Grid, player: Player) -> Option<WinningLine> {
    let last = BOARD_SIZE - 1;

    for i in 0..BOARD_SIZE {
        if check_horizontal(cells, i, player) {
            return Some(WinningLine::new(player, Position::new(i, 0), Position::new(i, last)));
        }
        if check_vertical(cells, i, player) {
            return Some(WinningLine::new(player, Position::new(0, i), Position::new(last, i)));
        }
    }

    if check_diagonal_down_right(cells, player) {
        return Some(WinningLine::new(player, Position::new(0, 0), Position::new(last, last)));
    }
    if check_diagonal_down_left(cells, player) {
        return Some(WinningLine::new(player, Position::new(0, last), Position::new(last, 0)));
    }

    None
}

fn check_horizontal(cells: &Grid, row: usize, player: Player) -> bool {
    (0..BOARD_SIZE).all(|col| cells[row][col] == Cell::Marked(player))
}

fn check_vertical(cells: &Grid, col: usize, player: Player) -> bool {
    (0..BOARD_SIZE).all(|row| cells[row][col] == Cell::Marked(player))
}

fn check_diagonal_down_right(cells: &Grid, player: Player) -> bool {
    (0..BOARD_SIZE).all(|i| cells[i][i] == Cell::Marked(player))
}

fn check_diagonal_down_left(cells: &Grid, player: Player) -> bool {
    (0..BOARD_SIZE).all(|i| cells[i][BOARD_SIZE - 1 - i] == Cell::Marked(player))
}
