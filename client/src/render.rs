use common::games::tictactoe::{BOARD_SIZE, Cell, GameSession, GameStatus, Position, Role};

use crate::config::DisplayConfig;

const EMPTY_LABEL: char = '.';

/// The grid with 1-based row/column headers. The computer's last move is
/// bracketed, cells of a winning line are starred.
pub fn render_board(session: &GameSession, display: &DisplayConfig) -> String {
    let winning_cells = winning_cells(session);
    let mut out = String::from("    ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {}  ", col + 1));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!(" {} ", row + 1));
        for col in 0..BOARD_SIZE {
            let position = Position::new(row, col);
            let label = match session.cell(row, col) {
                Some(Cell::Marked(player)) => display.label(player),
                _ => EMPTY_LABEL,
            };
            let cell = if winning_cells.contains(&position) {
                format!("*{}*", label)
            } else if session.last_automated_move() == Some(position) {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            };
            out.push_str(&cell);
            if col + 1 < BOARD_SIZE {
                out.push('|');
            }
        }
        out.push('\n');
        if row + 1 < BOARD_SIZE {
            out.push_str("   ");
            out.push_str(&vec!["---"; BOARD_SIZE].join("+"));
            out.push('\n');
        }
    }
    out
}

fn winning_cells(session: &GameSession) -> Vec<Position> {
    let Some(line) = session.winning_line() else {
        return Vec::new();
    };
    let step = |from: usize, to: usize, i: usize| {
        if to >= from { from + i } else { from - i }
    };
    let row_moves = line.start.row != line.end.row;
    let col_moves = line.start.col != line.end.col;
    (0..BOARD_SIZE)
        .map(|i| {
            let row = if row_moves {
                step(line.start.row, line.end.row, i)
            } else {
                line.start.row
            };
            let col = if col_moves {
                step(line.start.col, line.end.col, i)
            } else {
                line.start.col
            };
            Position::new(row, col)
        })
        .collect()
}

pub fn render_status(session: &GameSession, display: &DisplayConfig) -> String {
    match session.status() {
        GameStatus::Won(player) => match player.role() {
            Role::Human => "You win!".to_string(),
            Role::Automated => "Computer wins!".to_string(),
        },
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => match session.current_player().role() {
            Role::Human => format!("Your turn ({})", display.label(session.current_player())),
            Role::Automated => "Computer thinking...".to_string(),
        },
    }
}

pub fn render_tally(session: &GameSession) -> String {
    let tally = session.tally();
    format!(
        "Wins: You {} - Computer {} | Draws: {}",
        tally.player_a_wins, tally.player_b_wins, tally.draws
    )
}

pub fn render_search_stats(session: &GameSession) -> Option<String> {
    let last = session.last_search_stats();
    if last.nodes_explored == 0 {
        return None;
    }
    let game = session.game_search_stats();
    Some(format!(
        "Minimax: {} nodes explored, depth {} (this game: {} nodes)",
        last.nodes_explored, last.max_depth, game.nodes_explored
    ))
}

pub fn render_screen(session: &GameSession, display: &DisplayConfig) -> String {
    let mut out = render_board(session, display);
    out.push('\n');
    out.push_str(&render_status(session, display));
    out.push('\n');
    out.push_str(&render_tally(session));
    out.push('\n');
    if display.show_search_stats
        && let Some(stats) = render_search_stats(session)
    {
        out.push_str(&stats);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::Player;

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn test_empty_board_rendering() {
        let session = GameSession::default();
        let board = render_board(&session, &display());
        assert_eq!(board.lines().count(), BOARD_SIZE * 2);
        assert!(board.contains(" 1  . | . | . "));
        assert!(!board.contains('X'));
    }

    #[test]
    fn test_last_automated_move_is_bracketed() {
        let mut session = GameSession::default();
        session.apply_move(1, 1, Player::PlayerA);
        session.automated_move().unwrap();
        let board = render_board(&session, &display());
        assert!(board.contains("[O]"));
        assert!(board.contains(" X "));
    }

    #[test]
    fn test_winning_line_is_starred() {
        let mut session = GameSession::default();
        for (row, col) in [(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)] {
            let player = session.current_player();
            session.apply_move(row, col, player);
        }
        let board = render_board(&session, &display());
        assert_eq!(board.matches("*X*").count(), 3);
        assert_eq!(render_status(&session, &display()), "You win!");
    }

    #[test]
    fn test_column_win_cells() {
        let mut session = GameSession::default();
        for (row, col) in [(0, 1), (0, 0), (1, 1), (1, 0), (2, 1)] {
            let player = session.current_player();
            session.apply_move(row, col, player);
        }
        assert_eq!(
            winning_cells(&session),
            vec![Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)]
        );
        assert!(winning_cells(&GameSession::default()).is_empty());
    }

    #[test]
    fn test_status_texts() {
        let mut session = GameSession::default();
        assert_eq!(render_status(&session, &display()), "Your turn (X)");
        session.apply_move(0, 0, Player::PlayerA);
        assert_eq!(render_status(&session, &display()), "Computer thinking...");
    }

    #[test]
    fn test_tally_and_stats_lines() {
        let mut session = GameSession::default();
        assert_eq!(render_tally(&session), "Wins: You 0 - Computer 0 | Draws: 0");
        assert_eq!(render_search_stats(&session), None);

        session.apply_move(1, 1, Player::PlayerA);
        session.automated_move().unwrap();
        let stats = render_search_stats(&session).unwrap();
        assert!(stats.starts_with("Minimax: "));
        assert!(stats.contains("depth 8"));
    }

    #[test]
    fn test_hidden_stats_are_not_rendered() {
        let mut session = GameSession::default();
        session.apply_move(1, 1, Player::PlayerA);
        session.automated_move().unwrap();
        let display = DisplayConfig {
            show_search_stats: false,
            ..DisplayConfig::default()
        };
        assert!(!render_screen(&session, &display).contains("Minimax"));
    }
}
