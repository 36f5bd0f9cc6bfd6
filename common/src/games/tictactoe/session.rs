use crate::log;
use super::board::Board;
use super::error::GameError;
use super::minimax::{BestMove, SearchMode, SearchStats, Searcher};
use super::types::{BOARD_SIZE, Cell, GameStatus, Player, Position, Tally, WinningLine};

const MAX_MOVES: usize = BOARD_SIZE * BOARD_SIZE;

/// One human-versus-engine match table: the current game plus results of
/// every game played on it so far.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves_made: usize,
    tally: Tally,
    last_automated_move: Option<Position>,
    searcher: Searcher,
    game_search_stats: SearchStats,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SearchMode::default())
    }
}

impl GameSession {
    pub fn new(search_mode: SearchMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::PlayerA,
            status: GameStatus::InProgress,
            moves_made: 0,
            tally: Tally::default(),
            last_automated_move: None,
            searcher: Searcher::new(search_mode),
            game_search_stats: SearchStats::default(),
        }
    }

    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> bool {
        self.try_apply_move(row, col, player).is_ok()
    }

    /// Either commits the whole transition or leaves the session untouched.
    /// Any mark may be placed; the turn passes to its opponent.
    pub fn try_apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfRange { row, col });
        }
        if !self.board.place(row, col, player) {
            return Err(GameError::CellOccupied { row, col });
        }

        self.moves_made += 1;
        self.check_game_over(player);

        if self.status == GameStatus::InProgress {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self, player: Player) {
        if self.board.has_won(player) {
            self.status = GameStatus::Won(player);
            self.tally.record_win(player);
            log!("Game over: {} won after {} moves", player, self.moves_made);
        } else if self.moves_made == MAX_MOVES {
            self.status = GameStatus::Draw;
            self.tally.record_draw();
            log!("Game over: draw");
        }
    }

    pub fn automated_move(&mut self) -> Result<Position, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current_player;
        if player != Player::automated() {
            return Err(GameError::NotAutomatedTurn);
        }

        let best = self
            .searcher
            .best_move(&mut self.board, player, player.opponent())?;
        let stats = self.searcher.last_stats();
        self.game_search_stats.accumulate(&stats);

        self.try_apply_move(best.position.row, best.position.col, player)?;
        self.last_automated_move = Some(best.position);

        log!(
            "Automated move {} scored {} ({} nodes, depth {})",
            best.position,
            best.score,
            stats.nodes_explored,
            stats.max_depth
        );

        Ok(best.position)
    }

    /// Best move for whoever is to move, computed on a copy of the board.
    /// Session state and search statistics are left as they are.
    pub fn hint(&self) -> Result<BestMove, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        let mut board = self.board.clone();
        let player = self.current_player;
        Searcher::new(self.searcher.mode()).best_move(&mut board, player, player.opponent())
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::PlayerA;
        self.status = GameStatus::InProgress;
        self.moves_made = 0;
        self.last_automated_move = None;
        self.searcher.reset_stats();
        self.game_search_stats = SearchStats::default();
        log!("New game started, {} played so far", self.tally.games_played());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winner()
            .and_then(|player| self.board.winning_line(player))
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn last_automated_move(&self) -> Option<Position> {
        self.last_automated_move
    }

    pub fn search_mode(&self) -> SearchMode {
        self.searcher.mode()
    }

    pub fn last_search_stats(&self) -> SearchStats {
        self.searcher.last_stats()
    }

    /// Sum of every search made in the current game.
    pub fn game_search_stats(&self) -> SearchStats {
        self.game_search_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Player = Player::PlayerA;
    const B: Player = Player::PlayerB;

    fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            let player = session.current_player();
            assert!(session.apply_move(row, col, player));
        }
    }

    #[test]
    fn test_new_session_initial_state() {
        let session = GameSession::default();
        assert_eq!(session.current_player(), A);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.moves_made(), 0);
        assert_eq!(session.tally(), Tally::default());
        assert_eq!(session.last_automated_move(), None);
        assert_eq!(session.search_mode(), SearchMode::AlphaBeta);
    }

    #[test]
    fn test_apply_move_toggles_turn() {
        let mut session = GameSession::default();
        assert!(session.apply_move(1, 1, A));
        assert_eq!(session.current_player(), B);
        assert_eq!(session.moves_made(), 1);
        assert_eq!(session.cell(1, 1), Some(Cell::Marked(A)));
    }

    #[test]
    fn test_apply_move_rejects_invalid_without_changes() {
        let mut session = GameSession::default();
        play(&mut session, &[(0, 0)]);
        let board_before = session.board().clone();

        assert_eq!(
            session.try_apply_move(0, 0, B),
            Err(GameError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            session.try_apply_move(3, 1, B),
            Err(GameError::OutOfRange { row: 3, col: 1 })
        );
        assert!(!session.apply_move(1, 7, B));

        assert_eq!(session.board(), &board_before);
        assert_eq!(session.moves_made(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), B);
    }

    #[test]
    fn test_apply_move_accepts_either_mark() {
        let mut session = GameSession::default();
        assert!(session.apply_move(0, 0, B));
        assert_eq!(session.cell(0, 0), Some(Cell::Marked(B)));
        assert_eq!(session.moves_made(), 1);
        assert_eq!(session.current_player(), A);

        assert!(session.apply_move(1, 1, B));
        assert_eq!(session.current_player(), A);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_win_records_tally_and_stops_game() {
        let mut session = GameSession::default();
        play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(session.status(), GameStatus::Won(A));
        assert_eq!(session.winner(), Some(A));
        assert_eq!(session.tally().player_a_wins, 1);
        assert_eq!(session.current_player(), A);
        let line = session.winning_line().unwrap();
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));

        assert_eq!(session.try_apply_move(2, 2, A), Err(GameError::GameOver));
        assert_eq!(session.automated_move(), Err(GameError::GameOver));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut session = GameSession::default();
        play(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(session.status(), GameStatus::Draw);
        assert_eq!(session.winner(), None);
        assert_eq!(session.tally().draws, 1);
        assert_eq!(session.moves_made(), 9);
    }

    #[test]
    fn test_automated_move_requires_its_turn() {
        let mut session = GameSession::default();
        let error = session.automated_move().unwrap_err();
        assert_eq!(error, GameError::NotAutomatedTurn);
        assert!(error.is_precondition_violation());
    }

    #[test]
    fn test_automated_move_applies_search_result() {
        let mut session = GameSession::default();
        play(&mut session, &[(1, 1)]);

        let position = session.automated_move().unwrap();
        assert_eq!(position, Position::new(0, 0));
        assert_eq!(session.cell(0, 0), Some(Cell::Marked(B)));
        assert_eq!(session.last_automated_move(), Some(position));
        assert_eq!(session.current_player(), A);
        assert!(session.last_search_stats().nodes_explored > 0);
        assert_eq!(session.game_search_stats(), session.last_search_stats());
    }

    #[test]
    fn test_automated_move_wins_when_possible() {
        let mut session = GameSession::default();
        play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)]);
        let position = session.automated_move().unwrap();
        assert_eq!(position, Position::new(1, 2));
        assert_eq!(session.status(), GameStatus::Won(B));
        assert_eq!(session.tally().player_b_wins, 1);
    }

    #[test]
    fn test_game_search_stats_accumulate() {
        let mut session = GameSession::default();
        play(&mut session, &[(0, 0)]);
        session.automated_move().unwrap();
        let first = session.last_search_stats();
        let next = session.hint().unwrap().position;
        play(&mut session, &[(next.row, next.col)]);
        session.automated_move().unwrap();
        let second = session.last_search_stats();

        assert_eq!(
            session.game_search_stats().nodes_explored,
            first.nodes_explored + second.nodes_explored
        );
    }

    #[test]
    fn test_hint_leaves_session_untouched() {
        let mut session = GameSession::default();
        play(&mut session, &[(0, 0), (1, 1), (0, 1)]);
        let board_before = session.board().clone();

        let hint = session.hint().unwrap();
        assert_eq!(hint.position, Position::new(0, 2));
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.current_player(), B);
        assert_eq!(session.last_search_stats(), SearchStats::default());
    }

    #[test]
    fn test_human_following_hints_draws_against_engine() {
        let mut session = GameSession::default();
        while !session.is_game_over() {
            if session.current_player() == Player::automated() {
                session.automated_move().unwrap();
            } else {
                let hint = session.hint().unwrap();
                assert!(session.apply_move(hint.position.row, hint.position.col, A));
            }
        }
        assert_eq!(session.status(), GameStatus::Draw);
    }

    #[test]
    fn test_reset_keeps_tally() {
        let mut session = GameSession::default();
        play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        session.reset();
        play(&mut session, &[(1, 1)]);
        session.automated_move().unwrap();
        let tally_before = session.tally();

        session.reset();

        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.current_player(), A);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.moves_made(), 0);
        assert_eq!(session.last_automated_move(), None);
        assert_eq!(session.last_search_stats(), SearchStats::default());
        assert_eq!(session.game_search_stats(), SearchStats::default());
        assert_eq!(session.tally(), tally_before);
        assert_eq!(session.tally().player_a_wins, 1);
    }
}
