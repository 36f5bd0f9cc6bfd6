//! Exhaustive minimax search with alpha-beta pruning.
//!
//! Scores are depth-aware: a win found closer to the root scores higher, a
//! loss found further away scores higher, so the engine prefers quick wins
//! and slow losses. Candidate moves are tried in row-major order and the
//! first one with the best score is kept.

use std::ops::{Deref, DerefMut};

use super::board::Board;
use super::error::GameError;
use super::types::{Player, Position};

pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    AlphaBeta,
    /// Plain minimax without cutoffs.
    Exhaustive,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_explored: u64,
    pub max_depth: usize,
}

impl SearchStats {
    fn record_node(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn accumulate(&mut self, other: &SearchStats) {
        self.nodes_explored += other.nodes_explored;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

/// Value of one node. `best_move` is `None` at terminal leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestMove {
    pub position: Position,
    pub score: i32,
}

/// Score of a finished position, or `None` while the game can continue.
pub fn terminal_score(
    board: &Board,
    depth: usize,
    maximizing: Player,
    minimizing: Player,
) -> Option<i32> {
    if board.has_won(maximizing) {
        return Some(WIN_SCORE - depth as i32);
    }
    if board.has_won(minimizing) {
        return Some(depth as i32 - WIN_SCORE);
    }
    if board.is_full() {
        return Some(DRAW_SCORE);
    }
    None
}

/// Optimal move for `maximizing` with the default search mode.
pub fn best_move(
    board: &mut Board,
    maximizing: Player,
    minimizing: Player,
) -> Result<Position, GameError> {
    Searcher::default()
        .best_move(board, maximizing, minimizing)
        .map(|best| best.position)
}

#[derive(Debug, Default)]
pub struct Searcher {
    mode: SearchMode,
    last_stats: SearchStats,
}

impl Searcher {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            last_stats: SearchStats::default(),
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Counters of the most recent `best_move` call.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    pub fn reset_stats(&mut self) {
        self.last_stats = SearchStats::default();
    }

    /// Searches to every terminal state. The board is handed back unchanged.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        maximizing: Player,
        minimizing: Player,
    ) -> Result<BestMove, GameError> {
        if maximizing == minimizing {
            return Err(GameError::IdenticalSides);
        }
        if board.winner().is_some() {
            return Err(GameError::BoardDecided);
        }
        if board.is_full() {
            return Err(GameError::NoEmptyCells);
        }

        let mut minimax = Minimax {
            maximizing,
            minimizing,
            mode: self.mode,
            stats: SearchStats::default(),
        };
        let result = minimax.evaluate(board, 0, true, i32::MIN, i32::MAX);
        self.last_stats = minimax.stats;

        let position = result.best_move.ok_or(GameError::NoEmptyCells)?;
        Ok(BestMove {
            position,
            score: result.score,
        })
    }
}

struct Minimax {
    maximizing: Player,
    minimizing: Player,
    mode: SearchMode,
    stats: SearchStats,
}

impl Minimax {
    fn evaluate(
        &mut self,
        board: &mut Board,
        depth: usize,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.record_node(depth);

        if let Some(score) = terminal_score(board, depth, self.maximizing, self.minimizing) {
            return SearchResult {
                score,
                best_move: None,
            };
        }

        let mover = if is_maximizing {
            self.maximizing
        } else {
            self.minimizing
        };
        let mut best = SearchResult {
            score: if is_maximizing { i32::MIN } else { i32::MAX },
            best_move: None,
        };

        for position in board.empty_cells() {
            let score = {
                let mut speculation = Speculation::place(board, position, mover);
                self.evaluate(&mut speculation, depth + 1, !is_maximizing, alpha, beta)
                    .score
            };

            if is_maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(position),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        best_move: Some(position),
                    };
                }
                beta = beta.min(score);
            }

            if self.mode == SearchMode::AlphaBeta && beta <= alpha {
                break;
            }
        }

        best
    }
}

/// A mark placed for the duration of one subtree; cleared again on drop.
struct Speculation<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Speculation<'a> {
    fn place(board: &'a mut Board, position: Position, player: Player) -> Self {
        let placed = board.place(position.row, position.col, player);
        debug_assert!(placed, "speculative move on a taken cell {}", position);
        Self { board, position }
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position.row, self.position.col);
    }
}
