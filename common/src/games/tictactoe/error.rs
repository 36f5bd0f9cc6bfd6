use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    OutOfRange { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
    GameOver,
    NotAutomatedTurn,
    NoEmptyCells,
    BoardDecided,
    IdenticalSides,
}

impl GameError {
    /// Caller bugs, as opposed to rejected user input.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            GameError::NotAutomatedTurn
                | GameError::NoEmptyCells
                | GameError::BoardDecided
                | GameError::IdenticalSides
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            GameError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotAutomatedTurn => {
                write!(f, "Automated move requested on the human player's turn")
            }
            GameError::NoEmptyCells => write!(f, "No empty cells left to search"),
            GameError::BoardDecided => write!(f, "Board already has a winner"),
            GameError::IdenticalSides => {
                write!(f, "Maximizing and minimizing players must differ")
            }
        }
    }
}

impl std::error::Error for GameError {}
