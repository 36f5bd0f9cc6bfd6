use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    PlayerA,
    PlayerB,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Player::PlayerA => Role::Human,
            Player::PlayerB => Role::Automated,
        }
    }

    /// The player controlled by the search engine.
    pub fn automated() -> Player {
        Player::PlayerB
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::PlayerA => write!(f, "player A"),
            Player::PlayerB => write!(f, "player B"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Human,
    Automated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Player),
}

impl Cell {
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(*player),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position) -> Self {
        Self { player, start, end }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Results accumulated across games; survives `GameSession::reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_a_wins: u32,
    pub player_b_wins: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::PlayerA => self.player_a_wins += 1,
            Player::PlayerB => self.player_b_wins += 1,
        }
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    pub fn games_played(&self) -> u32 {
        self.player_a_wins + self.player_b_wins + self.draws
    }
}
