use common::config::Validate;
use common::games::tictactoe::SearchMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SearchConfig {
    /// Alpha-beta cutoffs; turning them off only makes the search slower.
    pub pruning: bool,
}

impl SearchConfig {
    pub fn mode(&self) -> SearchMode {
        if self.pruning {
            SearchMode::AlphaBeta
        } else {
            SearchMode::Exhaustive
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}
