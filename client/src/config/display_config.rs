use common::config::Validate;
use common::games::tictactoe::{Player, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub human_label: char,
    pub automated_label: char,
    pub show_search_stats: bool,
}

impl DisplayConfig {
    pub fn label(&self, player: Player) -> char {
        match player.role() {
            Role::Human => self.human_label,
            Role::Automated => self.automated_label,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_label.is_whitespace() || self.automated_label.is_whitespace() {
            return Err("Player labels must be visible characters".to_string());
        }
        if self.human_label == self.automated_label {
            return Err(format!(
                "Player labels must differ, both are '{}'",
                self.human_label
            ));
        }
        if self.human_label == '.' || self.automated_label == '.' {
            return Err("'.' is reserved for empty cells".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            human_label: 'X',
            automated_label: 'O',
            show_search_stats: true,
        }
    }
}
