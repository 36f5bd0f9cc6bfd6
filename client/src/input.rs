use common::games::tictactoe::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based target cell. Range is checked by the game session.
    Place { row: usize, col: usize },
    Hint,
    NewGame,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>   place your mark, both counted from 1 (e.g. `2 3`)
  1-9           place your mark using keypad order, 1 = top left
  h, hint       show the best move for you
  n, new        start a new game, scores are kept
  ?, help       show this help
  q, quit       leave";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err("Enter a move, or `?` for help".to_string()),
        "h" | "hint" => return Ok(Command::Hint),
        "n" | "new" => return Ok(Command::NewGame),
        "?" | "help" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [cell] => parse_keypad(cell),
        [row, col] => Ok(Command::Place {
            row: parse_coordinate(row)?,
            col: parse_coordinate(col)?,
        }),
        _ => Err(format!("Unrecognized command `{}`", trimmed)),
    }
}

fn parse_keypad(cell: &str) -> Result<Command, String> {
    let index: usize = cell
        .parse()
        .map_err(|_| format!("Unrecognized command `{}`", cell))?;
    let cells = BOARD_SIZE * BOARD_SIZE;
    if index == 0 || index > cells {
        return Err(format!("Cell number must be between 1 and {}", cells));
    }
    Ok(Command::Place {
        row: (index - 1) / BOARD_SIZE,
        col: (index - 1) % BOARD_SIZE,
    })
}

fn parse_coordinate(value: &str) -> Result<usize, String> {
    let number: usize = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    number
        .checked_sub(1)
        .ok_or_else(|| "Rows and columns are counted from 1".to_string())
}
