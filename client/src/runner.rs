use std::error::Error;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use common::games::tictactoe::{GameError, GameSession, Position, Role};
use common::log;

use crate::config::Config;
use crate::input::{parse_command, Command, HELP_TEXT};
use crate::render::render_screen;

pub async fn run_game(config: &Config, self_play: bool) -> Result<(), Box<dyn Error>> {
    let mut session = GameSession::new(config.search.mode());
    let think_delay = Duration::from_millis(config.think_delay_ms);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !self_play {
        println!("{}\n", HELP_TEXT);
    }

    loop {
        print!("{}", render_screen(&session, &config.display));

        if session.is_game_over() && self_play {
            break;
        }

        if !session.is_game_over()
            && (self_play || session.current_player().role() == Role::Automated)
        {
            session = play_engine_turn(session, think_delay).await?;
            println!();
            continue;
        }

        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Place { row, col }) => {
                let player = session.current_player();
                if let Err(e) = session.try_apply_move(row, col, player) {
                    println!("Invalid move: {}", e);
                }
            }
            Ok(Command::Hint) => match session.hint() {
                Ok(hint) => println!(
                    "Best move: row {}, column {} (score {})",
                    hint.position.row + 1,
                    hint.position.col + 1,
                    hint.score
                ),
                Err(e) => println!("No hint available: {}", e),
            },
            Ok(Command::NewGame) => session.reset(),
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
        println!();
    }

    log!("Session finished, tally {:?}", session.tally());
    Ok(())
}

/// The search is CPU-bound, so the session moves to the blocking pool for the
/// duration of the move and comes back with it applied.
async fn play_engine_turn(
    mut session: GameSession,
    think_delay: Duration,
) -> Result<GameSession, Box<dyn Error>> {
    tokio::time::sleep(think_delay).await;

    let (session, result) = tokio::task::spawn_blocking(move || {
        let result = engine_move(&mut session);
        (session, result)
    })
    .await?;

    result?;
    Ok(session)
}

fn engine_move(session: &mut GameSession) -> Result<Position, GameError> {
    match session.current_player().role() {
        Role::Automated => session.automated_move(),
        Role::Human => {
            let player = session.current_player();
            let hint = session.hint()?;
            session.try_apply_move(hint.position.row, hint.position.col, player)?;
            Ok(hint.position)
        }
    }
}
