use guessing_game::logging::{self, LogLevel};
use guessing_game::{GameConfig, Session, SessionError};
use std::io;

fn main() -> io::Result<()> {
    logging::init(LogLevel::from_env());

    let config = GameConfig::default();
    let engine = match config.build_engine() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Could not start the game: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(engine, stdin.lock(), stdout.lock());

    match session.run() {
        Ok(summary) => {
            tracing::debug!(
                guesses = summary.guesses,
                invalid_inputs = summary.invalid_inputs,
                "game won"
            );
            Ok(())
        }
        Err(SessionError::Io(e)) => Err(e),
        Err(e) => {
            eprintln!("\n{}", e);
            std::process::exit(1);
        }
    }
}
