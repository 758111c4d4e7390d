use std::io::{self, Read, Write};
use std::process::ExitCode;

use log::debug;
use poisongrid::input::parse_board;
use poisongrid::report::write_report;
use poisongrid::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
enum Failure {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}

fn run(input: &str, out: impl Write) -> Result<(), Failure> {
    let board = parse_board(input)?;
    debug!("board:\n{}", board);

    let table = board.solve();
    debug!("win table:\n{}", table);

    write_report(&table, out)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut input = String::new();
    let result = io::stdin()
        .read_to_string(&mut input)
        .map_err(Failure::from)
        .and_then(|_| run(&input, io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("error: {}", failure);
            ExitCode::FAILURE
        }
    }
}
