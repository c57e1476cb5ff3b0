use std::error::Error;
use std::io;
use std::path::Path;

use four_in_a_row::cli::Shell;
use four_in_a_row::config::GameConfig;
use four_in_a_row::game::GameEngine;

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // Optional config file path as the first argument
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "game.toml".into());
    let config = GameConfig::load_or_default(Path::new(&config_path))?;

    let mut engine = GameEngine::new(config.rows, config.cols, config.win_length)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run(&mut engine)?;

    Ok(())
}
