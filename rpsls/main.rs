use log::info;
use std::io;

use rpsls_cli::CliConfig;

mod draw;
mod error;
mod log_init;
mod session;
use draw::SecureDraw;
use session::Session;

fn main() {
    let config = CliConfig::new();
    log_init::init(config.log_level, config.color).unwrap_or_else(|e| {
        eprintln!("Error starting game: {}", e);
        std::process::exit(2);
    });
    info!("Starting Rock Paper Scissors Lizard Spock...");
    config.log();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), SecureDraw);
    if let Err(e) = session.run() {
        eprintln!("Error running game: {}", e);
        std::process::exit(2);
    }
}
