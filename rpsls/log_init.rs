use simplelog::*;

use crate::error::RpslsError;

// Logs go to stderr, stdout carries the game itself
pub fn init(level: LevelFilter, color: bool) -> Result<(), RpslsError> {
    let color = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        color,
    )])
    .map_err(|e| RpslsError::Logger(e.to_string()))
}
