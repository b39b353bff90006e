use clap::{App, Arg};
use log::{info, LevelFilter};
use std::default;
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub log_level: LevelFilter,
    pub color: bool,
}

impl CliConfig {
    /// Reads the configuration from the process arguments, exiting on bad usage.
    pub fn new() -> Self {
        match Self::from_args(std::env::args_os()) {
            Ok(config) => config,
            Err(e) => e.exit(),
        }
    }

    pub fn from_args<I, T>(args: I) -> clap::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let version = env!("CARGO_PKG_VERSION");
        let authors = env!("CARGO_PKG_AUTHORS");

        let args = App::new("Rock Paper Scissors Lizard Spock")
            .version(version)
            .author(authors)
            .arg(
                Arg::with_name("VERBOSE")
                    .short("v")
                    .multiple(true)
                    .help("Raises diagnostic logging on stderr, may be repeated"),
            )
            .arg(
                Arg::with_name("NO_COLOR")
                    .long("no-color")
                    .help("If specified, log output will not be colored"),
            )
            .get_matches_from_safe(args)?;

        let log_level = match args.occurrences_of("VERBOSE") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        let color = !args.is_present("NO_COLOR");

        Ok(Self { log_level, color })
    }

    pub fn log(&self) {
        info!("[Config]");

        let mut default = false;
        if self == &CliConfig::default() {
            default = true;
        }

        info!("Default: {}", default);
        info!("| LOG_LEVEL: {}", self.log_level);
        info!("| COLOR: {}", self.color);
    }
}

impl default::Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            color: true,
        }
    }
}
