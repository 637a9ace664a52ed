mod app;
mod config;
mod directory;
mod error;
mod events;
mod state;
mod ui;

use anyhow::Result;
use clap::{App as Cli, Arg};

fn main() -> Result<()> {
    let matches = Cli::new("phonebook-tui")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal contact directory with a validated entry form")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = config::Config::new();
    config.load(matches.value_of("config"))?;
    app::App::start(config)
}
