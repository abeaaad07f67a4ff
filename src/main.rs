use std::io;

use anyhow::Context;
use clap::Parser;
use firstmove::chess::movegen::Rules;
use firstmove::config::Config;
use firstmove::{logging, Engine};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(config.verbosity())?;
    if config.rules() != Rules::default() {
        log::info!("Non-default rules: {:?}", config.rules());
    }
    firstmove::print_engine_info();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Engine::new(config.mode(), config.rules(), &mut input, &mut output)
        .run()
        .context("session failed")
}
