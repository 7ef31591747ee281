use std::io;

use anyhow::{Context, Result};
use podracer_core::Settings;

use crate::protocol::TickInput;
use crate::strategy::Pilot;

mod protocol;
mod strategy;

fn main() -> Result<()> {
    // logs go to stderr; stdout is the command channel
    env_logger::init();

    let settings = Settings::load().context("could not read config")?;
    let mut pilot = Pilot::new(settings);

    // one tick runs to completion before the next one's input exists: read,
    // decide, answer, repeat until the sim stops talking to us
    let stdin = io::stdin();
    let mut input = stdin.lock();
    while let Some(tick) = TickInput::read_from(&mut input)? {
        println!("{}", pilot.decide(&tick));
    }

    Ok(())
}
