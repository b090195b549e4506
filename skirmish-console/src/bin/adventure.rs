use std::io;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    skirmish_console::run_adventure(&mut input, &mut output)
        .context("the adventure aborted unexpectedly")?;
    Ok(())
}
