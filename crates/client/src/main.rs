//! Terminal client binary.
//!
//! Composition root and I/O shell around `game-core`: assembles the demo
//! scenario, translates crossterm events into the core's symbolic input,
//! and drives the blocking session loop. Every rule lives in the core;
//! this binary only wires collaborators together and paints the result.

mod builder;
mod logging;
mod presentation;
mod terminal;

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let (mut engine, mut handler, world) = builder::build_demo();
    let env = world.env();

    let mut source = terminal::Terminal::enter()?;
    tracing::info!("session started");

    handler.run_session(&mut engine, &env, &mut source, |engine, mode| {
        if let Err(error) = presentation::draw(&world.map, engine, mode) {
            tracing::error!(%error, "draw failed");
        }
    });

    drop(source);
    tracing::info!(
        turns = engine.state().turn.completed,
        "session ended"
    );
    Ok(())
}
