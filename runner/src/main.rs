//! Headless session driver.
//!
//! Stands in for the camera, renderer and audio backends: a scripted pilot
//! produces synthetic hand landmarks, the gesture pipeline and simulation
//! run exactly as they would in the real game, and simulation events land
//! in the log instead of on screen.

mod cli;
mod pilot;
mod tuning;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}
