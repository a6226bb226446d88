use anyhow::{bail, Result};
use pico_args::Arguments;
use std::path::PathBuf;

const HELP: &str = "\
runner - headless gesture-strike session driver

USAGE:
    runner [OPTIONS]

OPTIONS:
    --seed <N>        RNG seed for a reproducible session (default 49374)
    --ticks <N>       Maximum ticks to simulate (default 18000, ~5 min)
    --tuning <FILE>   TOML file overriding simulation tuning values
    -h, --help        Print this help

Set RUST_LOG=debug for per-tick detail, RUST_LOG=info for events only.
";

pub fn run() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let seed: u64 = pargs.opt_value_from_str("--seed")?.unwrap_or(49_374);
    let ticks: u32 = pargs.opt_value_from_str("--ticks")?.unwrap_or(18_000);
    let tuning_path: Option<PathBuf> = pargs.opt_value_from_str("--tuning")?;

    let leftover = pargs.finish();
    if !leftover.is_empty() {
        bail!("unexpected arguments: {leftover:?} (try --help)");
    }

    let mut config = game_core::Config::new();
    if let Some(path) = tuning_path {
        crate::tuning::load(&path)?.apply(&mut config);
        log::info!("applied tuning overrides from {}", path.display());
    }

    crate::pilot::run_session(config, seed, ticks)
}
