mod bundle;
mod config;
mod paths;
mod platform;
mod runner;

use anyhow::Result;

fn main() -> Result<()> {
    let launcher = paths::launcher_path()?;
    let root = bundle::find_root(&launcher)?;
    runner::run(&launcher, &root, platform::detect())
}
