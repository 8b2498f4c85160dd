mod preview;
mod studio;

use anyhow::{Context, Result};
use trifan_engine::device::GpuInit;
use trifan_engine::logging::{LoggingConfig, init_logging};
use trifan_engine::window::Runtime;
use trifan_scenes::SceneKind;

use studio::Studio;

/// `trifan-studio [scene...]`; with no arguments every scene is shown.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scenes = parse_scenes(std::env::args().skip(1))?;
    log::info!(
        "opening {}",
        scenes.iter().map(|s| s.name()).collect::<Vec<_>>().join(", ")
    );

    let windows = Studio::window_configs(&scenes);
    Runtime::run(windows, GpuInit::default(), Studio::new(&scenes))
}

fn parse_scenes(args: impl Iterator<Item = String>) -> Result<Vec<SceneKind>> {
    let scenes = args
        .map(|a| a.parse::<SceneKind>())
        .collect::<Result<Vec<_>, _>>()
        .context("invalid scene argument")?;

    Ok(if scenes.is_empty() { SceneKind::ALL.to_vec() } else { scenes })
}
