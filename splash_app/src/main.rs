//! Loading screen
//!
//! Opens a window and shows an animated "Loading..." caption above a line with
//! the current surface resolution. Configuration is read from
//! `config/splash.toml` when present.

mod game;

use game::LoadingGame;
use splash_engine::foundation::logging;
use splash_engine::prelude::*;

const CONFIG_PATH: &str = "config/splash.toml";

fn main() {
    logging::init();
    log::info!("Starting loading screen");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SplashConfig::load_or_default(CONFIG_PATH)?;
    log::info!(
        "Font {} with {:?} fallback",
        config.font.asset, config.font.fallback
    );

    let mut app = LoadingGame::new(&config);
    Engine::run(config, &mut app)?;
    Ok(())
}
