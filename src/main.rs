//! Forest Dash: a single-screen 2D platformer
//!
//! Dodge the patrolling adventurers, grab the coins, reach the flag.
//! Movement runs on a fixed simulation step; cooldowns use wall-clock time.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod audio;
mod game;
mod input;
mod settings;

use std::path::Path;
use macroquad::prelude::*;
use app::App;
use game::level::{SCREEN_HEIGHT, SCREEN_WIDTH};
use settings::{GameSettings, SETTINGS_FILE};

fn window_conf() -> Conf {
    // Runs before logging is up, so read quietly; main() reloads with logging
    let settings = GameSettings::load(Path::new(SETTINGS_FILE)).unwrap_or_default();
    Conf {
        window_title: format!("{} v{}", settings.window.title, VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: settings.window.high_dpi,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match "forest_dash=info".parse::<tracing_subscriber::filter::Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    tracing::info!(version = VERSION, "starting Forest Dash");

    let settings = GameSettings::load_or_default(Path::new(SETTINGS_FILE));
    let fps_limit = settings.fps_limit;
    let mut app = App::new(settings).await;

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        app.update(get_frame_time() as f64);
        app.draw();

        if let Some(target_frame_time) = fps_limit.frame_time() {
            let elapsed = get_time() - frame_start;
            let remaining = target_frame_time - elapsed;
            if remaining > 0.0 {
                // Native: use sleep for bulk, then spin-wait for precision
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let spin_margin = 0.002; // 2ms
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                // WASM: the browser paces frames through requestAnimationFrame
            }
        }

        next_frame().await;
    }
}
