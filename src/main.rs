//! Maze Walker entry point
//!
//! Loads settings and runs a session. Without a windowing backend linked in,
//! the native build drives the headless backend with the autopilot.

use std::path::Path;

use maze_walker::platform::HeadlessBackend;
use maze_walker::{FrameOutcome, Game, HighScores, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Maze Walker (native) starting...");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let highscores_path = settings.highscores_path.clone();
    let mut backend = HeadlessBackend::new(settings.max_frames);

    let mut game = Game::new(settings);
    game.autopilot = true;
    log::info!("Headless session with autopilot, seed {}", game.settings.seed);

    let outcome = game.run(&mut backend);
    if outcome == FrameOutcome::GameOver {
        println!("Game Over!");
    }

    if let Some(path) = highscores_path {
        let mut scores = HighScores::load(&path).unwrap_or_else(|e| {
            log::warn!("Starting a new leaderboard: {e}");
            HighScores::new()
        });
        if let Some(rank) = game.record_score(&mut scores) {
            log::info!("New high score #{}: {}", rank, game.state.player.score);
        }
        if let Err(e) = scores.save(&path) {
            log::error!("Could not save high scores: {e}");
        }
    }
}
