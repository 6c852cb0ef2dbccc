use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::audio::RodioPlayer;
use crate::library::scan;
use crate::playback::{Console, PlaybackController};
use crate::store::TrackStore;

mod commands;
mod console;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.logging.level.as_str()),
    )
    .init();

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.library.folder.clone());

    let store = TrackStore::from_tracks(scan(&dir, &settings.library));
    for track in &store {
        log::debug!(
            "loaded {} ({} - {}, year {})",
            track.filename(),
            track.artist(),
            track.title(),
            track.year()
        );
    }

    let player = RodioPlayer::new(settings.audio.clone());
    let mut controller =
        PlaybackController::with_seed(store, player, Console, settings.playback.seed);

    let loaded = format!(
        "Music library loaded. {} tracks.",
        controller.number_of_tracks()
    );
    controller.say(&loaded);
    controller.say("");

    let stdin = io::stdin();
    let session = console::run_session(stdin.lock(), &mut controller, || {
        print!("> ");
        let _ = io::stdout().flush();
    });

    controller
        .player()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));

    session?;
    Ok(())
}
