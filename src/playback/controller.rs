use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

use crate::audio::Player;
use crate::library::Track;
use crate::store::{TrackFilter, TrackStore};

use super::error::PlaybackError;
use super::report::Report;
use super::state::PlaybackState;

pub struct PlaybackController<P: Player, R: Report> {
    store: TrackStore,
    player: P,
    out: R,
    state: PlaybackState,
    rng: StdRng,
}

impl<P: Player, R: Report> PlaybackController<P, R> {
    pub fn new(store: TrackStore, player: P, out: R, rng: StdRng) -> Self {
        Self {
            store,
            player,
            out,
            state: PlaybackState::Idle,
            rng,
        }
    }

    /// Build a controller whose randomness is fixed by `seed`, or freshly
    /// seeded when there is none.
    pub fn with_seed(store: TrackStore, player: P, out: R, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        log::debug!("random seed {seed}");
        Self::new(store, player, out, StdRng::seed_from_u64(seed))
    }

    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    #[cfg(test)]
    pub fn output(&self) -> &R {
        &self.out
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn number_of_tracks(&self) -> usize {
        self.store.count()
    }

    pub fn add_track(&mut self, track: Track) {
        self.store.add(track);
    }

    /// Add a track described only by its file name.
    pub fn add_file(&mut self, filename: &str) {
        self.store.add(Track::from_filename(filename));
    }

    /// Write one line to the report channel.
    pub fn say(&mut self, text: &str) {
        self.out.line(text);
    }

    fn diagnose(&mut self, err: &PlaybackError) {
        log::warn!("{err}");
        self.out.line(&err.to_string());
    }

    fn ensure_idle(&self) -> Result<(), PlaybackError> {
        if self.state.is_playing() {
            Err(PlaybackError::AlreadyPlaying)
        } else {
            Ok(())
        }
    }

    /// Start a tracked playback at a position already known to be valid.
    fn start(&mut self, index: usize) {
        let track = self.store.track_mut(index);
        track.increment_play_count();
        let filename = track.filename().to_string();
        let now_playing = format!("Now playing: {} - {}", track.artist(), track.title());

        self.player.start_playing(&filename);
        self.state = PlaybackState::Playing;
        log::info!("started {filename}");
        self.say(&now_playing);
    }

    fn try_play_at(&mut self, index: i64) -> Result<(), PlaybackError> {
        self.ensure_idle()?;
        let index = self.store.check_index(index)?;
        self.start(index);
        Ok(())
    }

    /// Play the track at `index`. Refused while another track is playing or
    /// when the index is out of range.
    pub fn play_at(&mut self, index: i64) {
        if let Err(e) = self.try_play_at(index) {
            self.diagnose(&e);
        }
    }

    /// Play the first track. An empty library is a silent no-op.
    pub fn play_first(&mut self) {
        if let Err(e) = self.ensure_idle() {
            self.diagnose(&e);
            return;
        }
        if !self.store.is_empty() {
            self.start(0);
        }
    }

    /// Play a uniformly chosen track.
    pub fn play_random(&mut self) {
        match (0..self.store.count()).choose(&mut self.rng) {
            Some(index) => self.play_at(index as i64),
            None => self.diagnose(&PlaybackError::EmptyLibrary),
        }
    }

    /// Stop the player and return to idle, whatever the current state.
    pub fn stop(&mut self) {
        self.player.stop();
        if self.state.is_playing() {
            log::info!("stopped");
        }
        self.state = PlaybackState::Idle;
    }

    fn preview(&mut self, track: &Track) {
        self.say(&track.details());
        self.player.play_sample(track.filename());
    }

    /// Shuffle the library itself, then sample every track in the new order.
    ///
    /// Does not take part in the single-playback guard.
    pub fn play_shuffle_all(&mut self) {
        self.store.shuffle_in_place(&mut self.rng);
        for index in 0..self.store.count() {
            let track = self.store[index].clone();
            self.preview(&track);
            self.store.track_mut(index).increment_play_count();
        }
    }

    /// Sample every track once in the library's current order while the
    /// library itself is reshuffled independently.
    ///
    /// The pre-shuffle order is copied into a working queue that is consumed
    /// front to back. Does not take part in the single-playback guard.
    pub fn play_shuffle_consume(&mut self) {
        let mut queue: VecDeque<Track> = self.store.iter().cloned().collect();
        self.store.increment_all_play_counts();
        self.store.shuffle_in_place(&mut self.rng);

        while let Some(track) = queue.pop_front() {
            self.preview(&track);
        }
    }

    pub fn report_playing_state(&mut self) {
        if self.state.is_playing() {
            self.say("Playback in progress");
        } else {
            self.say("Nothing is playing");
        }
    }

    pub fn list_track(&mut self, index: i64) {
        match self.store.check_index(index) {
            Ok(i) => {
                if let Some(track) = self.store.get(i) {
                    let line = format!("Track {i}: {}", track.details());
                    self.say(&line);
                }
            }
            Err(e) => self.diagnose(&e.into()),
        }
    }

    pub fn list_all(&mut self) {
        self.say("Track listing:");
        let lines: Vec<String> = self.store.iter().map(Track::details).collect();
        for line in &lines {
            self.say(line);
        }
    }

    fn list_matching(&mut self, filter: TrackFilter<'_>) {
        let lines: Vec<String> = self
            .store
            .filter_view(filter)
            .map(|(i, t)| format!("Track {i}: {}", t.details()))
            .collect();
        for line in &lines {
            self.say(line);
        }
    }

    /// List every track whose artist contains `artist`.
    pub fn list_by_artist(&mut self, artist: &str) {
        self.list_matching(TrackFilter::Artist(artist));
    }

    /// List every track whose title contains `title`.
    pub fn find_in_title(&mut self, title: &str) {
        self.list_matching(TrackFilter::Title(title));
    }

    /// List the library in a random order without changing it.
    pub fn list_shuffled(&mut self) {
        let snapshot = self.store.shuffled_snapshot(&mut self.rng);
        for track in &snapshot {
            self.say(&track.details());
        }
    }

    pub fn remove_track(&mut self, index: i64) {
        match self.store.check_index(index) {
            Ok(i) => {
                let removed = self.store.remove_at(i);
                log::info!("removed {}", removed.filename());
            }
            Err(e) => self.diagnose(&e.into()),
        }
    }

    pub fn remove_by_artist(&mut self, artist: &str) {
        let n = self.store.remove_where(TrackFilter::Artist(artist));
        log::info!("removed {n} tracks by artist {artist:?}");
    }

    pub fn remove_by_title(&mut self, title: &str) {
        let n = self.store.remove_where(TrackFilter::Title(title));
        log::info!("removed {n} tracks with title {title:?}");
    }

    /// Correct the year of a track. Invalid indices are ignored.
    pub fn set_year_of_track(&mut self, index: i64, year: u32) {
        if let Ok(i) = self.store.check_index(index) {
            self.store.set_year(i, year);
        }
    }
}
