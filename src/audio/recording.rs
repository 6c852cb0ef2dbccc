//! A [`Player`] that only remembers what it was asked to do.

use super::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlayerCall {
    Start(String),
    Sample(String),
    Stop,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingPlayer {
    pub(crate) calls: Vec<PlayerCall>,
}

impl RecordingPlayer {
    pub(crate) fn samples(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PlayerCall::Sample(f) => Some(f.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Player for RecordingPlayer {
    fn start_playing(&mut self, filename: &str) {
        self.calls.push(PlayerCall::Start(filename.to_string()));
    }

    fn play_sample(&mut self, filename: &str) {
        self.calls.push(PlayerCall::Sample(filename.to_string()));
    }

    fn stop(&mut self) {
        self.calls.push(PlayerCall::Stop);
    }
}
