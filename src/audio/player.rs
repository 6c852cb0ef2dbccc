use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// The playback commands the organizer needs from an audio device.
///
/// Every command is fire-and-forget: nothing is returned and failures of the
/// underlying device are the implementation's business.
pub trait Player {
    /// Begin a tracked playback of `filename`.
    fn start_playing(&mut self, filename: &str);
    /// Play a short preview of `filename`.
    fn play_sample(&mut self, filename: &str);
    fn stop(&mut self);
}

/// [`Player`] backed by `rodio` on a dedicated audio thread.
pub struct RodioPlayer {
    tx: Sender<AudioCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl RodioPlayer {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let audio_handle = spawn_audio_thread(rx, audio_settings);

        Self {
            tx,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    fn send_or_log(&self, cmd: AudioCmd) {
        if let Err(e) = self.send(cmd) {
            log::warn!("audio thread is gone, dropped {:?}", e.0);
        }
    }

    /// Fade out whatever is audible and wait for the audio thread to finish.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl Player for RodioPlayer {
    fn start_playing(&mut self, filename: &str) {
        self.send_or_log(AudioCmd::Play(PathBuf::from(filename)));
    }

    fn play_sample(&mut self, filename: &str) {
        self.send_or_log(AudioCmd::Sample(PathBuf::from(filename)));
    }

    fn stop(&mut self) {
        self.send_or_log(AudioCmd::Stop);
    }
}
