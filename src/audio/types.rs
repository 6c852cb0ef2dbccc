use std::path::PathBuf;

/// Commands accepted by the audio thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    /// Replace the current playback with this file.
    Play(PathBuf),
    /// Queue a short preview of this file; previews play back to back.
    Sample(PathBuf),
    /// Stop playback and drop any queued previews.
    Stop,
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
