use thiserror::Error;

use crate::store::IndexError;

/// A request the controller refused. These are reported, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error("Playback already in progress: stop the current track before starting another")]
    AlreadyPlaying,
    #[error("No tracks to choose from")]
    EmptyLibrary,
}
