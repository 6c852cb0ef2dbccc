//! Single-track playback and shuffle previews over a [`TrackStore`].
//!
//! [`PlaybackController`] owns the store, the player and the session state.
//! At most one tracked playback is active at a time; a second start request
//! is refused with a diagnostic rather than queued or interrupting. The two
//! shuffle modes play samples and never touch the session state.
//!
//! User mistakes (bad index, double start, picking from an empty library)
//! are reported on the [`Report`] channel and swallowed. A multi-threaded
//! host must put the whole controller behind one lock.
//!
//! [`TrackStore`]: crate::store::TrackStore

mod controller;
mod error;
mod report;
mod state;

pub use controller::PlaybackController;
pub use error::PlaybackError;
pub use report::{Console, Report};
pub use state::PlaybackState;
