//! Audio output behind the [`Player`] capability.
//!
//! The controller only ever issues three fire-and-forget commands: start a
//! tracked playback, play a short sample, stop. `RodioPlayer` forwards them
//! to a background thread that owns the output stream, so no call here waits
//! on the audio device.

mod player;
mod queue;
mod sink;
mod thread;
mod types;

#[cfg(test)]
pub(crate) mod recording;

pub use player::{Player, RodioPlayer};
