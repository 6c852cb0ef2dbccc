//! troubadour: a console music organizer.
//!
//! Loads a folder of tracks, then reads commands from stdin to list, search,
//! edit and play them. Only one track plays at a time; the shuffle modes
//! play short samples of every track instead.

mod audio;
mod config;
mod library;
mod playback;
mod runtime;
mod store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
