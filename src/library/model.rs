use std::path::Path;

use super::naming::details_from_filename;

/// One audio file known to the organizer.
///
/// `filename`, `artist` and `title` are fixed at construction. `year` may be
/// corrected later and `play_count` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    filename: String,
    artist: String,
    title: String,
    year: u32,
    play_count: u32,
}

impl Track {
    pub fn new(
        filename: impl Into<String>,
        artist: impl Into<String>,
        title: impl Into<String>,
        year: u32,
    ) -> Self {
        Self {
            filename: filename.into(),
            artist: artist.into(),
            title: title.into(),
            year,
            play_count: 0,
        }
    }

    /// Build a track from a file name alone, using the `Artist-Title.ext`
    /// convention for the display fields.
    pub fn from_filename(filename: &str) -> Self {
        let (artist, title) = details_from_filename(Path::new(filename));
        Self::new(filename, artist, title, 0)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn set_year(&mut self, year: u32) {
        self.year = year;
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    pub fn increment_play_count(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }

    /// One-line description used by every listing.
    pub fn details(&self) -> String {
        let mut line = format!("{}: {}  (file: {})", self.artist, self.title, self.filename);
        if self.year > 0 {
            line.push_str(&format!("  year: {}", self.year));
        }
        line.push_str(&format!("  plays: {}", self.play_count));
        line
    }
}
