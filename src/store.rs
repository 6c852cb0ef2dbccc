//! The ordered, owned collection of tracks.
//!
//! `TrackStore` keeps insertion order and contiguous indices. Shuffles are the
//! only operations that reorder it. Callers holding user-supplied indices go
//! through [`TrackStore::check_index`] first; the raw accessors panic on a bad
//! index because reaching them with one is a bug.

use std::ops::Index;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::library::Track;

/// Why a caller-supplied index was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Index cannot be negative: {0}")]
    Negative(i64),
    #[error("Index is too large: {0}")]
    TooLarge(i64),
}

/// Substring predicate over one display field. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFilter<'a> {
    Artist(&'a str),
    Title(&'a str),
}

impl TrackFilter<'_> {
    pub fn matches(&self, track: &Track) -> bool {
        match self {
            TrackFilter::Artist(needle) => track.artist().contains(*needle),
            TrackFilter::Title(needle) => track.title().contains(*needle),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackStore {
    tracks: Vec<Track>,
}

impl TrackStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn add(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Mutable access for bookkeeping. Panics when `index` is out of range.
    pub fn track_mut(&mut self, index: usize) -> &mut Track {
        &mut self.tracks[index]
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Turn a caller-supplied index into a valid position in the store.
    pub fn check_index(&self, index: i64) -> Result<usize, IndexError> {
        if index < 0 {
            return Err(IndexError::Negative(index));
        }
        match usize::try_from(index) {
            Ok(i) if i < self.tracks.len() => Ok(i),
            _ => Err(IndexError::TooLarge(index)),
        }
    }

    /// Remove the track at `index`, shifting later tracks left.
    /// Panics when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Track {
        self.tracks.remove(index)
    }

    /// Drop every track matching `filter`, keeping survivors in order.
    /// Returns how many were removed.
    pub fn remove_where(&mut self, filter: TrackFilter<'_>) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| !filter.matches(t));
        before - self.tracks.len()
    }

    /// Matching tracks with their store positions. Does not touch the store;
    /// call again to restart.
    pub fn filter_view<'s>(
        &'s self,
        filter: TrackFilter<'s>,
    ) -> impl Iterator<Item = (usize, &'s Track)> + 's {
        self.tracks
            .iter()
            .enumerate()
            .filter(move |(_, t)| filter.matches(t))
    }

    /// An independent, uniformly permuted copy of the current tracks.
    pub fn shuffled_snapshot(&self, rng: &mut StdRng) -> Vec<Track> {
        let mut copy = self.tracks.clone();
        copy.shuffle(rng);
        copy
    }

    /// Uniformly permute the store's own order.
    pub fn shuffle_in_place(&mut self, rng: &mut StdRng) {
        self.tracks.shuffle(rng);
    }

    pub fn set_year(&mut self, index: usize, year: u32) {
        self.tracks[index].set_year(year);
    }

    pub fn increment_all_play_counts(&mut self) {
        self.tracks.iter_mut().for_each(Track::increment_play_count);
    }
}

impl Index<usize> for TrackStore {
    type Output = Track;

    fn index(&self, index: usize) -> &Track {
        &self.tracks[index]
    }
}

impl<'a> IntoIterator for &'a TrackStore {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
