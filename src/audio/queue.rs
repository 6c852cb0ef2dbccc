//! Pending sample previews waiting for the audio thread.

use std::collections::VecDeque;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub(crate) struct SampleQueue {
    pending: VecDeque<PathBuf>,
}

impl SampleQueue {
    pub(crate) fn push(&mut self, path: PathBuf) {
        self.pending.push_back(path);
    }

    /// Next preview to start, oldest first.
    pub(crate) fn next(&mut self) -> Option<PathBuf> {
        self.pending.pop_front()
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}
