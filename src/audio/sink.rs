//! Utilities for creating `rodio` sinks from track files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SinkError {
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {source}")]
    Decode { path: PathBuf, source: DecoderError },
}

/// Create a paused `Sink` for `path`, cut to `limit` when one is given.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
    limit: Option<Duration>,
    volume: f32,
) -> Result<Sink, SinkError> {
    let file = File::open(path).map_err(|source| SinkError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| SinkError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(stream.mixer());
    match limit {
        Some(d) => sink.append(source.take_duration(d)),
        None => sink.append(source),
    }
    sink.set_volume(volume);
    sink.pause();
    Ok(sink)
}
