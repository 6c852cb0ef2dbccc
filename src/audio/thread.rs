use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;

use super::queue::SampleQueue;
use super::sink::create_sink;
use super::types::AudioCmd;

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

fn stop_sink(sink: &mut Option<Sink>) {
    if let Some(s) = sink.take() {
        s.stop();
    }
}

/// Start the next queued sample if nothing is previewing right now.
fn advance_samples(
    stream: &OutputStream,
    sample: &mut Option<Sink>,
    pending: &mut SampleQueue,
    settings: &AudioSettings,
) {
    if sample.as_ref().is_some_and(|s| !s.empty()) {
        return;
    }
    *sample = None;

    let limit = Duration::from_millis(settings.sample_ms);
    while let Some(path) = pending.next() {
        match create_sink(stream, &path, Some(limit), settings.volume) {
            Ok(s) => {
                s.play();
                *sample = Some(s);
                return;
            }
            Err(e) => log::warn!("skipping sample: {e}"),
        }
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                log::error!("no audio output device, playback disabled: {e}");
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped; keep the console clean.
        stream.log_on_drop(false);

        let mut current: Option<Sink> = None;
        let mut sample: Option<Sink> = None;
        let mut pending = SampleQueue::default();

        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(AudioCmd::Play(path)) => {
                    stop_sink(&mut current);
                    match create_sink(&stream, &path, None, settings.volume) {
                        Ok(s) => {
                            s.play();
                            current = Some(s);
                            log::debug!("playing {}", path.display());
                        }
                        Err(e) => log::warn!("cannot play: {e}"),
                    }
                }
                Ok(AudioCmd::Sample(path)) => {
                    pending.push(path);
                    log::debug!("sample queued, {} pending", pending.len());
                }
                Ok(AudioCmd::Stop) => {
                    stop_sink(&mut current);
                    stop_sink(&mut sample);
                    pending.clear();
                }
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    pending.clear();
                    for s in [current.take(), sample.take()].into_iter().flatten() {
                        fade_out_sink(&s, settings.volume, fade_out_ms);
                        s.stop();
                    }
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            advance_samples(&stream, &mut sample, &mut pending, &settings);
        }
    })
}
