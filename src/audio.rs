//! Soundtrack playback.
//!
//! Thin rodio wrapper owned by whichever presentation mode is active.
//! Every failure here is non-fatal: a deck with no playable soundtrack
//! still navigates, it is just silent.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio output device available: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("audio output refused playback: {0}")]
    Play(#[from] rodio::PlayError),
    #[error("could not open track: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not decode track: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("no track loaded")]
    NoTrack,
}

pub struct AudioPlayer {
    // The stream must stay alive for the sink to keep playing.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
    track: Option<PathBuf>,
    duration: Option<Duration>,
}

impl AudioPlayer {
    pub fn try_new() -> Result<Self, AudioError> {
        let (_stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream,
            handle,
            sink: None,
            track: None,
            duration: None,
        })
    }

    /// Point the player at a track and probe its duration. Replaces any
    /// track currently playing.
    pub fn load_track(&mut self, path: &Path) -> Result<(), AudioError> {
        self.stop();
        let source = Decoder::new(BufReader::new(File::open(path)?))?;
        self.duration = source.total_duration();
        self.track = Some(path.to_path_buf());
        info!(track = %path.display(), duration = ?self.duration, "track loaded");
        Ok(())
    }

    /// Total duration of the loaded track, when the decoder could
    /// report one. Autoplay cannot start without it.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn has_track(&self) -> bool {
        self.track.is_some()
    }

    /// Start the loaded track from the beginning at the given volume.
    /// Manual mode loops the track; autoplay plays it once.
    pub fn play(&mut self, looping: bool, volume: f32) -> Result<(), AudioError> {
        let path = self.track.clone().ok_or(AudioError::NoTrack)?;
        let source = Decoder::new(BufReader::new(File::open(&path)?))?;

        let sink = Sink::try_new(&self.handle)?;
        sink.set_volume(volume);
        if looping {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }
        sink.play();
        self.sink = Some(sink);
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }

    pub fn pause(&self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    pub fn resume(&self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    /// Absolute volume in [0, 1]; the fade ramp drives this.
    pub fn set_volume(&self, volume: f32) {
        if let Some(sink) = &self.sink {
            sink.set_volume(volume.clamp(0.0, 1.0));
        }
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
