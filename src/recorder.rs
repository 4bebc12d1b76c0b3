//! Screen-and-audio recording through an external `ffmpeg` process.
//!
//! The desktop stand-in for the browser capture pipeline: video comes
//! from the display grabber, audio from the system mixer, and the
//! result lands as a dated file next to the user's other videos. The
//! container preference mirrors the original: mp4 when an H.264
//! encoder is present, webm otherwise. Both the stop button and a
//! child that exits on its own funnel into the same finish path, and a
//! zero-byte output is reported like a permission error.

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use chrono::Local;
use tracing::{info, warn};

const FILE_PREFIX: &str = "maura-journey";

#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("ffmpeg not found on PATH")]
    Unavailable,
    #[error("no usable video encoder in this ffmpeg build")]
    NoEncoder,
    #[error("could not start ffmpeg: {0}")]
    Spawn(std::io::Error),
    #[error("recording i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("ffmpeg exited with {0}")]
    Failed(String),
    #[error("recording produced an empty file")]
    Empty,
}

impl RecorderError {
    /// Human-readable cause for the transient status toast.
    pub fn user_message(&self) -> String {
        match self {
            RecorderError::Unavailable => {
                "Gravação indisponível: instale o ffmpeg para gravar a tela.".into()
            }
            RecorderError::NoEncoder => {
                "Gravação indisponível: nenhum codificador de vídeo encontrado.".into()
            }
            RecorderError::Spawn(_) | RecorderError::Io(_) => {
                "Erro ao iniciar gravação. Verifique as permissões de tela e áudio.".into()
            }
            RecorderError::Failed(status) => format!("Erro na gravação ({status})."),
            RecorderError::Empty => "Gravação vazia.".into(),
        }
    }
}

/// Output container, picked by probing the local ffmpeg build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Mp4,
    Webm,
}

impl Container {
    fn encoder(self) -> &'static str {
        match self {
            Container::Mp4 => "libx264",
            Container::Webm => "libvpx-vp9",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Container::Mp4 => "mp4",
            Container::Webm => "webm",
        }
    }
}

/// Probe the ffmpeg build once: is it there, and which container can it
/// produce? Prefers mp4 for compatibility, falls back to webm.
pub fn detect_container() -> Result<Container, RecorderError> {
    let probe = Command::new("ffmpeg")
        .args(["-hide_banner", "-encoders"])
        .stdin(Stdio::null())
        .output()
        .map_err(|_| RecorderError::Unavailable)?;

    let listing = String::from_utf8_lossy(&probe.stdout);
    if listing.contains(Container::Mp4.encoder()) {
        Ok(Container::Mp4)
    } else if listing.contains(Container::Webm.encoder()) {
        Ok(Container::Webm)
    } else {
        Err(RecorderError::NoEncoder)
    }
}

/// A running ffmpeg capture.
pub struct ActiveRecording {
    child: Child,
    output: PathBuf,
}

impl ActiveRecording {
    /// Start capturing the display and the system audio mix into a
    /// dated file under the user's video directory.
    pub fn start() -> Result<Self, RecorderError> {
        let container = detect_container()?;
        let output = output_path(container);

        let display = std::env::var("DISPLAY").unwrap_or_else(|_| ":0".into());
        let mut command = Command::new("ffmpeg");
        command
            .args(["-y", "-f", "x11grab", "-framerate", "30", "-i", &display])
            .args(["-f", "pulse", "-i", "default"])
            .args(["-c:v", container.encoder()])
            .args(["-preset", "veryfast", "-pix_fmt", "yuv420p"])
            .arg(&output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = command.spawn().map_err(RecorderError::Spawn)?;
        info!(output = %output.display(), "recording started");
        Ok(Self { child, output })
    }

    /// Ask ffmpeg to finalize and hand back the finished file. Blocks
    /// until the container is flushed; run it off the UI thread.
    pub fn finish(mut self) -> Result<PathBuf, RecorderError> {
        // 'q' on stdin is ffmpeg's graceful-stop affordance. If the
        // child already died the write fails and the exit status below
        // tells the real story.
        if let Some(stdin) = self.child.stdin.as_mut() {
            if let Err(err) = stdin.write_all(b"q") {
                warn!(%err, "ffmpeg stdin already closed");
            }
        }
        drop(self.child.stdin.take());

        let status = self.child.wait()?;
        if !status.success() {
            let _ = std::fs::remove_file(&self.output);
            return Err(RecorderError::Failed(status.to_string()));
        }

        let size = std::fs::metadata(&self.output).map(|m| m.len()).unwrap_or(0);
        if size == 0 {
            let _ = std::fs::remove_file(&self.output);
            return Err(RecorderError::Empty);
        }

        info!(output = %self.output.display(), size, "recording saved");
        Ok(self.output)
    }
}

fn output_path(container: Container) -> PathBuf {
    let dir = dirs::video_dir()
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let date = Local::now().format("%Y-%m-%d");
    dir.join(format!("{FILE_PREFIX}-{date}.{}", container.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_preference_is_mp4_then_webm() {
        assert_eq!(Container::Mp4.extension(), "mp4");
        assert_eq!(Container::Webm.extension(), "webm");
        assert_eq!(Container::Mp4.encoder(), "libx264");
        assert_eq!(Container::Webm.encoder(), "libvpx-vp9");
    }

    #[test]
    fn output_name_carries_the_prefix_and_date() {
        let path = output_path(Container::Webm);
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("maura-journey-"));
        assert!(name.ends_with(".webm"));
        // prefix + YYYY-MM-DD + extension
        assert_eq!(name.len(), "maura-journey-".len() + 10 + ".webm".len());
    }

    #[test]
    fn every_error_has_a_portuguese_toast_message() {
        for err in [
            RecorderError::Unavailable,
            RecorderError::NoEncoder,
            RecorderError::Failed("status 1".into()),
            RecorderError::Empty,
        ] {
            assert!(!err.user_message().is_empty());
        }
    }
}
