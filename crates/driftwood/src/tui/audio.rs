//! Audio playback bridge with mpv backend
//!
//! Mirrors [`DeckEvent`]s onto an mpv process for cards that carry a
//! playable stream URL. mpv speaks JSON over a unix socket; every command
//! here is best-effort, the deck state machine in driftwood-core stays
//! authoritative and keeps its own position clock, so the UI behaves the
//! same with or without a player installed.

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use anyhow::{Context, Result};
use driftwood_core::audio::DeckEvent;
use driftwood_core::content::Catalog;
use tracing::{debug, warn};

/// Bridge to an optional mpv process.
pub struct MpvBridge {
    process: Option<Child>,
    socket_path: PathBuf,
    available: bool,
    /// Deck index the spawned process is playing.
    current_card: Option<usize>,
}

impl MpvBridge {
    /// Probe for mpv once at startup.
    pub fn new() -> Self {
        let available = which::which("mpv").is_ok();
        if !available {
            debug!("mpv not found; audio runs on the simulated clock");
        }

        Self {
            process: None,
            socket_path: std::env::temp_dir()
                .join(format!("driftwood-audio-{}", std::process::id())),
            available,
            current_card: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Mirror a deck event onto the player.
    pub fn apply(&mut self, event: &DeckEvent, catalog: &Catalog) {
        if !self.available {
            return;
        }

        let result = match *event {
            DeckEvent::Play { card } => self.play(card, catalog),
            DeckEvent::Pause { card } | DeckEvent::Resume { card } => {
                if self.current_card == Some(card) {
                    self.send_command(&["cycle", "pause"])
                } else {
                    Ok(())
                }
            }
            DeckEvent::Seek { card, position } => {
                if self.current_card == Some(card) {
                    self.send_command(&["seek", &position.to_string(), "absolute"])
                } else {
                    Ok(())
                }
            }
            DeckEvent::Mute(on) => {
                self.send_command(&["set_property", "mute", if on { "yes" } else { "no" }])
            }
        };

        if let Err(e) = result {
            warn!(error = %e, ?event, "audio backend command failed");
        }
    }

    fn play(&mut self, card: usize, catalog: &Catalog) -> Result<()> {
        let Some(url) = catalog
            .tracks
            .get(card)
            .and_then(|t| t.stream_url.as_deref())
        else {
            // Nothing playable; the deck's simulated clock carries the card
            self.stop();
            return Ok(());
        };

        if self.current_card == Some(card) {
            // Resuming the same card after a pause
            return self.send_command(&["set_property", "pause", "no"]);
        }

        self.stop();

        let child = Command::new("mpv")
            .arg("--no-video")
            .arg("--no-terminal")
            .arg("--input-ipc-server")
            .arg(&self.socket_path)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start mpv for: {}", url))?;

        self.process = Some(child);
        self.current_card = Some(card);
        debug!(card, url, "started playback");
        Ok(())
    }

    /// Stop playback and reap the player process.
    pub fn stop(&mut self) {
        let _ = self.send_command(&["quit"]);
        if let Some(mut child) = self.process.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        let _ = std::fs::remove_file(&self.socket_path);
        self.current_card = None;
    }

    /// Send a command to mpv via its IPC socket.
    #[cfg(unix)]
    fn send_command(&self, command: &[&str]) -> Result<()> {
        use std::io::Write;

        if self.process.is_none() {
            return Ok(());
        }

        let mut socket = std::os::unix::net::UnixStream::connect(&self.socket_path)
            .context("mpv socket not ready")?;
        socket.set_write_timeout(Some(std::time::Duration::from_millis(50)))?;

        let cmd = serde_json::json!({ "command": command });
        socket.write_all(format!("{}\n", cmd).as_bytes())?;
        socket.flush()?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn send_command(&self, _command: &[&str]) -> Result<()> {
        Ok(())
    }
}

impl Default for MpvBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MpvBridge {
    fn drop(&mut self) {
        self.stop();
    }
}
