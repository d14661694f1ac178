//! Local playback via mpv or VLC
//!
//! The playback view hands the derived stream URL to an external player,
//! which owns buffering, seeking and transport controls.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::{Child, Command};

/// Supported local players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerType {
    /// mpv media player (default)
    #[default]
    Mpv,
    /// VLC media player
    Vlc,
}

impl PlayerType {
    /// Get the command name for this player
    pub fn command(&self) -> &'static str {
        match self {
            PlayerType::Mpv => "mpv",
            PlayerType::Vlc => {
                // On macOS, VLC is an app bundle - check for it
                #[cfg(target_os = "macos")]
                if std::path::Path::new("/Applications/VLC.app").exists() {
                    return "/Applications/VLC.app/Contents/MacOS/VLC";
                }
                "vlc"
            }
        }
    }

    /// Get a display name for this player
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerType::Mpv => "mpv",
            PlayerType::Vlc => "VLC",
        }
    }

    /// Parse a player name from config ("mpv" or "vlc")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mpv" => Some(PlayerType::Mpv),
            "vlc" => Some(PlayerType::Vlc),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Errors from local player operations
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player '{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Failed to start player: {0}")]
    StartFailed(#[from] std::io::Error),
}

/// Local player for the video stream
pub struct LocalPlayer {
    player_type: PlayerType,
}

impl LocalPlayer {
    pub fn new(player_type: PlayerType) -> Self {
        Self { player_type }
    }

    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    /// Check if the player is available on the system
    pub async fn is_available(&self) -> bool {
        let cmd = self.player_type.command();

        // If it's a full path (macOS app bundle), check if it exists
        if cmd.starts_with('/') {
            return std::path::Path::new(cmd).exists();
        }

        Command::new("which")
            .arg(cmd)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Start playback of a stream URL, returning the spawned child.
    ///
    /// Playback starts immediately and the player exposes its own
    /// play/pause/seek/volume controls.
    pub fn play(&self, stream_url: &str) -> Result<Child, PlayerError> {
        let mut cmd = Command::new(self.player_type.command());

        match self.player_type {
            PlayerType::Mpv => {
                cmd.arg(stream_url);
                cmd.arg("--force-window=immediate");
            }
            PlayerType::Vlc => {
                cmd.arg(stream_url);
                cmd.arg("--play-and-exit");
                cmd.arg("--no-video-title-show");
            }
        }

        // Keep the terminal clean for the TUI underneath
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlayerError::NotFound(self.player_type.command().to_string())
            } else {
                PlayerError::StartFailed(e)
            }
        })
    }

    /// Start playback and wait for the player to close
    pub async fn play_and_wait(&self, stream_url: &str) -> Result<(), PlayerError> {
        let mut child = self.play(stream_url)?;
        let _ = child.wait().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_type_command() {
        assert_eq!(PlayerType::Mpv.command(), "mpv");
        let vlc_cmd = PlayerType::Vlc.command();
        assert!(vlc_cmd == "vlc" || vlc_cmd == "/Applications/VLC.app/Contents/MacOS/VLC");
    }

    #[test]
    fn test_player_type_from_name() {
        assert_eq!(PlayerType::from_name("mpv"), Some(PlayerType::Mpv));
        assert_eq!(PlayerType::from_name("VLC"), Some(PlayerType::Vlc));
        assert_eq!(PlayerType::from_name("wmp"), None);
    }

    #[test]
    fn test_default_player() {
        assert_eq!(PlayerType::default(), PlayerType::Mpv);
    }

    #[test]
    fn test_local_player_reports_type() {
        let player = LocalPlayer::new(PlayerType::Vlc);
        assert_eq!(player.player_type(), PlayerType::Vlc);
        assert_eq!(player.player_type().to_string(), "VLC");
    }
}
