//! Audio notification sinks
//!
//! The alert coordinator asks a `Notifier` to play the mass-login sound.
//! A failed playback is reported back so the cooldown anchor is not moved.

mod command;
mod logger;

use async_trait::async_trait;
use thiserror::Error;

pub use command::CommandNotifier;
pub use logger::LogNotifier;

/// Errors raised while playing a notification
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("sound command is empty")]
    EmptyCommand,

    #[error("failed to spawn sound command: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("sound command exited with {0}")]
    Failed(std::process::ExitStatus),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Play the mass-login sound at `volume` (0-100)
    async fn play(&self, volume: u8) -> Result<(), NotifyError>;
}
