//! Notifier that spawns an external program to play audio

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use super::{Notifier, NotifyError};

const VOLUME_PLACEHOLDER: &str = "{volume}";

/// Runs a configured command line per notification
///
/// The command line is split on whitespace; every `{volume}` in the
/// arguments is replaced with the requested volume.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
    args: Vec<String>,
}

impl CommandNotifier {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a command line such as `paplay --volume={volume} alert.wav`
    pub fn parse(command_line: &str) -> Result<Self, NotifyError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(NotifyError::EmptyCommand)?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with the volume substituted
    pub fn args_for(&self, volume: u8) -> Vec<String> {
        let volume = volume.to_string();
        self.args
            .iter()
            .map(|arg| arg.replace(VOLUME_PLACEHOLDER, &volume))
            .collect()
    }
}

#[async_trait]
impl Notifier for CommandNotifier {
    #[instrument(skip(self), fields(program = %self.program))]
    async fn play(&self, volume: u8) -> Result<(), NotifyError> {
        let status = Command::new(&self.program)
            .args(self.args_for(volume))
            .kill_on_drop(true)
            .status()
            .await?;

        if !status.success() {
            return Err(NotifyError::Failed(status));
        }

        debug!("Sound command finished");
        Ok(())
    }
}
