use async_trait::async_trait;
use tracing::warn;

use super::{Notifier, NotifyError};

/// Notifier that only writes a log line; the default sink
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn play(&self, volume: u8) -> Result<(), NotifyError> {
        warn!(volume, "Mass login detected");
        Ok(())
    }
}
