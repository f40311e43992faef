//! Media permission gate backed by the user configuration

use super::traits::PermissionGate;
use async_trait::async_trait;

/// Answers every media request with the configured decision
#[derive(Debug, Clone, Copy)]
pub struct ConfigPermissionGate {
    granted: bool,
}

impl ConfigPermissionGate {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }
}

#[async_trait]
impl PermissionGate for ConfigPermissionGate {
    async fn request_media_access(&self) -> bool {
        if !self.granted {
            tracing::info!("media access denied by configuration");
        }
        self.granted
    }
}
