use super::config::Config;
use super::wms::WmsGateway;
use std::sync::Arc;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn WmsGateway>,
}

impl AppState {
    pub fn new(config: Config, gateway: Arc<dyn WmsGateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.config.auth.jwt_secret
    }
}
