use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::codec::JsonCodec;
use crate::domains::service::{mode_services, Mode, ServiceName, SIMULATOR_SERVICES};
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub service: Option<ServiceName>,
    pub mode: Option<Mode>,
    pub simulator: Option<bool>,
    pub snake_case_keys: Option<bool>,
    pub camel_case_payload: Option<bool>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ApiError::Config(format!("{}: {e}", path.as_ref().display())))?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn service(&self) -> ServiceName {
        self.service.clone().unwrap_or(ServiceName::Events)
    }

    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    pub fn codec(&self) -> JsonCodec {
        let defaults = JsonCodec::default();
        JsonCodec::new(
            self.snake_case_keys.unwrap_or(defaults.snake_case_keys),
            self.camel_case_payload.unwrap_or(defaults.camel_case_payload),
        )
    }

    pub fn services(&self) -> &'static [ServiceName] {
        if self.simulator.unwrap_or(false) {
            SIMULATOR_SERVICES
        } else {
            mode_services(self.mode())
        }
    }
}
