use crate::BridgeError;
use handmark_base::LogConfig;
use handmark_infer::{ReplayBackend, SessionConfig};
use serde::Deserialize;
use std::path::Path;

/// Everything a host needs to bring the bridge up, usually read from a
/// JSON file next to the host executable.
///
/// ```json
/// {
///   "backend": "replay",
///   "session": { "max_num_hands": 1, "model_complexity": 1 },
///   "log": { "level": "info", "dir": "logs" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub backend: String,
    pub session: SessionConfig,
    pub log: LogConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            backend: ReplayBackend::NAME.to_string(),
            session: SessionConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl BridgeConfig {
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        let config: BridgeConfig =
            serde_json::from_str(json).map_err(|e| BridgeError::Config(e.to_string()))?;
        config.session.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}
