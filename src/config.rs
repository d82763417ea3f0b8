//! Studio configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::export::ExportTiming;
use crate::platform::ScreenMetrics;
use crate::{Error, Result};

/// Configuration for a [`Studio`](crate::Studio)
///
/// Every field has a default, so a JSON file only needs the keys it changes.
///
/// ```
/// let cfg = wallstudio::StudioConfig::default();
/// assert_eq!(cfg.default_color.as_hex(), "#76d1ff");
/// assert_eq!(cfg.notification_ms, 3000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Color selected at startup
    pub default_color: Color,
    /// How long a notification stays visible, in milliseconds
    pub notification_ms: u64,
    /// Busy-label delay before rendering starts, in milliseconds
    pub export_creating_ms: u64,
    /// Delay before the export control re-enables after success, in milliseconds
    pub export_settle_ms: u64,
    /// Directory exported wallpapers are written to
    pub output_dir: PathBuf,
    /// Screen metrics to report instead of asking the host
    pub screen: Option<ScreenMetrics>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        let timing = ExportTiming::default();
        Self {
            default_color: Color::default(),
            notification_ms: 3000,
            export_creating_ms: timing.creating.as_millis() as u64,
            export_settle_ms: timing.settle.as_millis() as u64,
            output_dir: PathBuf::from("."),
            screen: None,
        }
    }
}

impl StudioConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::ConfigError(e.to_string()))
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn export_timing(&self) -> ExportTiming {
        ExportTiming {
            creating: Duration::from_millis(self.export_creating_ms),
            settle: Duration::from_millis(self.export_settle_ms),
        }
    }
}
