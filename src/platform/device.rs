/// Device probing: screen metrics in, physical resolution and device class out

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::Resolution;

/// Label used when the identifying string names no known device family.
pub const GENERIC_DEVICE_LABEL: &str = "Your Device";

/// Raw metrics as the host reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    /// Logical screen width
    pub width: f64,
    /// Logical screen height
    pub height: f64,
    /// Device pixel ratio
    pub dpr: f64,
    /// Coarse identifying string (a user agent, or a platform name)
    #[serde(default)]
    pub user_agent: String,
}

impl ScreenMetrics {
    /// Metrics for a host without a screen API.
    pub fn unavailable() -> Self {
        ScreenMetrics {
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
            user_agent: String::new(),
        }
    }
}

/// Read access to the host screen.
pub trait ScreenBridge: Send + Sync {
    fn screen_metrics(&self) -> ScreenMetrics;
}

/// Bridge that reports fixed metrics
pub struct StaticScreen {
    metrics: ScreenMetrics,
}

impl StaticScreen {
    pub fn new(metrics: ScreenMetrics) -> Self {
        StaticScreen { metrics }
    }
}

impl Default for StaticScreen {
    fn default() -> Self {
        Self::new(ScreenMetrics::unavailable())
    }
}

impl ScreenBridge for StaticScreen {
    fn screen_metrics(&self) -> ScreenMetrics {
        self.metrics.clone()
    }
}

/// Outcome of the one-shot startup detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedDevice {
    pub label: String,
    pub resolution: Resolution,
}

/// Query the bridge once.
///
/// Degenerate metrics (zero or negative sizes) are passed through unchanged.
pub fn detect(bridge: &dyn ScreenBridge) -> DetectedDevice {
    let m = bridge.screen_metrics();
    let resolution = Resolution::new(physical(m.width, m.dpr), physical(m.height, m.dpr));
    let label = classify(&m.user_agent).to_string();

    if resolution.is_empty() {
        warn!(
            "Screen detection returned {}x{} (logical {}x{} @ {}); keeping it as-is",
            resolution.width, resolution.height, m.width, m.height, m.dpr
        );
    } else {
        info!("Detected {} at {}", label, resolution);
    }

    DetectedDevice { label, resolution }
}

/// Device family from the identifying string, checked in priority order.
pub fn classify(user_agent: &str) -> &'static str {
    let ua = user_agent.to_ascii_lowercase();
    if ua.contains("iphone") {
        "iPhone"
    } else if ua.contains("ipad") {
        "iPad"
    } else if ua.contains("android") {
        "Android Device"
    } else {
        GENERIC_DEVICE_LABEL
    }
}

fn physical(logical: f64, dpr: f64) -> u32 {
    let px = (logical * dpr).round();
    // `as` saturates: NaN and negatives become 0.
    px as u32
}
