//! Wallstudio
//!
//! The state manager and export pipeline behind a solid-color wallpaper
//! maker: pick a color, pick a target resolution, export a PNG sized to a
//! device screen.
//!
//! # Features
//!
//! - **Selection model**: validated color and resolution setters with change
//!   observers
//! - **Resolution cards**: fixed presets plus a detected-device entry and a
//!   custom entry, with active-card derivation
//! - **Export**: solid fill with a subtle vertical depth overlay, encoded as
//!   PNG and handed to a pluggable download surface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use wallstudio::platform::{DirectorySurface, ScreenMetrics, StaticScreen};
//! use wallstudio::{Studio, StudioConfig};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let screen = StaticScreen::new(ScreenMetrics {
//!     width: 412.0,
//!     height: 915.0,
//!     dpr: 2.625,
//!     user_agent: "Android".to_string(),
//! });
//! let studio = Studio::new(
//!     &StudioConfig::default(),
//!     &screen,
//!     Arc::new(DirectorySurface::new("wallpapers")),
//! );
//! studio.set_color("#34C759");
//! studio.select_card("fullhd");
//! studio.export_wallpaper().await;
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod catalog;
pub mod color;
pub mod config;
pub mod export;
pub mod model;
pub mod notify;
pub mod platform;
pub mod rendering;
pub mod studio;
pub mod validate;

pub use catalog::{Card, CardCatalog, CUSTOM_ID, DETECTED_ID};
pub use color::Color;
pub use config::StudioConfig;
pub use export::{ExportOutcome, ExportTiming};
pub use model::{SelectionEvent, SelectionModel};
pub use notify::Notifier;
pub use studio::{CardAction, Studio};

/// Target pixel dimensions of an exported wallpaper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `wallpaper-{width}x{height}.png`
    pub fn wallpaper_filename(&self) -> String {
        format!("wallpaper-{}x{}.png", self.width, self.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.width, self.height)
    }
}
