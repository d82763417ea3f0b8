//! Host-facing surfaces: screen probing and download delivery
//!
//! The studio reads the screen once at startup and hands finished files to a
//! download surface. Both sit behind traits so tests and the CLI can supply
//! their own hosts.

pub mod device;
pub mod download;

pub use device::{detect, DetectedDevice, ScreenBridge, ScreenMetrics, StaticScreen};
pub use download::{Delivery, DirectorySurface, DownloadSurface, MemorySurface};
