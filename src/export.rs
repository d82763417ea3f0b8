//! Export pipeline: busy-state control, render, deliver, report

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{info, warn};

use crate::color::Color;
use crate::notify::Notifier;
use crate::platform::{Delivery, DownloadSurface};
use crate::rendering::{render_wallpaper, WallpaperImage};
use crate::{Error, Resolution, Result};

pub const IDLE_LABEL: &str = "Download Wallpaper";
pub const BUSY_LABEL: &str = "Creating...";
pub const DOWNLOADED_MESSAGE: &str = "Wallpaper downloaded!";
pub const FAILED_MESSAGE: &str = "Failed to create wallpaper";

type ToggleHandler = Arc<dyn Fn(bool) + Send + Sync>;

/// Visible-feedback delays around an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTiming {
    /// Busy label shown before rendering starts
    pub creating: Duration,
    /// Control stays disabled this long after a successful delivery
    pub settle: Duration,
}

impl ExportTiming {
    /// No artificial latency.
    pub fn instant() -> Self {
        ExportTiming {
            creating: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

impl Default for ExportTiming {
    fn default() -> Self {
        ExportTiming {
            creating: Duration::from_millis(800),
            settle: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ControlState {
    enabled: bool,
    label: &'static str,
}

/// The export trigger as the presentation layer shows it.
pub struct ExportControl {
    state: Mutex<ControlState>,
    observers: Mutex<Vec<ToggleHandler>>,
}

impl ExportControl {
    pub fn new() -> Self {
        ExportControl {
            state: Mutex::new(ControlState {
                enabled: true,
                label: IDLE_LABEL,
            }),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.lock().unwrap().enabled
    }

    pub fn label(&self) -> &'static str {
        self.state.lock().unwrap().label
    }

    /// Register a callback for enable (`true`) and disable (`false`) transitions.
    pub fn on_toggle<F>(&self, cb: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.observers.lock().unwrap().push(Arc::new(cb));
    }

    /// Disable the control for the lifetime of the returned guard.
    ///
    /// Returns `None` when an export already holds it.
    pub fn try_acquire(self: &Arc<Self>) -> Option<ExportGuard> {
        {
            let mut state = self.state.lock().unwrap();
            if !state.enabled {
                return None;
            }
            *state = ControlState {
                enabled: false,
                label: BUSY_LABEL,
            };
        }
        self.emit(false);
        Some(ExportGuard {
            control: Arc::clone(self),
        })
    }

    fn release(&self) {
        *self.state.lock().unwrap() = ControlState {
            enabled: true,
            label: IDLE_LABEL,
        };
        self.emit(true);
    }

    fn emit(&self, enabled: bool) {
        let observers = self.observers.lock().unwrap().clone();
        for cb in observers {
            cb(enabled);
        }
    }
}

impl Default for ExportControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the export control disabled; dropping it re-enables the control.
pub struct ExportGuard {
    control: Arc<ExportControl>,
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.control.release();
    }
}

/// How an export request ended
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Delivered {
        image: WallpaperImage,
        delivery: Delivery,
    },
    /// Rendering, encoding or delivery failed; the user was notified
    Failed(String),
    /// Another export was still running
    Skipped,
}

pub struct Exporter {
    timing: ExportTiming,
    surface: Arc<dyn DownloadSurface>,
    control: Arc<ExportControl>,
    notifier: Notifier,
}

impl Exporter {
    pub fn new(timing: ExportTiming, surface: Arc<dyn DownloadSurface>, notifier: Notifier) -> Self {
        Exporter {
            timing,
            surface,
            control: Arc::new(ExportControl::new()),
            notifier,
        }
    }

    pub fn control(&self) -> &Arc<ExportControl> {
        &self.control
    }

    pub fn timing(&self) -> ExportTiming {
        self.timing
    }

    /// Render `color` at `resolution` and hand the PNG to the download surface.
    ///
    /// Every path ends with the control enabled and at most one notification.
    pub async fn export_wallpaper(&self, color: &Color, resolution: Resolution) -> ExportOutcome {
        let Some(_guard) = self.control.try_acquire() else {
            info!("Export already in progress; ignoring request");
            return ExportOutcome::Skipped;
        };

        pause(self.timing.creating).await;

        match self.produce(color, resolution).await {
            Ok((image, delivery)) => {
                info!("Exported {} ({} bytes)", delivery.filename, delivery.bytes);
                self.notifier.notify(DOWNLOADED_MESSAGE);
                pause(self.timing.settle).await;
                ExportOutcome::Delivered { image, delivery }
            }
            Err(e) => {
                warn!("Export of {} at {} failed: {}", color, resolution, e);
                self.notifier.notify(FAILED_MESSAGE);
                ExportOutcome::Failed(e.to_string())
            }
        }
    }

    /// Rasterize and encode on the blocking pool, then deliver.
    async fn produce(&self, color: &Color, resolution: Resolution) -> Result<(WallpaperImage, Delivery)> {
        let color = color.clone();
        let image = tokio::task::spawn_blocking(move || render_wallpaper(&color, resolution))
            .await
            .map_err(|e| Error::RenderError(format!("render task failed: {}", e)))??;
        let delivery = self.surface.deliver(&image.filename(), &image.png_data)?;
        Ok((image, delivery))
    }
}

async fn pause(d: Duration) {
    if !d.is_zero() {
        tokio::time::sleep(d).await;
    }
}
