//! Application root: owns the selection model, card catalog, notifier and exporter

use std::sync::{Arc, Mutex};

use log::{debug, info};

use crate::catalog::{Card, CardCatalog, CUSTOM_ID};
use crate::color::{palette, Color, Swatch};
use crate::export::{ExportControl, ExportOutcome, Exporter};
use crate::model::{SelectionEvent, SelectionModel};
use crate::notify::Notifier;
use crate::platform::{detect, DetectedDevice, DownloadSurface, ScreenBridge, StaticScreen};
use crate::validate::parse_dimension;
use crate::{Resolution, StudioConfig};

pub const CUSTOM_SET_MESSAGE: &str = "Custom resolution set";

/// Values the custom-resolution prompt opens with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomPrompt {
    pub width: u32,
    pub height: u32,
}

/// Result of clicking a resolution card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// The preset's dimensions are now current
    Applied(Resolution),
    /// The presentation layer should ask for custom dimensions
    PromptCustom(CustomPrompt),
    /// Unknown card id
    Ignored,
}

/// The surface the presentation layer drives.
///
/// Construction reads the screen once and seeds the model from it.
pub struct Studio {
    device: DetectedDevice,
    model: Arc<SelectionModel>,
    notifier: Notifier,
    exporter: Exporter,
    prompt: Mutex<Option<CustomPrompt>>,
}

impl Studio {
    pub fn new(config: &StudioConfig, bridge: &dyn ScreenBridge, surface: Arc<dyn DownloadSurface>) -> Self {
        let device = match &config.screen {
            Some(metrics) => detect(&StaticScreen::new(metrics.clone())),
            None => detect(bridge),
        };
        let catalog = Arc::new(CardCatalog::with_detection(&device));
        let model = Arc::new(SelectionModel::new(catalog, config.default_color.clone()));
        let notifier = Notifier::new(config.notification_duration());
        let exporter = Exporter::new(config.export_timing(), surface, notifier.clone());

        info!("Studio ready on {} ({})", device.label, device.resolution);
        Studio {
            device,
            model,
            notifier,
            exporter,
            prompt: Mutex::new(None),
        }
    }

    pub fn device(&self) -> &DetectedDevice {
        &self.device
    }

    pub fn model(&self) -> &Arc<SelectionModel> {
        &self.model
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn export_control(&self) -> &Arc<ExportControl> {
        self.exporter.control()
    }

    pub fn on_selection_change<F>(&self, cb: F)
    where
        F: Fn(&SelectionEvent) + Send + Sync + 'static,
    {
        self.model.on_change(cb);
    }

    pub fn on_notification<F>(&self, cb: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.notifier.on_message(cb);
    }

    // --- color ---

    /// Typed hex input. Invalid text is ignored until corrected.
    pub fn set_color(&self, input: &str) -> bool {
        match self.model.set_color(input) {
            Ok(_) => true,
            Err(e) => {
                debug!("Ignoring color input: {}", e);
                false
            }
        }
    }

    /// Native color picker result.
    pub fn pick_color(&self, rgb: [u8; 3]) -> Color {
        self.model.set_color_rgb(rgb)
    }

    pub fn select_color_swatch(&self, hex: &str) -> bool {
        self.set_color(hex)
    }

    pub fn palette(&self) -> Vec<Swatch> {
        palette(&self.model.color())
    }

    pub fn color_hex_display(&self) -> String {
        self.model.color().display_hex()
    }

    // --- resolution ---

    /// Dispatch a card click.
    pub fn select_card(&self, id: &str) -> CardAction {
        if id == CUSTOM_ID {
            let current = self.model.resolution();
            let prompt = CustomPrompt {
                width: current.width,
                height: current.height,
            };
            *self.prompt.lock().unwrap() = Some(prompt);
            return CardAction::PromptCustom(prompt);
        }
        match self.model.set_resolution_by_preset_id(id) {
            Some(resolution) => CardAction::Applied(resolution),
            None => CardAction::Ignored,
        }
    }

    /// The open custom-resolution prompt, if any.
    pub fn custom_prompt(&self) -> Option<CustomPrompt> {
        *self.prompt.lock().unwrap()
    }

    pub fn cancel_custom(&self) {
        self.prompt.lock().unwrap().take();
    }

    /// Submit typed custom dimensions.
    pub fn apply_custom_resolution(&self, width: &str, height: &str) -> Option<Resolution> {
        let parsed = parse_dimension(width).zip(parse_dimension(height));
        // Unparseable text is out of range by definition.
        let (w, h) = parsed.unwrap_or((0, 0));
        self.set_custom_resolution(w, h)
    }

    /// Store custom dimensions, reporting the outcome to the user.
    ///
    /// Success closes the prompt; rejection leaves it open.
    pub fn set_custom_resolution(&self, width: i64, height: i64) -> Option<Resolution> {
        match self.model.set_custom_resolution(width, height) {
            Ok(resolution) => {
                self.prompt.lock().unwrap().take();
                self.notifier.notify(CUSTOM_SET_MESSAGE);
                Some(resolution)
            }
            Err(e) => {
                self.notifier.notify(&e.to_string());
                None
            }
        }
    }

    pub fn active_preset_id(&self) -> Option<&'static str> {
        self.model.active_preset_id()
    }

    pub fn cards(&self) -> Vec<Card> {
        self.model.catalog().cards(self.active_preset_id())
    }

    /// `"{width} × {height}"` for the preview.
    pub fn size_indicator(&self) -> String {
        self.model.resolution().to_string()
    }

    // --- export / notify ---

    /// Export the current color at the current resolution.
    pub async fn export_wallpaper(&self) -> ExportOutcome {
        let color = self.model.color();
        let resolution = self.model.resolution();
        self.exporter.export_wallpaper(&color, resolution).await
    }

    pub fn notify(&self, message: &str) {
        self.notifier.notify(message);
    }
}
