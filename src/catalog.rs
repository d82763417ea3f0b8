//! Resolution cards: the fixed preset list plus the detected and custom entries

use crate::platform::DetectedDevice;
use crate::Resolution;

pub const DETECTED_ID: &str = "detected";
pub const CUSTOM_ID: &str = "custom";

/// Small tag drawn on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Detected,
    Popular,
    Custom,
}

impl Badge {
    /// Text shown inside the badge
    pub fn label(self) -> &'static str {
        match self {
            Badge::Detected => "detected",
            Badge::Popular => "popular",
            Badge::Custom => "custom",
        }
    }

    /// Style hook for the presentation layer
    pub fn class_name(self) -> &'static str {
        match self {
            Badge::Detected => "badge-detected",
            Badge::Popular => "badge-popular",
            Badge::Custom => "badge-custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPreset {
    pub id: &'static str,
    pub name: String,
    /// `None` only for the custom entry
    pub dimensions: Option<Resolution>,
    pub badge: Option<Badge>,
}

/// A card ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: &'static str,
    pub name: String,
    pub dims_label: String,
    pub badge: Option<Badge>,
    pub selected: bool,
}

/// Ordered card list. Only the detected entry ever changes, once, at startup.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    presets: Vec<ResolutionPreset>,
}

impl CardCatalog {
    pub fn new() -> Self {
        let preset = |id, name: &str, dims: Option<(u32, u32)>, badge| ResolutionPreset {
            id,
            name: name.to_string(),
            dimensions: dims.map(|(w, h)| Resolution::new(w, h)),
            badge,
        };
        CardCatalog {
            presets: vec![
                preset(DETECTED_ID, "Your Device", Some((0, 0)), Some(Badge::Detected)),
                preset("pixel8", "Pixel 8 Pro", Some((1344, 2992)), Some(Badge::Popular)),
                preset("galaxy23", "Galaxy S23", Some((1080, 2340)), Some(Badge::Popular)),
                preset("fullhd", "Full HD", Some((1080, 1920)), None),
                preset("qhd", "QHD", Some((1440, 2560)), None),
                preset(CUSTOM_ID, "Custom", None, Some(Badge::Custom)),
            ],
        }
    }

    /// Catalog with the detected entry already overwritten.
    pub fn with_detection(device: &DetectedDevice) -> Self {
        let mut catalog = Self::new();
        catalog.apply_detection(device);
        catalog
    }

    /// Overwrite the detected entry's name and dimensions.
    pub fn apply_detection(&mut self, device: &DetectedDevice) {
        if let Some(entry) = self.presets.iter_mut().find(|p| p.id == DETECTED_ID) {
            entry.name = device.label.clone();
            entry.dimensions = Some(device.resolution);
        }
    }

    pub fn presets(&self) -> &[ResolutionPreset] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&ResolutionPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Dimensions the detected entry carries.
    pub fn detected_resolution(&self) -> Resolution {
        self.get(DETECTED_ID)
            .and_then(|p| p.dimensions)
            .unwrap_or_default()
    }

    /// Which card is active.
    ///
    /// An explicit selection (the card last picked by id, `detected` right
    /// after startup) wins outright. Without one, the first non-custom entry
    /// with equal dimensions wins, then `custom` if the resolution moved off
    /// the detected default, else nothing.
    pub fn derive_active(
        &self,
        resolution: Resolution,
        explicit: Option<&str>,
    ) -> Option<&'static str> {
        if let Some(id) = explicit {
            return self.get(id).map(|p| p.id);
        }

        let by_value = self
            .presets
            .iter()
            .filter(|p| p.id != CUSTOM_ID)
            .find(|p| p.dimensions == Some(resolution))
            .map(|p| p.id);

        by_value.or_else(|| (resolution != self.detected_resolution()).then_some(CUSTOM_ID))
    }

    /// Display records with `active` marked selected.
    pub fn cards(&self, active: Option<&str>) -> Vec<Card> {
        self.presets
            .iter()
            .map(|p| Card {
                id: p.id,
                name: p.name.clone(),
                dims_label: match p.dimensions {
                    Some(dims) if p.id != CUSTOM_ID => dims.to_string(),
                    _ => "Set custom".to_string(),
                },
                badge: p.badge,
                selected: active == Some(p.id),
            })
            .collect()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::new()
    }
}
