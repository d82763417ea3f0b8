//! Selection state: current color and resolution, mutated only through validated setters

use std::sync::{Arc, Mutex};

use log::debug;

use crate::catalog::{CardCatalog, CUSTOM_ID, DETECTED_ID};
use crate::color::Color;
use crate::validate::is_valid_dimension;
use crate::{Error, Resolution, Result};

/// Change signal delivered to observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    ColorChanged(Color),
    ResolutionChanged {
        resolution: Resolution,
        /// Card that caused the change (`custom` for custom input)
        preset_id: &'static str,
    },
}

type ChangeHandler = Arc<dyn Fn(&SelectionEvent) + Send + Sync>;

#[derive(Debug, Clone)]
struct SelectionState {
    color: Color,
    resolution: Resolution,
    explicit: Option<&'static str>,
}

/// Color and resolution the user is working on.
///
/// State sits behind a mutex so the model can be shared with export tasks.
/// Observers are called after the lock is released.
pub struct SelectionModel {
    catalog: Arc<CardCatalog>,
    state: Mutex<SelectionState>,
    observers: Mutex<Vec<ChangeHandler>>,
}

impl SelectionModel {
    /// Model seeded from the catalog's detected entry, which starts active.
    pub fn new(catalog: Arc<CardCatalog>, color: Color) -> Self {
        let resolution = catalog.detected_resolution();
        SelectionModel {
            catalog,
            state: Mutex::new(SelectionState {
                color,
                resolution,
                explicit: Some(DETECTED_ID),
            }),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn color(&self) -> Color {
        self.state.lock().unwrap().color.clone()
    }

    pub fn resolution(&self) -> Resolution {
        self.state.lock().unwrap().resolution
    }

    /// Register an observer for color and resolution changes.
    pub fn on_change<F>(&self, cb: F)
    where
        F: Fn(&SelectionEvent) + Send + Sync + 'static,
    {
        self.observers.lock().unwrap().push(Arc::new(cb));
    }

    /// Validate, canonicalize and store a typed color.
    ///
    /// Invalid input leaves the state untouched and notifies nobody.
    pub fn set_color(&self, input: &str) -> Result<Color> {
        let color = Color::parse(input)?;
        Ok(self.store_color(color))
    }

    /// Native picker path. Channel values are always well-formed.
    pub fn set_color_rgb(&self, rgb: [u8; 3]) -> Color {
        self.store_color(Color::from_rgb(rgb))
    }

    fn store_color(&self, color: Color) -> Color {
        self.state.lock().unwrap().color = color.clone();
        debug!("Color set to {}", color);
        self.emit(&SelectionEvent::ColorChanged(color.clone()));
        color
    }

    /// Copy a preset's dimensions into the current resolution.
    ///
    /// Returns `None` without touching state for `custom` and unknown ids.
    pub fn set_resolution_by_preset_id(&self, id: &str) -> Option<Resolution> {
        if id == CUSTOM_ID {
            return None;
        }
        let preset = self.catalog.get(id)?;
        let resolution = preset.dimensions?;
        let preset_id = preset.id;

        {
            let mut state = self.state.lock().unwrap();
            state.resolution = resolution;
            state.explicit = Some(preset_id);
        }
        debug!("Resolution set to {} from preset {}", resolution, preset_id);
        self.emit(&SelectionEvent::ResolutionChanged { resolution, preset_id });
        Some(resolution)
    }

    /// Store a user-entered resolution after range-checking both sides.
    pub fn set_custom_resolution(&self, width: i64, height: i64) -> Result<Resolution> {
        if !(is_valid_dimension(width as f64) && is_valid_dimension(height as f64)) {
            return Err(Error::InvalidDimensions);
        }
        let resolution = Resolution::new(width as u32, height as u32);

        {
            let mut state = self.state.lock().unwrap();
            state.resolution = resolution;
            state.explicit = Some(CUSTOM_ID);
        }
        debug!("Custom resolution set to {}", resolution);
        self.emit(&SelectionEvent::ResolutionChanged {
            resolution,
            preset_id: CUSTOM_ID,
        });
        Ok(resolution)
    }

    /// Card to highlight for the current state.
    pub fn active_preset_id(&self) -> Option<&'static str> {
        let (resolution, explicit) = {
            let state = self.state.lock().unwrap();
            (state.resolution, state.explicit)
        };
        self.catalog.derive_active(resolution, explicit)
    }

    fn emit(&self, event: &SelectionEvent) {
        let observers = self.observers.lock().unwrap().clone();
        for cb in observers {
            cb(event);
        }
    }
}
