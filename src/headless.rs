//! In-memory collaborators. They record what the controller asked for so a
//! session can be replayed from the command line or inspected in tests.

use crate::error::{Field, GeolocationError};
use crate::render::Popup;
use crate::surface::{Geolocator, MapProvider, MapView, Page};
use crate::types::{Coords, WorkoutType};
use crate::validate::FormValues;

/// Resolves to a fixed position, or fails when there is none.
#[derive(Debug, Clone, Default)]
pub struct FixedGeolocator {
    position: Option<Coords>,
    calls: usize,
}

impl FixedGeolocator {
    pub const fn new(position: Option<Coords>) -> Self {
        Self { position, calls: 0 }
    }

    pub const fn calls(&self) -> usize {
        self.calls
    }
}

impl Geolocator for FixedGeolocator {
    fn current_position(&mut self) -> Result<Coords, GeolocationError> {
        self.calls += 1;
        self.position
            .ok_or_else(|| GeolocationError("position unavailable".to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordingMapProvider;

impl MapProvider for RecordingMapProvider {
    type Map = RecordingMap;

    fn load(&mut self, center: Coords, zoom: u8) -> RecordingMap {
        RecordingMap {
            center,
            zoom,
            tile_layers: Vec::new(),
            listening: false,
            markers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Coords,
    pub popup: Popup,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordingMap {
    pub center: Coords,
    pub zoom: u8,
    pub tile_layers: Vec<String>,
    pub listening: bool,
    pub markers: Vec<Marker>,
}

impl MapView for RecordingMap {
    fn add_tile_layer(&mut self, url_template: &str) {
        self.tile_layers.push(url_template.to_string());
    }

    fn listen_for_clicks(&mut self) {
        self.listening = true;
    }

    fn add_marker(&mut self, at: Coords, popup: &Popup) {
        tracing::trace!(at = %at, popup = %popup.content, "marker");
        self.markers.push(Marker {
            at,
            popup: popup.clone(),
            open: true,
        });
    }
}

/// Form, sidebar and alert box without a browser.
#[derive(Debug, Clone)]
pub struct HeadlessPage {
    pub form: FormValues,
    pub form_visible: bool,
    pub cadence_visible: bool,
    pub climb_visible: bool,
    pub focused: Option<Field>,
    pub rows: Vec<String>,
    pub alerts: Vec<String>,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self {
            form: FormValues::default(),
            form_visible: false,
            cadence_visible: true,
            climb_visible: false,
            focused: None,
            rows: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

impl HeadlessPage {
    pub fn type_in(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn select_type(&mut self, workout_type: WorkoutType) {
        self.form.workout_type = workout_type;
    }
}

impl Page for HeadlessPage {
    fn form_values(&self) -> FormValues {
        self.form.clone()
    }

    fn set_form_visible(&mut self, visible: bool) {
        self.form_visible = visible;
        if !visible {
            self.focused = None;
        }
    }

    fn focus_distance(&mut self) {
        self.focused = Some(Field::Distance);
    }

    fn clear_inputs(&mut self) {
        self.form = FormValues {
            workout_type: self.form.workout_type,
            ..FormValues::default()
        };
    }

    fn show_fields_for(&mut self, workout_type: WorkoutType) {
        self.cadence_visible = workout_type == WorkoutType::Running;
        self.climb_visible = workout_type == WorkoutType::Cycling;
    }

    fn append_workout_row(&mut self, html: &str) {
        self.rows.push(html.to_string());
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!(text = message, "alert shown");
        self.alerts.push(message.to_string());
    }
}
