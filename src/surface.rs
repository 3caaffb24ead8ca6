//! Everything the controller needs from the outside world.
//!
//! A browser binding implements these over the DOM, the geolocation API and a
//! tile-map library; [`crate::headless`] implements them in memory.

use crate::error::GeolocationError;
use crate::render::Popup;
use crate::types::{Coords, WorkoutType};
use crate::validate::FormValues;

/// One-shot position lookup. Called at most once per session.
pub trait Geolocator {
    fn current_position(&mut self) -> Result<Coords, GeolocationError>;
}

/// Creates the map once a position is known.
pub trait MapProvider {
    type Map: MapView;

    fn load(&mut self, center: Coords, zoom: u8) -> Self::Map;
}

pub trait MapView {
    fn add_tile_layer(&mut self, url_template: &str);

    /// After this, clicks on the map reach [`crate::app::App::map_clicked`].
    fn listen_for_clicks(&mut self);

    /// Places a marker and opens its popup.
    fn add_marker(&mut self, at: Coords, popup: &Popup);
}

/// Form, sidebar list and alerts.
pub trait Page {
    fn form_values(&self) -> FormValues;

    fn set_form_visible(&mut self, visible: bool);

    fn focus_distance(&mut self);

    /// Empties distance, duration, cadence and climb. Type is kept.
    fn clear_inputs(&mut self);

    /// Shows the cadence row for running, the climb row for cycling, and
    /// hides the other one.
    fn show_fields_for(&mut self, workout_type: WorkoutType);

    fn append_workout_row(&mut self, html: &str);

    fn alert(&mut self, message: &str);
}
