use crate::dlog;
use crate::error::AppError;
use crate::render;
use crate::surface::{Geolocator, MapProvider, MapView, Page};
use crate::types::{Coords, Workout};
use crate::validate::parse_submission;
use anyhow::Result;
use chrono::{DateTime, Utc};

pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub zoom: u8,
    pub tile_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Idle,
    AwaitingInput { at: Coords },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Index into [`App::workouts`].
    Added(usize),
    Rejected(AppError),
    /// Nothing was clicked yet, so there is nowhere to put a workout.
    Ignored,
}

/// One session: the map, the pending click and the workouts logged so far.
pub struct App<P: MapProvider, G: Page> {
    config: AppConfig,
    provider: P,
    page: G,
    map: Option<P::Map>,
    state: FormState,
    workouts: Vec<Workout>,
    started: bool,
    clock: fn() -> DateTime<Utc>,
}

impl<P: MapProvider, G: Page> App<P, G> {
    pub fn new(config: AppConfig, provider: P, page: G) -> Self {
        Self {
            config,
            provider,
            page,
            map: None,
            state: FormState::Idle,
            workouts: Vec::new(),
            started: false,
            clock: Utc::now,
        }
    }

    /// Replaces the creation-time source for new workouts.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Asks for the position once. On success the map is loaded; on failure
    /// the user is alerted and the map stays unloaded for the session.
    pub fn start(&mut self, geo: &mut impl Geolocator) -> Result<(), AppError> {
        if self.started {
            dlog!("start called twice; ignoring");
            return Ok(());
        }
        self.started = true;

        let ty = self.page.form_values().workout_type;
        self.page.show_fields_for(ty);

        match geo.current_position() {
            Ok(center) => {
                self.load_map(center);
                Ok(())
            }
            Err(e) => {
                let err = AppError::from(e);
                tracing::warn!(err = ?err, "geolocation failed");
                self.page.alert(&err.to_string());
                Err(err)
            }
        }
    }

    fn load_map(&mut self, center: Coords) {
        let mut map = self.provider.load(center, self.config.zoom);
        map.add_tile_layer(&self.config.tile_url);
        map.listen_for_clicks();
        self.map = Some(map);
        tracing::info!(center = %center, zoom = self.config.zoom, "map loaded");
    }

    pub fn map_clicked(&mut self, at: Coords) {
        if self.map.is_none() {
            dlog!("click at {at} before map loaded; ignoring");
            return;
        }
        dlog!("map click at {at}");
        self.state = FormState::AwaitingInput { at };
        self.page.set_form_visible(true);
        self.page.focus_distance();
    }

    pub fn type_changed(&mut self) {
        let ty = self.page.form_values().workout_type;
        dlog!("workout type -> {ty}");
        self.page.show_fields_for(ty);
    }

    /// Validates the form and, if it holds, logs a workout at the clicked spot.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let FormState::AwaitingInput { at } = self.state else {
            tracing::warn!("submit without a map click; ignoring");
            return Ok(SubmitOutcome::Ignored);
        };
        let Some(map) = self.map.as_mut() else {
            tracing::warn!("submit before map loaded; ignoring");
            return Ok(SubmitOutcome::Ignored);
        };

        let form = self.page.form_values();
        let draft = match parse_submission(&form) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(field = e.field().as_str(), reason = %e, "rejected workout input");
                let err = AppError::from(e);
                self.page.alert(&err.to_string());
                return Ok(SubmitOutcome::Rejected(err));
            }
        };

        let workout = draft.into_workout(at, (self.clock)());
        let row = render::workout_row(&workout)?;
        let popup = render::popup(&workout);

        map.add_marker(at, &popup);
        self.page.append_workout_row(&row);
        self.page.clear_inputs();
        self.page.set_form_visible(false);
        self.state = FormState::Idle;

        tracing::info!(
            id = %workout.id,
            kind = %workout.workout_type(),
            at = %at,
            "workout added"
        );
        self.workouts.push(workout);
        Ok(SubmitOutcome::Added(self.workouts.len() - 1))
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    pub fn map(&self) -> Option<&P::Map> {
        self.map.as_ref()
    }

    pub const fn page(&self) -> &G {
        &self.page
    }

    /// Lets the driving code type into the form the way a user would.
    pub fn page_mut(&mut self) -> &mut G {
        &mut self.page
    }
}
