use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

/// Which workout the form is describing. Mirrors the `type` select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Run",
            Self::Cycling => "Ride",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Running => "🏃‍♂️",
            Self::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        /// steps/min
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        /// meters
        climb: f64,
        /// km/h
        speed: f64,
    },
}

/// A logged workout. Everything derived is computed once in the constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub id: String,
    pub created: DateTime<Utc>,
    pub coords: Coords,
    /// km
    pub distance: f64,
    /// minutes
    pub duration: f64,
    #[serde(flatten)]
    pub kind: WorkoutKind,
    pub description: String,
}

impl Workout {
    /// `distance` must be positive; nothing here checks it.
    pub fn running(
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
        created: DateTime<Utc>,
    ) -> Self {
        let pace = duration / distance;
        Self::build(coords, distance, duration, WorkoutKind::Running { cadence, pace }, created)
    }

    /// `duration` must be positive; nothing here checks it.
    pub fn cycling(
        coords: Coords,
        distance: f64,
        duration: f64,
        climb: f64,
        created: DateTime<Utc>,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::build(coords, distance, duration, WorkoutKind::Cycling { climb, speed }, created)
    }

    pub fn running_now(coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self {
        Self::running(coords, distance, duration, cadence, Utc::now())
    }

    pub fn cycling_now(coords: Coords, distance: f64, duration: f64, climb: f64) -> Self {
        Self::cycling(coords, distance, duration, climb, Utc::now())
    }

    fn build(
        coords: Coords,
        distance: f64,
        duration: f64,
        kind: WorkoutKind,
        created: DateTime<Utc>,
    ) -> Self {
        let ty = match kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        };
        Self {
            id: id_from_timestamp(created),
            created,
            coords,
            distance,
            duration,
            kind,
            description: describe(ty, created),
        }
    }

    pub const fn workout_type(&self) -> WorkoutType {
        match self.kind {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// Last 10 digits of the creation time in milliseconds.
///
/// Two workouts created in the same millisecond get the same id.
pub fn id_from_timestamp(created: DateTime<Utc>) -> String {
    let ms = created.timestamp_millis().unsigned_abs().to_string();
    let start = ms.len().saturating_sub(10);
    format!("{:0>10}", &ms[start..])
}

fn describe(ty: WorkoutType, created: DateTime<Utc>) -> String {
    let local = created.with_timezone(&Local);
    format!("{} on {}", ty.label(), local.format("%-d %B %Y, %H:%M"))
}
