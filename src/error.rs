use thiserror::Error;

/// Form fields the user types numbers into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Climb,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::Cadence => "cadence",
            Self::Climb => "climb",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{} is not a number", .0.as_str())]
    NotANumber(Field),

    #[error("{} must be greater than zero", .0.as_str())]
    NotPositive(Field),
}

impl InputError {
    pub const fn field(&self) -> Field {
        match self {
            Self::NotANumber(f) | Self::NotPositive(f) => *f,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct GeolocationError(pub String);

/// The two failures a user can see. Both end up as an alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Could not get your position")]
    Geolocation(#[source] GeolocationError),

    #[error("Inputs have to be positive numbers!")]
    InvalidInput(#[from] InputError),
}

impl From<GeolocationError> for AppError {
    fn from(e: GeolocationError) -> Self {
        Self::Geolocation(e)
    }
}
