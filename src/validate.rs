use crate::error::{Field, InputError};
use crate::types::{Coords, Workout, WorkoutType};
use chrono::{DateTime, Utc};

/// Raw form contents, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub climb: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Distance => &self.distance,
            Field::Duration => &self.duration,
            Field::Cadence => &self.cadence,
            Field::Climb => &self.climb,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Distance => self.distance = value,
            Field::Duration => self.duration = value,
            Field::Cadence => self.cadence = value,
            Field::Climb => self.climb = value,
        }
    }
}

/// Numbers that passed validation, not yet tied to a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDraft {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        climb: f64,
    },
}

impl WorkoutDraft {
    pub fn into_workout(self, coords: Coords, created: DateTime<Utc>) -> Workout {
        match self {
            Self::Running {
                distance,
                duration,
                cadence,
            } => Workout::running(coords, distance, duration, cadence, created),
            Self::Cycling {
                distance,
                duration,
                climb,
            } => Workout::cycling(coords, distance, duration, climb, created),
        }
    }
}

/// Every field the selected type needs must be a finite number above zero.
///
/// Fields are checked in form order and the first failure is returned.
/// Climb gets the same positivity check as the others.
pub fn parse_submission(form: &FormValues) -> Result<WorkoutDraft, InputError> {
    let distance = positive(form, Field::Distance)?;
    let duration = positive(form, Field::Duration)?;

    Ok(match form.workout_type {
        WorkoutType::Running => WorkoutDraft::Running {
            distance,
            duration,
            cadence: positive(form, Field::Cadence)?,
        },
        WorkoutType::Cycling => WorkoutDraft::Cycling {
            distance,
            duration,
            climb: positive(form, Field::Climb)?,
        },
    })
}

fn positive(form: &FormValues, field: Field) -> Result<f64, InputError> {
    let v = number(form.get(field)).ok_or(InputError::NotANumber(field))?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(InputError::NotPositive(field))
    }
}

fn number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(ty: WorkoutType, d: &str, t: &str, c: &str, e: &str) -> FormValues {
        FormValues {
            workout_type: ty,
            distance: d.into(),
            duration: t.into(),
            cadence: c.into(),
            climb: e.into(),
        }
    }

    #[test]
    fn running_needs_cadence_only() {
        let draft = parse_submission(&form(WorkoutType::Running, "5", "25", "160", "")).unwrap();
        assert_eq!(
            draft,
            WorkoutDraft::Running {
                distance: 5.0,
                duration: 25.0,
                cadence: 160.0
            }
        );
    }

    #[test]
    fn cycling_needs_climb_only() {
        let draft =
            parse_submission(&form(WorkoutType::Cycling, " 20 ", "60", "junk", "300")).unwrap();
        assert!(matches!(draft, WorkoutDraft::Cycling { climb, .. } if climb == 300.0));
    }

    #[test]
    fn rejects_non_numbers() {
        for raw in ["abc", "", "NaN", "inf", "-inf", "1e400"] {
            let err = parse_submission(&form(WorkoutType::Running, raw, "25", "160", ""))
                .unwrap_err();
            assert_eq!(err, InputError::NotANumber(Field::Distance), "{raw:?}");
        }
    }

    #[test]
    fn rejects_zero_and_negative() {
        let err = parse_submission(&form(WorkoutType::Running, "0", "25", "160", "")).unwrap_err();
        assert_eq!(err, InputError::NotPositive(Field::Distance));

        let err = parse_submission(&form(WorkoutType::Running, "5", "-3", "160", "")).unwrap_err();
        assert_eq!(err, InputError::NotPositive(Field::Duration));
    }

    #[test]
    fn climb_must_be_positive_too() {
        let err = parse_submission(&form(WorkoutType::Cycling, "20", "60", "", "0")).unwrap_err();
        assert_eq!(err, InputError::NotPositive(Field::Climb));
        let err = parse_submission(&form(WorkoutType::Cycling, "20", "60", "", "-10")).unwrap_err();
        assert_eq!(err, InputError::NotPositive(Field::Climb));
    }

    #[test]
    fn draft_builds_matching_workout() {
        let draft = WorkoutDraft::Cycling {
            distance: 20.0,
            duration: 60.0,
            climb: 300.0,
        };
        let w = draft.into_workout(Coords::new(1.0, 2.0), Utc::now());
        assert_eq!(w.workout_type(), WorkoutType::Cycling);
        assert!((w.distance - 20.0).abs() < f64::EPSILON);
    }
}
