use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{coordinates::Coordinates, error::WorkoutError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(pub u64);

impl WorkoutId {
    /// None once the id space is used up. `u64::MAX` itself is never handed out.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase name, as used by the form select and css classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(format!("Unknown workout kind: {other}")),
        }
    }
}

/// Kind-specific part of a workout, including its derived metric.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDetails {
    Running { cadence_spm: f64, pace_min_per_km: f64 },
    Cycling { elevation_gain_m: f64, speed_km_per_h: f64 },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    details: WorkoutDetails,
}

impl Workout {
    pub fn running<Tz: TimeZone>(
        id: WorkoutId,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        created_at: DateTime<Tz>,
    ) -> Result<Self, WorkoutError>
    where
        Tz::Offset: fmt::Display,
    {
        if !all_positive(&[distance_km, duration_min, cadence_spm]) {
            return Err(WorkoutError::InvalidRunning);
        }

        let details = WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };

        Ok(Self::build(id, coordinates, distance_km, duration_min, details, created_at))
    }

    /// Elevation may be zero or negative, but it still has to be a finite number.
    pub fn cycling<Tz: TimeZone>(
        id: WorkoutId,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        created_at: DateTime<Tz>,
    ) -> Result<Self, WorkoutError>
    where
        Tz::Offset: fmt::Display,
    {
        if !all_positive(&[distance_km, duration_min]) || !elevation_gain_m.is_finite() {
            return Err(WorkoutError::InvalidCycling);
        }

        let details = WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.),
        };

        Ok(Self::build(id, coordinates, distance_km, duration_min, details, created_at))
    }

    fn build<Tz: TimeZone>(
        id: WorkoutId,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        details: WorkoutDetails,
        created_at: DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        // Day and month are taken in the creator's zone, not in UTC
        let description = format!("{} on {}", details.kind().label(), created_at.format("%B %-d"));

        Self {
            id,
            created_at: created_at.with_timezone(&Utc),
            coordinates,
            distance_km,
            duration_min,
            description,
            details,
        }
    }

    /// Restored workouts keep the description they were created with.
    pub(crate) fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v > 0.)
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn april_14() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn running_derives_pace_and_description() {
        let workout = Workout::running(WorkoutId(1), Coordinates::new(56.1, 10.2), 5.2, 24., 178., april_14()).unwrap();

        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert_eq!(workout.description(), "Running on April 14");
        match workout.details() {
            WorkoutDetails::Running { cadence_spm, pace_min_per_km } => {
                assert_eq!(*cadence_spm, 178.);
                assert_eq!(*pace_min_per_km, 24. / 5.2);
            }
            other => panic!("Expected running details, got {other:?}"),
        }
    }

    #[test]
    fn cycling_derives_speed() {
        let workout = Workout::cycling(WorkoutId(2), Coordinates::new(20., 20.), 15., 45., 120., april_14()).unwrap();

        assert_eq!(workout.description(), "Cycling on April 14");
        assert_eq!(
            workout.details(),
            &WorkoutDetails::Cycling { elevation_gain_m: 120., speed_km_per_h: 20. }
        );
    }

    #[test]
    fn cycling_accepts_negative_and_zero_elevation() {
        for elevation in [0., -35.] {
            assert!(Workout::cycling(WorkoutId(3), Coordinates::new(0., 0.), 10., 30., elevation, april_14()).is_ok());
        }
    }

    #[test]
    fn rejects_non_positive_or_non_finite_input() {
        let at = Coordinates::new(0., 0.);

        for (distance, duration, cadence) in [(0., 10., 160.), (5., -1., 160.), (5., 10., 0.), (f64::NAN, 10., 160.), (5., f64::INFINITY, 160.)] {
            assert_eq!(
                Workout::running(WorkoutId(1), at, distance, duration, cadence, april_14()),
                Err(WorkoutError::InvalidRunning)
            );
        }

        for (distance, duration, elevation) in [(0., 10., 5.), (5., 0., 5.), (5., 10., f64::NAN)] {
            assert_eq!(
                Workout::cycling(WorkoutId(1), at, distance, duration, elevation, april_14()),
                Err(WorkoutError::InvalidCycling)
            );
        }
    }

    #[test]
    fn description_uses_creator_calendar_day() {
        // 23:30 UTC on March 1st is already March 2nd at UTC+2
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap().with_timezone(&offset);

        let workout = Workout::running(WorkoutId(1), Coordinates::new(0., 0.), 3., 15., 170., created_at).unwrap();

        assert_eq!(workout.description(), "Running on March 2");
        assert_eq!(workout.created_at(), Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap());
    }

    #[test]
    fn kind_parses_form_values() {
        assert_eq!("running".parse::<WorkoutKind>(), Ok(WorkoutKind::Running));
        assert_eq!("cycling".parse::<WorkoutKind>(), Ok(WorkoutKind::Cycling));
        assert!("swimming".parse::<WorkoutKind>().is_err());
    }
}
