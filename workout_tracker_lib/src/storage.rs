//! JSON codec for the persisted workout list.
//!
//! Only raw inputs and the description are stored. Pace and speed are derived again on
//! load through the validating constructors, so a record that no longer satisfies the
//! model invariants rejects the whole blob.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    coordinates::Coordinates,
    error::CodecError,
    workout::{Workout, WorkoutDetails, WorkoutId},
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RecordDetails {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkoutRecord {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    #[serde(flatten)]
    details: RecordDetails,
}

impl From<&Workout> for WorkoutRecord {
    fn from(workout: &Workout) -> Self {
        let details = match *workout.details() {
            WorkoutDetails::Running { cadence_spm, .. } => RecordDetails::Running { cadence_spm },
            WorkoutDetails::Cycling { elevation_gain_m, .. } => RecordDetails::Cycling { elevation_gain_m },
        };

        Self {
            id: workout.id(),
            created_at: workout.created_at(),
            coordinates: workout.coordinates(),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
            description: workout.description().to_owned(),
            details,
        }
    }
}

impl TryFrom<WorkoutRecord> for Workout {
    type Error = CodecError;

    fn try_from(record: WorkoutRecord) -> Result<Self, Self::Error> {
        let WorkoutRecord { id, created_at, coordinates, distance_km, duration_min, description, details } = record;

        let workout = match details {
            RecordDetails::Running { cadence_spm } => {
                Workout::running(id, coordinates, distance_km, duration_min, cadence_spm, created_at)
            }
            RecordDetails::Cycling { elevation_gain_m } => {
                Workout::cycling(id, coordinates, distance_km, duration_min, elevation_gain_m, created_at)
            }
        }
        .map_err(|source| CodecError::InvalidRecord { id, source })?;

        Ok(workout.with_description(description))
    }
}

pub fn encode(workouts: &[Workout]) -> Result<String, CodecError> {
    let records: Vec<WorkoutRecord> = workouts.iter().map(WorkoutRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

pub fn decode(blob: &str) -> Result<Vec<Workout>, CodecError> {
    let records: Vec<WorkoutRecord> = serde_json::from_str(blob)?;

    let mut seen = HashSet::new();
    let mut workouts = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(CodecError::DuplicateId(record.id));
        }
        if record.id.next().is_none() {
            return Err(CodecError::IdOutOfRange(record.id));
        }
        workouts.push(Workout::try_from(record)?);
    }

    Ok(workouts)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample() -> Vec<Workout> {
        let at = Utc.with_ymd_and_hms(2025, 6, 3, 7, 0, 0).unwrap();
        vec![
            Workout::running(WorkoutId(0), Coordinates::new(56.15, 10.2), 5., 25., 172., at).unwrap(),
            Workout::cycling(WorkoutId(1), Coordinates::new(20., 20.), 15., 45., -12., at).unwrap(),
        ]
    }

    #[test]
    fn restores_what_was_persisted() {
        let workouts = sample();

        let restored = decode(&encode(&workouts).unwrap()).unwrap();

        assert_eq!(restored, workouts);
    }

    #[test]
    fn full_precision_values_survive() {
        let at = Utc.with_ymd_and_hms(2025, 6, 3, 7, 0, 0).unwrap();
        let workouts = vec![
            Workout::running(WorkoutId(0), Coordinates::new(56.17518834567891, 10.196123456789012), 1122.6127397260277, 0.1 + 0.2, 171.33333333333334, at).unwrap(),
            Workout::cycling(WorkoutId(1), Coordinates::new(-33.868820388457286, 151.20929958561063), 2.0_f64.sqrt(), 1. / 3., -7.000000000000001, at).unwrap(),
        ];

        let restored = decode(&encode(&workouts).unwrap()).unwrap();

        for (before, after) in workouts.iter().zip(&restored) {
            assert_eq!(after.coordinates().lat.to_bits(), before.coordinates().lat.to_bits());
            assert_eq!(after.coordinates().lng.to_bits(), before.coordinates().lng.to_bits());
            assert_eq!(after.distance_km().to_bits(), before.distance_km().to_bits());
            assert_eq!(after.duration_min().to_bits(), before.duration_min().to_bits());
        }
        assert_eq!(restored, workouts);
    }

    #[test]
    fn largest_id_is_rejected() {
        let blob = format!(
            r#"[{{"id":{},"created_at":"2025-06-03T07:00:00Z","coordinates":{{"lat":1.0,"lng":2.0}},
            "distance_km":5.0,"duration_min":20.0,"description":"Running on June 3","kind":"running","cadence_spm":170.0}}]"#,
            u64::MAX
        );

        assert!(matches!(decode(&blob), Err(CodecError::IdOutOfRange(WorkoutId(u64::MAX)))));
    }

    #[test]
    fn stored_description_is_kept() {
        let blob = r#"[{"id":4,"created_at":"2025-06-03T07:00:00Z","coordinates":{"lat":1.0,"lng":2.0},
            "distance_km":10.0,"duration_min":60.0,"description":"Cycling on June 4","kind":"cycling","elevation_gain_m":3.0}]"#;

        let restored = decode(blob).unwrap();

        assert_eq!(restored[0].description(), "Cycling on June 4");
        assert_eq!(
            restored[0].details(),
            &WorkoutDetails::Cycling { elevation_gain_m: 3., speed_km_per_h: 10. }
        );
    }

    #[test]
    fn invalid_records_reject_the_blob() {
        let zero_cadence = r#"[{"id":1,"created_at":"2025-06-03T07:00:00Z","coordinates":{"lat":1.0,"lng":2.0},
            "distance_km":5.0,"duration_min":20.0,"description":"Running on June 3","kind":"running","cadence_spm":0.0}]"#;
        assert!(matches!(decode(zero_cadence), Err(CodecError::InvalidRecord { id: WorkoutId(1), .. })));

        let mut workouts = sample();
        workouts.push(workouts[0].clone());
        assert!(matches!(decode(&encode(&workouts).unwrap()), Err(CodecError::DuplicateId(WorkoutId(0)))));

        assert!(matches!(decode("not json"), Err(CodecError::Json(_))));
    }
}
