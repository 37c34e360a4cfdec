use crate::{
    constants::{POPUP_MAX_WIDTH, POPUP_MIN_WIDTH},
    coordinates::Coordinates,
    workout::{Workout, WorkoutDetails, WorkoutId, WorkoutKind},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Metric {
    fn new(icon: &'static str, value: impl ToString, unit: &'static str) -> Self {
        Self { icon, value: value.to_string(), unit }
    }
}

/// Everything the workout list needs to draw one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub metrics: Vec<Metric>,
}

impl WorkoutEntry {
    pub fn class_name(&self) -> String {
        format!("workout workout--{}", self.kind.as_str())
    }
}

impl From<&Workout> for WorkoutEntry {
    fn from(workout: &Workout) -> Self {
        let icon = match workout.kind() {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♂️",
        };

        let mut metrics = vec![
            Metric::new(icon, workout.distance_km(), "km"),
            Metric::new("⏱", workout.duration_min(), "min"),
        ];

        match *workout.details() {
            WorkoutDetails::Running { cadence_spm, pace_min_per_km } => {
                metrics.push(Metric::new("⚡️", pace_min_per_km.floor(), "min/km"));
                metrics.push(Metric::new("🦶🏼", cadence_spm, "spm"));
            }
            WorkoutDetails::Cycling { elevation_gain_m, speed_km_per_h } => {
                metrics.push(Metric::new("⚡️", format!("{speed_km_per_h:.1}"), "km/h"));
                metrics.push(Metric::new("⛰", elevation_gain_m, "m"));
            }
        }

        Self {
            id: workout.id(),
            kind: workout.kind(),
            title: workout.description().to_owned(),
            metrics,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupStyle {
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

/// A map marker with its popup, opened as soon as it is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: WorkoutId,
    pub coordinates: Coordinates,
    pub content: String,
    pub style: PopupStyle,
}

impl From<&Workout> for MarkerSpec {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id(),
            coordinates: workout.coordinates(),
            content: workout.description().to_owned(),
            style: PopupStyle {
                max_width: POPUP_MAX_WIDTH,
                min_width: POPUP_MIN_WIDTH,
                auto_close: false,
                close_on_click: false,
                class_name: format!("{}-popup", workout.kind().as_str()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn values(entry: &WorkoutEntry) -> Vec<(&str, &str)> {
        entry.metrics.iter().map(|m| (m.value.as_str(), m.unit)).collect()
    }

    #[test]
    fn running_entry() {
        let at = Utc.with_ymd_and_hms(2025, 4, 14, 8, 0, 0).unwrap();
        let workout = Workout::running(WorkoutId(7), Coordinates::new(1., 2.), 5.2, 24., 178., at).unwrap();

        let entry = WorkoutEntry::from(&workout);

        assert_eq!(entry.title, "Running on April 14");
        assert_eq!(entry.class_name(), "workout workout--running");
        assert_eq!(entry.metrics[0].icon, "🏃‍♂️");
        assert_eq!(values(&entry), vec![("5.2", "km"), ("24", "min"), ("4", "min/km"), ("178", "spm")]);
    }

    #[test]
    fn cycling_entry_and_marker() {
        let at = Utc.with_ymd_and_hms(2025, 7, 2, 8, 0, 0).unwrap();
        let workout = Workout::cycling(WorkoutId(8), Coordinates::new(20., 20.), 27., 95., 223., at).unwrap();

        let entry = WorkoutEntry::from(&workout);
        assert_eq!(entry.metrics[0].icon, "🚴‍♂️");
        assert_eq!(values(&entry), vec![("27", "km"), ("95", "min"), ("17.1", "km/h"), ("223", "m")]);

        let marker = MarkerSpec::from(&workout);
        assert_eq!(marker.coordinates, Coordinates::new(20., 20.));
        assert_eq!(marker.content, "Cycling on July 2");
        assert_eq!(marker.style.class_name, "cycling-popup");
        assert!(!marker.style.auto_close && !marker.style.close_on_click);
    }
}
