use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::{
    coordinates::Coordinates,
    error::WorkoutError,
    workout::{Workout, WorkoutId, WorkoutKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Shown,
    /// Hidden right after a submission, with the css transition suppressed until
    /// [`EntryForm::finish_collapse`].
    Collapsing,
}

/// State of the workout entry form. Inputs are kept as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    kind: WorkoutKind,
    distance: String,
    duration: String,
    cadence: String,
    elevation: String,
    visibility: FormVisibility,
    focus_requested: bool,
}

/// Numeric form contents, coerced but not yet validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Cadence for running, elevation gain for cycling.
    pub extra: f64,
}

impl EntryForm {
    pub fn kind(&self) -> WorkoutKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: WorkoutKind) {
        self.kind = kind;
    }

    /// The one kind-specific field that is shown for the current kind.
    pub fn visible_extra_field(&self) -> FormField {
        match self.kind {
            WorkoutKind::Running => FormField::Cadence,
            WorkoutKind::Cycling => FormField::Elevation,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Cadence => &self.cadence,
            FormField::Elevation => &self.elevation,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Distance => self.distance = value,
            FormField::Duration => self.duration = value,
            FormField::Cadence => self.cadence = value,
            FormField::Elevation => self.elevation = value,
        }
    }

    pub fn visibility(&self) -> FormVisibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == FormVisibility::Shown
    }

    pub fn show(&mut self) {
        self.visibility = FormVisibility::Shown;
        self.focus_requested = true;
    }

    /// Returns true once after every [`show`](Self::show).
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    pub fn collapse(&mut self) {
        self.visibility = FormVisibility::Collapsing;
        self.focus_requested = false;
    }

    pub fn finish_collapse(&mut self) {
        if self.visibility == FormVisibility::Collapsing {
            self.visibility = FormVisibility::Hidden;
        }
    }

    /// Empties every input. The selected kind is kept.
    pub fn clear_inputs(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }

    pub fn read(&self) -> FormInput {
        FormInput {
            kind: self.kind,
            distance_km: coerce_number(&self.distance),
            duration_min: coerce_number(&self.duration),
            extra: coerce_number(self.field(self.visible_extra_field())),
        }
    }
}

impl FormInput {
    pub fn into_workout<Tz: TimeZone>(
        self,
        id: WorkoutId,
        coordinates: Coordinates,
        created_at: DateTime<Tz>,
    ) -> Result<Workout, WorkoutError>
    where
        Tz::Offset: fmt::Display,
    {
        match self.kind {
            WorkoutKind::Running => {
                Workout::running(id, coordinates, self.distance_km, self.duration_min, self.extra, created_at)
            }
            WorkoutKind::Cycling => {
                Workout::cycling(id, coordinates, self.distance_km, self.duration_min, self.extra, created_at)
            }
        }
    }
}

/// Numeric coercion of an input's text: blank is 0, anything unparseable is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}
