use std::fmt;

use chrono::{DateTime, TimeZone};
use tracing::{debug, info, warn};

use crate::{
    capabilities::{KeyValueStore, MapView, Notifier, PanOptions},
    config::AppConfig,
    constants::LOCATION_UNAVAILABLE,
    coordinates::Coordinates,
    error::SubmitError,
    form::{EntryForm, FormField},
    render::{MarkerSpec, WorkoutEntry},
    storage,
    workout::{Workout, WorkoutId, WorkoutKind},
};

/**
 * The controller for one page session. Owns the workout list, the entry form and the
 * capabilities, and exposes one method per user or browser event.
 */
pub struct App<M, S, N> {
    map: M,
    map_ready: bool,
    store: S,
    notifier: N,
    config: AppConfig,
    workouts: Vec<Workout>,
    pending: Option<Coordinates>,
    form: EntryForm,
    next_id: WorkoutId,
}

impl<M: MapView, S: KeyValueStore, N: Notifier> App<M, S, N> {
    /// Builds the controller and restores any persisted workouts. The map stays
    /// unloaded until [`on_position`](Self::on_position).
    pub fn new(map: M, store: S, notifier: N, config: AppConfig) -> Self {
        let mut app = Self {
            map,
            map_ready: false,
            store,
            notifier,
            config,
            workouts: Vec::new(),
            pending: None,
            form: EntryForm::default(),
            next_id: WorkoutId::default(),
        };
        app.restore();
        app
    }

    /// Replaces the in-memory list with the persisted one. Absent or corrupt data
    /// yields an empty list.
    pub fn restore(&mut self) {
        self.workouts = match self.store.get(&self.config.storage_key) {
            None => Vec::new(),
            Some(blob) => storage::decode(&blob).unwrap_or_else(|err| {
                warn!("Ignoring stored workouts: {err}");
                Vec::new()
            }),
        };

        self.next_id = self
            .workouts
            .iter()
            .map(Workout::id)
            .max()
            .and_then(WorkoutId::next)
            .unwrap_or_default();

        info!("Restored {} workouts", self.workouts.len());

        if self.map_ready {
            self.render_markers();
        }
    }

    pub fn on_position(&mut self, position: Coordinates) {
        if self.map_ready {
            debug!("Map already loaded, ignoring position {position:?}");
            return;
        }

        self.map.load(position, self.config.default_zoom);
        self.map_ready = true;
        info!("Map loaded at {position:?}");

        self.render_markers();
    }

    pub fn on_position_unavailable(&mut self) {
        warn!("Geolocation unavailable, map disabled");
        self.notifier.alert(LOCATION_UNAVAILABLE);
    }

    pub fn on_map_click(&mut self, coordinates: Coordinates) {
        if !self.map_ready {
            return;
        }

        self.pending = Some(coordinates);
        self.form.show();
    }

    pub fn set_kind(&mut self, kind: WorkoutKind) {
        self.form.set_kind(kind);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Creates a workout from the form at the pending coordinates. On invalid input the
    /// user is alerted and nothing changes.
    pub fn submit<Tz: TimeZone>(&mut self, now: DateTime<Tz>) -> Result<WorkoutId, SubmitError>
    where
        Tz::Offset: fmt::Display,
    {
        let Some(coordinates) = self.pending else {
            debug!("Submit without a selected location");
            return Err(SubmitError::NoLocation);
        };

        let Some(following) = self.next_id.next() else {
            warn!("Workout ids exhausted at {}", self.next_id);
            return Err(SubmitError::IdsExhausted);
        };

        let workout = match self.form.read().into_workout(self.next_id, coordinates, now) {
            Ok(workout) => workout,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return Err(err.into());
            }
        };

        let id = workout.id();
        self.next_id = following;

        if self.map_ready {
            self.map.add_marker(&MarkerSpec::from(&workout));
        }
        info!("Created workout {id}: {}", workout.description());
        self.workouts.push(workout);
        self.persist();

        self.pending = None;
        self.form.clear_inputs();
        self.form.collapse();

        Ok(id)
    }

    /// Called once [`AppConfig::form_reveal_delay`] has passed after a submission.
    pub fn finish_form_collapse(&mut self) {
        self.form.finish_collapse();
    }

    /// Pans the map to the workout. Returns false when nothing moved.
    pub fn on_workout_click(&mut self, id: WorkoutId) -> bool {
        if !self.map_ready {
            return false;
        }

        let Some(workout) = self.workouts.iter().find(|w| w.id() == id) else {
            debug!("No workout with id {id}");
            return false;
        };

        let pan = PanOptions {
            animate: true,
            duration: self.config.pan_duration,
        };
        self.map.set_view(workout.coordinates(), self.config.default_zoom, pan);
        true
    }

    /// Drops all persisted and in-memory workouts.
    pub fn reset(&mut self) {
        self.store.remove(&self.config.storage_key);
        self.workouts.clear();
        self.pending = None;
        self.form = EntryForm::default();
        self.next_id = WorkoutId::default();

        if self.map_ready {
            self.map.clear_markers();
        }
        info!("Workouts reset");
    }

    fn render_markers(&mut self) {
        self.map.clear_markers();
        for workout in &self.workouts {
            self.map.add_marker(&MarkerSpec::from(workout));
        }
    }

    fn persist(&mut self) {
        let blob = match storage::encode(&self.workouts) {
            Ok(blob) => blob,
            Err(err) => {
                warn!("Failed to encode workouts: {err}");
                return;
            }
        };

        if let Err(err) = self.store.set(&self.config.storage_key, &blob) {
            warn!("Failed to persist workouts: {err}");
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// List entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = WorkoutEntry> + '_ {
        self.workouts.iter().rev().map(WorkoutEntry::from)
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn take_focus_request(&mut self) -> bool {
        self.form.take_focus_request()
    }

    pub fn pending(&self) -> Option<Coordinates> {
        self.pending
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
